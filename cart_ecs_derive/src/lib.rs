mod component;

use proc_macro::TokenStream;
use syn::DeriveInput;

/// Implements `cart_ecs::components::Component` for a struct with named fields.
///
/// The struct must implement [`Default`], which provides the kind's default template,
/// and every field type must implement `cart_ecs::components::FieldValue`.
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    match syn::parse::<DeriveInput>(input) {
        Ok(ast) => component::impl_component(&ast),
        Err(error) => error.to_compile_error().into(),
    }
}
