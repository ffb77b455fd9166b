use syn::{Data, DeriveInput, Fields};
use proc_macro::TokenStream;
use quote::quote;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "Component can only be derived for structs with named fields")
                    .to_compile_error()
                    .into()
            },
        },
        _ => {
            return syn::Error::new_spanned(name, "Component can only be derived for structs")
                .to_compile_error()
                .into()
        },
    };

    let idents: Vec<_> = fields.iter().filter_map(|f| f.ident.clone()).collect();
    let keys: Vec<_> = idents.iter().map(|i| i.to_string()).collect();

    let gen = quote! {
        impl #impl_generics cart_ecs::components::Component for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;

            fn defaults() -> ::std::vec::Vec<(&'static str, cart_ecs::components::Value)> {
                let value: Self = ::core::default::Default::default();
                cart_ecs::components::Component::to_fields(&value)
            }

            fn to_fields(&self) -> ::std::vec::Vec<(&'static str, cart_ecs::components::Value)> {
                ::std::vec![
                    #((#keys, cart_ecs::components::FieldValue::to_value(&self.#idents))),*
                ]
            }

            fn from_instance(
                instance: &cart_ecs::components::ComponentInstance,
            ) -> cart_ecs::error::Result<Self> {
                ::core::result::Result::Ok(Self {
                    #(#idents: instance.read(#keys)?),*
                })
            }
        }
    };
    gen.into()
}
