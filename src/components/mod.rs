//! [Component kinds](ComponentKind) describe named bundles of default-valued fields.
//!
//! A kind is defined once per [World](crate::world::World), either dynamically through
//! [`define_component`](ComponentRegistry::define_component) or from a Rust type deriving
//! [Component]. Each [instance](ComponentInstance) owns its own copy of the field values.

mod value;
mod component_id;
mod component_type;
mod component_instance;
mod component_registry;

pub use value::*;
pub use component_id::*;
pub use component_type::*;
pub use component_instance::*;
pub use component_registry::*;
pub use cart_ecs_derive::Component;
