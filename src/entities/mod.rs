//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;  
//! instead, it identifies which pieces of data ([Components](crate::components::ComponentInstance)) belong together.
//!
//! Structural changes (creating or destroying entities, adding or removing components) are staged
//! by the [EntityStore] and only become visible once the [World](crate::world::World) is updated.

mod entity_store;
mod entity_command;
mod entity_instance;

pub use entity_store::*;
pub use entity_instance::Entity;

pub(crate) use entity_command::*;
pub(crate) use entity_instance::*;
