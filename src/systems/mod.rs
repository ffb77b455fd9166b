//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::ComponentInstance).
//!
//! A system is a [Filter] plus a callback. It does not track entities itself: its matching set
//! is recomputed by the [World](crate::world::World) whenever structural changes are reconciled,
//! and stays frozen until the next reconcile.

mod system;
mod system_filter;
mod system_registry;

pub use system::*;
pub use system_filter::*;
pub(crate) use system_registry::*;
