extern crate self as cart_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod config;
pub mod error;
pub mod world;

pub mod prelude {
	pub use crate::components::*;
	pub use crate::config::WorldConfig;
	pub use crate::error::{EcsError, Result};
	pub use crate::world::{Dispatch, World};
	pub use crate::entities::{Entity, EntityStore, Reconciliation};
	pub use crate::systems::{Filter, System, SystemHandle};
}

#[cfg(test)]
mod tests;
