mod bit_field_tests;
mod entity_tests;

use crate::components::{Component, ComponentKind};
use crate::world::World;

#[derive(Default, Component, Debug, Clone, PartialEq)]
pub struct Position {
	pub x: f32,
	pub y: f32,
}

#[derive(Default, Component, Debug, Clone, PartialEq)]
pub struct Velocity {
	pub dx: f32,
	pub dy: f32,
}

pub struct Kinds {
	pub position: ComponentKind,
	pub size: ComponentKind,
	pub velocity: ComponentKind,
}

/// A world with a dynamic `Size` kind and the typed `Position` and `Velocity` kinds registered.
pub fn world_with_kinds() -> (World, Kinds) {
	let mut world = World::new();
	let kinds = Kinds {
		position: world.register::<Position>().unwrap(),
		size: world.define_component("Size", [("width", 1.0), ("height", 1.0)]).unwrap(),
		velocity: world.register::<Velocity>().unwrap(),
	};
	(world, kinds)
}
