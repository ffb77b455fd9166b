use crate::components::{Component, ComponentId, ComponentInstance, ComponentKind, Value};
use crate::error::{EcsError, Result};
use std::collections::HashMap;
use std::any::TypeId;
use log::debug;

/// Owns every [ComponentKind] defined in a [World](crate::world::World) and hands out their ids.
///
/// Kinds remember the world that defined them, so they cannot be confused with
/// the kinds of another world that happen to share an id.
pub struct ComponentRegistry {
	world: u32,
	kinds: Vec<ComponentKind>,
	types: HashMap<TypeId, ComponentId>,
}

impl ComponentRegistry {
	pub(crate) fn new(world: u32) -> Self {
		Self {
			world,
			kinds: vec![],
			types: HashMap::new(),
		}
	}

	/// Defines a new [ComponentKind] from an ordered list of `(field, default)` pairs.
	///
	/// Every call creates a distinct kind, even if the name and fields match an existing one.
	pub fn define_component<K, V>(&mut self, name: &str, defaults: impl IntoIterator<Item = (K, V)>) -> Result<ComponentKind>
	where
		K: AsRef<str>,
		V: Into<Value>,
	{
		let id = ComponentId::new(self.kinds.len() as u32);
		let kind = ComponentKind::new(id, self.world, name, defaults)?;

		debug!("defined component `{}` {} with {} fields", name, id, kind.fields().count());
		self.kinds.push(kind.clone());
		Ok(kind)
	}

	/// Defines the kind for the Rust type `T`. Registering the same type again returns the existing kind.
	pub fn register<T: Component>(&mut self) -> Result<ComponentKind> {
		if let Some(id) = self.types.get(&TypeId::of::<T>()) {
			return Ok(self.kinds[id.value()].clone());
		}

		let kind = self.define_component(T::NAME, T::defaults())?;
		self.types.insert(TypeId::of::<T>(), kind.id());
		Ok(kind)
	}

	/// Gets the kind registered for the Rust type `T`.
	pub fn kind<T: Component>(&self) -> Result<ComponentKind> {
		self.types
			.get(&TypeId::of::<T>())
			.map(|id| self.kinds[id.value()].clone())
			.ok_or(EcsError::UnregisteredComponent(T::NAME))
	}

	/// Converts a typed value into an instance of its registered kind.
	pub fn instance_of<T: Component>(&self, value: &T) -> Result<ComponentInstance> {
		self.kind::<T>()?.instance(value.to_fields())
	}

	pub fn get(&self, id: ComponentId) -> Option<&ComponentKind> {
		self.kinds.get(id.value())
	}

	/// Returns `true` if `kind` was defined by this registry.
	pub fn owns(&self, kind: &ComponentKind) -> bool {
		kind.world() == self.world
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ComponentKind> {
		self.kinds.iter()
	}
}
