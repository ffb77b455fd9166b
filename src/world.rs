use crate::components::{Component, ComponentInstance, ComponentKind, ComponentRegistry, Value};
use crate::systems::{FnSystem, Filter, System, SystemHandle, SystemRegistry};
use crate::entities::{Entity, EntityStore, Reconciliation};
use std::sync::atomic::{AtomicU32, Ordering};
use crate::error::{EcsError, Result};
use std::ops::{Deref, DerefMut};
use crate::config::WorldConfig;
use log::{debug, warn};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// A container for [`entities`](Entity), their [`components`](ComponentInstance) and systems.
///
/// A frame is one call to [`update`](World::update), which applies every staged structural change
/// and freezes the matching set of every system, followed by any number of [`run`](World::run)
/// calls in an order chosen by the caller.
///
/// The world dereferences to its [EntityStore], so entities can be created and inspected directly.
pub struct World {
	id: u32,
	components: ComponentRegistry,
	entities: EntityStore,
	systems: SystemRegistry,
}

impl World {
	pub fn new() -> Self {
		Self::with_config(WorldConfig::default())
	}

	pub fn with_config(config: WorldConfig) -> Self {
		let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
		Self {
			id,
			components: ComponentRegistry::new(id),
			entities: EntityStore::new(id, config.entity_capacity, config.max_entities),
			systems: SystemRegistry::with_capacity(config.system_capacity),
		}
	}

	/// Defines a new [component kind](ComponentKind) from an ordered list of `(field, default)` pairs.
	pub fn define_component<K, V>(&mut self, name: &str, defaults: impl IntoIterator<Item = (K, V)>) -> Result<ComponentKind>
	where
		K: AsRef<str>,
		V: Into<Value>,
	{
		self.components.define_component(name, defaults)
	}

	/// Defines the [component kind](ComponentKind) for the Rust type `T`, or returns it if it already exists.
	pub fn register<T: Component>(&mut self) -> Result<ComponentKind> {
		self.components.register::<T>()
	}

	/// Gets the [component kind](ComponentKind) registered for `T`.
	pub fn kind<T: Component>(&self) -> Result<ComponentKind> {
		self.components.kind::<T>()
	}

	/// Converts a typed value into a [ComponentInstance] of its registered kind.
	pub fn instance_of<T: Component>(&self, value: &T) -> Result<ComponentInstance> {
		self.components.instance_of(value)
	}

	pub fn components(&self) -> &ComponentRegistry {
		&self.components
	}

	/// Reads the typed component `T` of `entity`.
	pub fn read<T: Component>(&self, entity: Entity) -> Result<T> {
		read_typed(&self.components, &self.entities, entity)
	}

	/// Overwrites the fields of the typed component `T` of `entity`.
	pub fn write<T: Component>(&mut self, entity: Entity, value: &T) -> Result<()> {
		write_typed(&self.components, &mut self.entities, entity, value)
	}

	/// Registers a system running `callback` for every entity matching `filter`.
	///
	/// The system's matching set is computed immediately from the live entities,
	/// and afterwards only changes when the world is updated.
	/// Fails with [UnknownComponent](EcsError::UnknownComponent) if the filter names a kind of another world.
	pub fn define_system<A, F>(&mut self, filter: Filter, callback: F) -> Result<SystemHandle<A>>
	where
		A: 'static,
		F: FnMut(&mut Dispatch<'_>, Entity, &A) -> Result<()> + 'static,
	{
		self.add_system(filter, FnSystem(callback))
	}

	/// Registers a [System] implementation. Its [`setup`](System::setup) runs immediately.
	pub fn add_system<A, S>(&mut self, filter: Filter, system: S) -> Result<SystemHandle<A>>
	where
		A: 'static,
		S: System<A> + 'static,
	{
		if let Some(kind) = filter.kinds().iter().find(|k| !self.components.owns(k)) {
			return Err(EcsError::UnknownComponent(kind.name().to_string()));
		}

		let system: Box<dyn System<A>> = Box::new(system);
		let index = self.systems.add(filter, system, &self.entities);

		if let Some(entry) = self.systems.get(index) {
			debug!("defined system `{}` matching {} entities", entry.name(), entry.matches().len());
		}
		Ok(SystemHandle::new(index, self.id))
	}

	/// Applies all staged structural changes, then recomputes the matching set of every system.
	///
	/// Calling it again without staging anything in between leaves every matching set unchanged.
	pub fn update(&mut self) -> Reconciliation {
		let report = self.entities.reconcile();
		if !report.is_empty() {
			self.systems.refresh(&self.entities);
			debug!("refreshed {} systems", self.systems.len());
		}
		report
	}

	/// Runs a system once for every entity in its matching set, in creation order,
	/// passing `args` through unchanged. Returns the number of entities visited.
	///
	/// Structural changes issued by the callback are staged for the next update,
	/// so the matching set cannot change while it is being iterated.
	/// The first error returned by the callback stops the run.
	pub fn run<A: 'static>(&mut self, handle: &SystemHandle<A>, args: &A) -> Result<usize> {
		if handle.world != self.id {
			return Err(EcsError::UnknownSystem(handle.index));
		}

		let entry = self.systems.get_mut(handle.index).ok_or(EcsError::UnknownSystem(handle.index))?;
		let (name, system, matches) = entry.parts_mut::<A>().ok_or(EcsError::UnknownSystem(handle.index))?;

		let mut dispatch = Dispatch {
			components: &self.components,
			entities: &mut self.entities,
		};

		for (visited, entity) in matches.iter().enumerate() {
			if let Err(error) = system.run(&mut dispatch, *entity, args) {
				warn!("system `{}` stopped at entity {} after {} entities: {}", name, entity, visited, error);
				return Err(error);
			}
		}

		Ok(matches.len())
	}

	/// The entities a system will visit until the next update.
	pub fn matching<A>(&self, handle: &SystemHandle<A>) -> Result<&[Entity]> {
		if handle.world != self.id {
			return Err(EcsError::UnknownSystem(handle.index));
		}

		self.systems
			.get(handle.index)
			.map(|entry| entry.matches())
			.ok_or(EcsError::UnknownSystem(handle.index))
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for World {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entities
	}
}

impl DerefMut for World {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entities
	}
}

/// The view of a [World] handed to system callbacks.
///
/// It dereferences to the [EntityStore]: components can be read and rewritten in place,
/// structural changes are staged. Neither the scheduler nor other systems are reachable from here.
pub struct Dispatch<'w> {
	components: &'w ComponentRegistry,
	entities: &'w mut EntityStore,
}

impl Dispatch<'_> {
	pub fn components(&self) -> &ComponentRegistry {
		self.components
	}

	/// Gets the [component kind](ComponentKind) registered for `T`.
	pub fn kind<T: Component>(&self) -> Result<ComponentKind> {
		self.components.kind::<T>()
	}

	/// Converts a typed value into a [ComponentInstance] of its registered kind.
	pub fn instance_of<T: Component>(&self, value: &T) -> Result<ComponentInstance> {
		self.components.instance_of(value)
	}

	/// Reads the typed component `T` of `entity`.
	pub fn read<T: Component>(&self, entity: Entity) -> Result<T> {
		read_typed(self.components, &*self.entities, entity)
	}

	/// Overwrites the fields of the typed component `T` of `entity`.
	pub fn write<T: Component>(&mut self, entity: Entity, value: &T) -> Result<()> {
		write_typed(self.components, &mut *self.entities, entity, value)
	}
}

impl Deref for Dispatch<'_> {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&*self.entities
	}
}

impl DerefMut for Dispatch<'_> {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut *self.entities
	}
}

fn read_typed<T: Component>(components: &ComponentRegistry, entities: &EntityStore, entity: Entity) -> Result<T> {
	let kind = components.kind::<T>()?;
	T::from_instance(entities.get_component(entity, &kind)?)
}

fn write_typed<T: Component>(
	components: &ComponentRegistry, entities: &mut EntityStore, entity: Entity, value: &T,
) -> Result<()> {
	let kind = components.kind::<T>()?;
	let instance = entities.get_component_mut(entity, &kind)?;
	for (field, value) in value.to_fields() {
		instance.set(field, value)?;
	}
	Ok(())
}
