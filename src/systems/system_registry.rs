use crate::entities::{Entity, EntityStore};
use crate::systems::{Filter, System};
use std::any::Any;

pub(crate) struct SystemEntry {
	name: String,
	filter: Filter,
	/// A `Box<dyn System<A>>` for the argument type the system was defined with.
	callback: Box<dyn Any>,
	matches: Vec<Entity>,
}

impl SystemEntry {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn matches(&self) -> &[Entity] {
		&self.matches
	}

	/// Splits the entry into its name, its callback and its matching set.
	/// Returns `None` if the system was defined with a different argument type.
	pub fn parts_mut<A: 'static>(&mut self) -> Option<(&str, &mut (dyn System<A> + 'static), &[Entity])> {
		let callback = self.callback.downcast_mut::<Box<dyn System<A>>>()?;
		Some((&self.name, callback.as_mut(), &self.matches))
	}

	fn refresh(&mut self, entities: &EntityStore) {
		let filter = &self.filter;
		self.matches.clear();
		self.matches.extend(
			entities
				.entities()
				.iter()
				.copied()
				.filter(|e| entities.mask(*e).map_or(false, |mask| filter.matches(mask))),
		);
	}
}

/// Holds every system of a [World](crate::world::World) together with its frozen matching set.
pub(crate) struct SystemRegistry {
	systems: Vec<SystemEntry>,
}

impl SystemRegistry {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			systems: Vec::with_capacity(capacity),
		}
	}

	/// Registers a system and computes its matching set from the live entities.
	pub fn add<A: 'static>(&mut self, filter: Filter, mut system: Box<dyn System<A>>, entities: &EntityStore) -> usize {
		system.setup();

		let index = self.systems.len();
		let name = filter.name().map_or_else(|| format!("system#{}", index), str::to_string);
		let mut entry = SystemEntry {
			name,
			filter,
			callback: Box::new(system),
			matches: vec![],
		};

		entry.refresh(entities);
		self.systems.push(entry);
		index
	}

	pub fn get(&self, index: usize) -> Option<&SystemEntry> {
		self.systems.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut SystemEntry> {
		self.systems.get_mut(index)
	}

	/// Recomputes the matching set of every system.
	pub fn refresh(&mut self, entities: &EntityStore) {
		for entry in &mut self.systems {
			entry.refresh(entities);
		}
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}
}
