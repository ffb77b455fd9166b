use crate::components::{ComponentId, ComponentInstance};
use crate::data_structures::BitField;
use std::fmt::{Display, Formatter};
use nohash_hasher::IntMap;

/// A unique, generational handle to an entity.
///
/// Destroying an entity bumps the version of its slot, so handles to a destroyed entity
/// never resolve to whatever entity later reuses the slot.
/// The default handle never refers to a live entity.
#[derive(Default, Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) index: u32,
	pub(crate) version: u32,
}

impl Entity {
	pub const fn index(&self) -> u32 {
		self.index
	}

	pub const fn version(&self) -> u32 {
		self.version
	}
}

impl Display for Entity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}v{}", self.index, self.version)
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum SlotState {
	Vacant,
	/// Handed out by `create_entity`, waiting for the next reconcile.
	Reserved,
	Live,
}

pub(crate) struct EntityRecord {
	pub(crate) version: u32,
	pub(crate) state: SlotState,
	pub(crate) mask: BitField,
	/// The mask the entity will have once the pending commands are applied.
	pub(crate) staged_mask: BitField,
	/// Set once a destroy is staged; no further commands are accepted for this version.
	pub(crate) doomed: bool,
	pub(crate) components: IntMap<ComponentId, ComponentInstance>,
}

impl Default for EntityRecord {
	fn default() -> Self {
		Self {
			version: 1,
			state: SlotState::Vacant,
			mask: BitField::new(),
			staged_mask: BitField::new(),
			doomed: false,
			components: IntMap::default(),
		}
	}
}

impl EntityRecord {
	pub(crate) fn insert(&mut self, instance: ComponentInstance) {
		let id = instance.kind().id();
		self.mask.set(id.value(), true);
		self.components.insert(id, instance);
	}

	pub(crate) fn remove(&mut self, id: ComponentId) -> Option<ComponentInstance> {
		self.mask.set(id.value(), false);
		self.components.remove(&id)
	}

	/// Returns `true` if `entity` refers to this version of the slot and can still take staged commands.
	pub(crate) fn accepts(&self, entity: Entity) -> bool {
		self.version == entity.version && self.state != SlotState::Vacant && !self.doomed
	}

	/// Drops all components and invalidates outstanding handles.
	pub(crate) fn vacate(&mut self) {
		self.state = SlotState::Vacant;
		self.doomed = false;
		self.mask.clear();
		self.staged_mask.clear();
		self.components.clear();
		self.version = match self.version.wrapping_add(1) {
			0 => 1,
			v => v,
		};
	}
}
