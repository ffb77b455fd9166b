use crate::components::{ComponentInstance, ComponentKind};
use crate::entities::{Command, Entity, EntityRecord, SlotState};
use crate::error::{EcsError, Result};
use crate::data_structures::BitField;
use log::{debug, trace};

/// Summary of the structural changes applied by a single reconcile.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Reconciliation {
	pub spawned: usize,
	pub despawned: usize,
	pub inserted: usize,
	pub removed: usize,
}

impl Reconciliation {
	/// Returns `true` if nothing was applied.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// Owns every [entity](Entity) and its [components](ComponentInstance).
///
/// Reads and in-place field writes act on the live state immediately.
/// Structural changes are validated when issued, then staged until the owning
/// [World](crate::world::World) reconciles.
pub struct EntityStore {
	world: u32,
	records: Vec<EntityRecord>,
	free: Vec<u32>,
	live: Vec<Entity>,
	pending: Vec<Command>,
	reserved: usize,
	max_entities: Option<usize>,
}

impl EntityStore {
	pub(crate) fn new(world: u32, capacity: usize, max_entities: Option<usize>) -> Self {
		Self {
			world,
			records: Vec::with_capacity(capacity),
			free: vec![],
			live: Vec::with_capacity(capacity),
			pending: vec![],
			reserved: 0,
			max_entities,
		}
	}

	/// Creates an [entity](Entity) owning the given [components](ComponentInstance).
	///
	/// The handle is valid immediately, but the entity only becomes visible to lookups and systems
	/// after the next reconcile. Fails with [DuplicateComponentKind](EcsError::DuplicateComponentKind)
	/// if two instances share a kind, in which case nothing is staged.
	pub fn create_entity(&mut self, components: impl IntoIterator<Item = ComponentInstance>) -> Result<Entity> {
		if let Some(max) = self.max_entities {
			if self.live.len() + self.reserved >= max {
				return Err(EcsError::CapacityExceeded(max));
			}
		}

		let components: Vec<_> = components.into_iter().collect();
		let mut mask = BitField::new();
		for instance in &components {
			self.check_kind(instance.kind())?;
			let id = instance.kind().id().value();
			if mask.get(id) {
				return Err(EcsError::DuplicateComponentKind {
					entity: None,
					kind: instance.kind().name().to_string(),
				});
			}
			mask.set(id, true);
		}

		let index = match self.free.pop() {
			Some(index) => index as usize,
			None => {
				self.records.push(EntityRecord::default());
				self.records.len() - 1
			},
		};

		let record = &mut self.records[index];
		record.state = SlotState::Reserved;
		record.staged_mask = mask;
		let entity = Entity {
			index: index as u32,
			version: record.version,
		};

		self.reserved += 1;
		self.pending.push(Command::Spawn { entity, components });
		Ok(entity)
	}

	/// Stages the destruction of an [entity](Entity). Its storage is reclaimed at the next reconcile.
	pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
		let record = self.staged_record(entity)?;
		record.doomed = true;
		self.pending.push(Command::Despawn { entity });
		Ok(())
	}

	/// Stages attaching `instance` to `entity`.
	///
	/// Fails with [DuplicateComponentKind](EcsError::DuplicateComponentKind) if the entity owns,
	/// or is already staged to own, a component of the same kind.
	pub fn add_component(&mut self, entity: Entity, instance: ComponentInstance) -> Result<()> {
		self.check_kind(instance.kind())?;
		let record = self.staged_record(entity)?;
		let id = instance.kind().id().value();
		if record.staged_mask.get(id) {
			return Err(EcsError::DuplicateComponentKind {
				entity: Some(entity),
				kind: instance.kind().name().to_string(),
			});
		}

		record.staged_mask.set(id, true);
		self.pending.push(Command::Insert { entity, instance });
		Ok(())
	}

	/// Stages detaching the component of the given kind from `entity`.
	pub fn remove_component(&mut self, entity: Entity, kind: &ComponentKind) -> Result<()> {
		self.check_kind(kind)?;
		let record = self.staged_record(entity)?;
		if !record.staged_mask.get(kind.id().value()) {
			return Err(not_present(entity, kind));
		}

		record.staged_mask.set(kind.id().value(), false);
		self.pending.push(Command::Remove {
			entity,
			kind: kind.clone(),
		});
		Ok(())
	}

	/// Gets the component of the given kind currently owned by `entity`.
	///
	/// Destroyed, stale and not yet reconciled handles own nothing, so looking up a
	/// relation whose target is gone fails with [ComponentNotPresent](EcsError::ComponentNotPresent).
	/// A kind defined by another world fails with [UnknownComponent](EcsError::UnknownComponent).
	pub fn get_component(&self, entity: Entity, kind: &ComponentKind) -> Result<&ComponentInstance> {
		self.check_kind(kind)?;
		self.live_record(entity)
			.and_then(|r| r.components.get(&kind.id()))
			.ok_or_else(|| not_present(entity, kind))
	}

	/// Gets a mutable reference to the component of the given kind currently owned by `entity`.
	pub fn get_component_mut(&mut self, entity: Entity, kind: &ComponentKind) -> Result<&mut ComponentInstance> {
		self.check_kind(kind)?;
		let index = entity.index as usize;
		match self.records.get_mut(index) {
			Some(record) if record.version == entity.version && record.state == SlotState::Live => {
				record.components.get_mut(&kind.id()).ok_or_else(|| not_present(entity, kind))
			},
			_ => Err(not_present(entity, kind)),
		}
	}

	pub fn has_component(&self, entity: Entity, kind: &ComponentKind) -> bool {
		kind.world() == self.world && self.live_record(entity).map_or(false, |r| r.mask.get(kind.id().value()))
	}

	/// Returns `true` if the entity has been reconciled and not yet destroyed.
	pub fn is_alive(&self, entity: Entity) -> bool {
		self.live_record(entity).is_some()
	}

	/// Live entities, in creation order.
	pub fn entities(&self) -> &[Entity] {
		&self.live
	}

	/// Number of live entities.
	pub fn len(&self) -> usize {
		self.live.len()
	}

	pub fn is_empty(&self) -> bool {
		self.live.is_empty()
	}

	/// Number of structural changes waiting for the next reconcile.
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	pub(crate) fn mask(&self, entity: Entity) -> Option<&BitField> {
		self.live_record(entity).map(|r| &r.mask)
	}

	/// Applies every staged command in the order it was issued.
	pub(crate) fn reconcile(&mut self) -> Reconciliation {
		let mut report = Reconciliation::default();
		if self.pending.is_empty() {
			return report;
		}

		let mut despawned = BitField::new();
		for command in std::mem::take(&mut self.pending) {
			let entity = command.entity();
			let record = &mut self.records[entity.index as usize];
			if record.version != entity.version {
				trace!("dropping command for stale entity {}", entity);
				continue;
			}

			match command {
				Command::Spawn { components, .. } => {
					trace!("spawn {} with {} components", entity, components.len());
					record.state = SlotState::Live;
					for instance in components {
						record.insert(instance);
					}
					self.reserved -= 1;
					self.live.push(entity);
					report.spawned += 1;
				},

				Command::Insert { instance, .. } => {
					trace!("insert `{}` into {}", instance.kind().name(), entity);
					record.insert(instance);
					report.inserted += 1;
				},

				Command::Remove { kind, .. } => {
					trace!("remove `{}` from {}", kind.name(), entity);
					record.remove(kind.id());
					report.removed += 1;
				},

				Command::Despawn { .. } => {
					trace!("despawn {}", entity);
					record.vacate();
					despawned.set(entity.index as usize, true);
					self.free.push(entity.index);
					report.despawned += 1;
				},
			}
		}

		if report.despawned > 0 {
			self.live.retain(|e| !despawned.get(e.index as usize));
		}

		debug!(
			"reconciled: {} spawned, {} despawned, {} inserted, {} removed, {} live",
			report.spawned,
			report.despawned,
			report.inserted,
			report.removed,
			self.live.len()
		);
		report
	}

	fn live_record(&self, entity: Entity) -> Option<&EntityRecord> {
		self.records
			.get(entity.index as usize)
			.filter(|r| r.version == entity.version && r.state == SlotState::Live)
	}

	/// The record of `entity` if it can still take structural changes.
	fn staged_record(&mut self, entity: Entity) -> Result<&mut EntityRecord> {
		self.records
			.get_mut(entity.index as usize)
			.filter(|r| r.accepts(entity))
			.ok_or(EcsError::NoSuchEntity(entity))
	}

	fn check_kind(&self, kind: &ComponentKind) -> Result<()> {
		match kind.world() == self.world {
			true => Ok(()),
			false => Err(EcsError::UnknownComponent(kind.name().to_string())),
		}
	}
}

fn not_present(entity: Entity, kind: &ComponentKind) -> EcsError {
	EcsError::ComponentNotPresent {
		entity,
		kind: kind.name().to_string(),
	}
}
