use crate::components::{ComponentInstance, ComponentKind};
use crate::entities::Entity;

/// A structural change waiting for the next reconcile.
pub(crate) enum Command {
	Spawn { entity: Entity, components: Vec<ComponentInstance> },
	Insert { entity: Entity, instance: ComponentInstance },
	Remove { entity: Entity, kind: ComponentKind },
	Despawn { entity: Entity },
}

impl Command {
	pub(crate) fn entity(&self) -> Entity {
		match self {
			Command::Spawn { entity, .. } => *entity,
			Command::Insert { entity, .. } => *entity,
			Command::Remove { entity, .. } => *entity,
			Command::Despawn { entity } => *entity,
		}
	}
}
