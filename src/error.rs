//! Errors raised by the runtime.
//!
//! Every variant describes a programmer error: a misspelled field, a broken filter assumption
//! or a handle that outlived its entity. None of them are retried.

use crate::entities::Entity;
use thiserror::Error;

/// Errors that can occur while defining components, mutating entities or running systems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcsError {
	/// An override or field access named a field the component's template does not define.
	#[error("component `{kind}` has no field named `{field}`")]
	InvalidField {
		/// The component kind's name.
		kind: String,
		/// The offending field name.
		field: String,
	},

	/// A component template listed the same field more than once.
	#[error("component `{kind}` defines field `{field}` more than once")]
	DuplicateField {
		/// The component kind's name.
		kind: String,
		/// The repeated field name.
		field: String,
	},

	/// A field was assigned or read as a type other than the one its default declares.
	#[error("field `{kind}.{field}` holds {found}, expected {expected}")]
	FieldType {
		/// The component kind's name.
		kind: String,
		/// The field name.
		field: String,
		/// The requested type.
		expected: &'static str,
		/// The type actually stored.
		found: &'static str,
	},

	/// The entity does not currently own a component of the requested kind.
	#[error("entity {entity} has no `{kind}` component")]
	ComponentNotPresent {
		/// The entity that was queried.
		entity: Entity,
		/// The component kind's name.
		kind: String,
	},

	/// A second instance of a kind the entity already owns was attached,
	/// or a new entity was given two instances of one kind.
	#[error("{} already has a `{kind}` component", describe_entity(.entity))]
	DuplicateComponentKind {
		/// The entity being modified, or `None` if it was being created.
		entity: Option<Entity>,
		/// The component kind's name.
		kind: String,
	},

	/// A structural change targeted an entity that is destroyed, or already staged for destruction.
	#[error("entity {0} does not exist")]
	NoSuchEntity(Entity),

	/// A component kind defined by another world was used.
	#[error("component `{0}` belongs to another world")]
	UnknownComponent(String),

	/// A typed component was used before being registered with the world.
	#[error("component type `{0}` has not been registered")]
	UnregisteredComponent(&'static str),

	/// A system handle does not belong to this world or was invoked with the wrong argument type.
	#[error("system {0} is not registered with this world")]
	UnknownSystem(usize),

	/// Creating another entity would exceed the configured entity limit.
	#[error("entity limit of {0} reached")]
	CapacityExceeded(usize),

	/// The world configuration could not be parsed.
	#[error("invalid configuration: {0}")]
	Config(String),
}

fn describe_entity(entity: &Option<Entity>) -> String {
	match entity {
		Some(entity) => format!("entity {}", entity),
		None => "new entity".to_string(),
	}
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EcsError>;
