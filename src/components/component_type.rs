use crate::components::{ComponentId, ComponentInstance, Value};
use crate::error::{EcsError, Result};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The immutable field template shared by every instance of a kind.
pub(crate) struct Template {
	name: Arc<str>,
	fields: Vec<Arc<str>>,
	defaults: Vec<Value>,
}

/// A runtime component kind: an id plus a template of named fields with default values.
///
/// Cloning a [ComponentKind] is cheap; all clones share the same template.
/// Two kinds are equal if they were defined by the same world with the same [ComponentId].
#[derive(Clone)]
pub struct ComponentKind {
	id: ComponentId,
	world: u32,
	template: Arc<Template>,
}

impl ComponentKind {
	pub(crate) fn new<K, V>(
		id: ComponentId, world: u32, name: &str, defaults: impl IntoIterator<Item = (K, V)>,
	) -> Result<Self>
	where
		K: AsRef<str>,
		V: Into<Value>,
	{
		let mut fields: Vec<Arc<str>> = vec![];
		let mut values = vec![];

		for (field, value) in defaults {
			let field = field.as_ref();
			if fields.iter().any(|f| f.as_ref() == field) {
				return Err(EcsError::DuplicateField {
					kind: name.to_string(),
					field: field.to_string(),
				});
			}
			fields.push(Arc::from(field));
			values.push(value.into());
		}

		Ok(Self {
			id,
			world,
			template: Arc::new(Template {
				name: Arc::from(name),
				fields,
				defaults: values,
			}),
		})
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	/// Id of the world whose registry defined this kind.
	pub(crate) const fn world(&self) -> u32 {
		self.world
	}

	pub fn name(&self) -> &str {
		&self.template.name
	}

	/// Field names in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.template.fields.iter().map(|f| f.as_ref())
	}

	/// The default value of `field`.
	pub fn default_of(&self, field: &str) -> Result<&Value> {
		let index = self.field_index(field)?;
		Ok(&self.template.defaults[index])
	}

	/// Creates an instance holding the default value of every field.
	pub fn default_instance(&self) -> ComponentInstance {
		ComponentInstance::new(self.clone(), self.template.defaults.clone())
	}

	/// Creates an instance from the defaults, replacing the fields named in `overrides`.
	///
	/// Fails with [InvalidField](EcsError::InvalidField) if an override names a field the template
	/// doesn't have, and with [FieldType](EcsError::FieldType) if the override's type differs
	/// from the default's.
	pub fn instance<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Result<ComponentInstance>
	where
		K: AsRef<str>,
		V: Into<Value>,
	{
		let mut instance = self.default_instance();
		for (field, value) in overrides {
			instance.set(field.as_ref(), value)?;
		}
		Ok(instance)
	}

	pub(crate) fn field_index(&self, field: &str) -> Result<usize> {
		self.template.fields.iter().position(|f| f.as_ref() == field).ok_or_else(|| EcsError::InvalidField {
			kind: self.name().to_string(),
			field: field.to_string(),
		})
	}

	pub(crate) fn field_name(&self, index: usize) -> &str {
		&self.template.fields[index]
	}
}

impl Eq for ComponentKind {}

impl PartialEq<Self> for ComponentKind {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.world == other.world
	}
}

impl Hash for ComponentKind {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
		self.world.hash(state);
	}
}

impl Debug for ComponentKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentKind").field("id", &self.id).field("name", &self.name()).finish()
	}
}

/// A Rust type that maps onto a [ComponentKind].
///
/// Usually implemented through #\[derive([`Component`](cart_ecs_derive::Component))],
/// which takes the defaults from the type's [Default] implementation.
pub trait Component: Sized + 'static {
	/// Name given to the kind when the type is registered.
	const NAME: &'static str;

	/// The default template, in field declaration order.
	fn defaults() -> Vec<(&'static str, Value)>;

	/// The current field values of `self`.
	fn to_fields(&self) -> Vec<(&'static str, Value)>;

	/// Rebuilds the typed value from a dynamic instance.
	fn from_instance(instance: &ComponentInstance) -> Result<Self>;
}
