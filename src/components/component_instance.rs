use crate::components::{ComponentKind, FieldValue, Value};
use crate::error::{EcsError, Result};

/// A component value: a [ComponentKind] plus its own copy of the field values.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentInstance {
	kind: ComponentKind,
	values: Vec<Value>,
}

impl ComponentInstance {
	pub(crate) fn new(kind: ComponentKind, values: Vec<Value>) -> Self {
		Self { kind, values }
	}

	pub fn kind(&self) -> &ComponentKind {
		&self.kind
	}

	/// Gets the value of `field`.
	pub fn get(&self, field: &str) -> Result<&Value> {
		let index = self.kind.field_index(field)?;
		Ok(&self.values[index])
	}

	/// Gets the value of `field` converted to `T`.
	pub fn read<T: FieldValue>(&self, field: &str) -> Result<T> {
		let value = self.get(field)?;
		T::from_value(value).ok_or_else(|| EcsError::FieldType {
			kind: self.kind.name().to_string(),
			field: field.to_string(),
			expected: T::TYPE_NAME,
			found: value.type_name(),
		})
	}

	/// Overwrites the value of `field`. The new value must have the same type as the field's default.
	pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
		let index = self.kind.field_index(field)?;
		let value = value.into();
		let slot = &mut self.values[index];

		if !slot.same_type(&value) {
			return Err(EcsError::FieldType {
				kind: self.kind.name().to_string(),
				field: field.to_string(),
				expected: slot.type_name(),
				found: value.type_name(),
			});
		}

		*slot = value;
		Ok(())
	}

	/// Iterate over `(field, value)` pairs in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().enumerate().map(move |(i, v)| (self.kind.field_name(i), v))
	}
}
