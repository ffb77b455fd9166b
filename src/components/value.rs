use crate::entities::Entity;
use std::mem::discriminant;
use std::sync::Arc;

/// A dynamically typed component field.
///
/// The type of a field is fixed by its default: an instance can only ever store a [Value]
/// of the same variant in that field.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(Arc<str>),
	/// A non-owning reference to another entity. The target may be destroyed at any time,
	/// so it has to be resolved through the [EntityStore](crate::entities::EntityStore) on every use.
	Entity(Option<Entity>),
}

impl Value {
	/// Name of the variant, used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Text(_) => "text",
			Value::Entity(_) => "entity",
		}
	}

	/// Returns `true` if both values are the same variant.
	pub fn same_type(&self, other: &Value) -> bool {
		discriminant(self) == discriminant(other)
	}

	pub fn as_entity(&self) -> Option<Entity> {
		match self {
			Value::Entity(entity) => *entity,
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}
}

/// Conversion between Rust field types and [Value].
///
/// Implemented for the primitive types a component field can hold;
/// #\[derive([Component](crate::components::Component))] requires it for every field.
pub trait FieldValue: Sized {
	/// Name reported when a stored [Value] cannot be converted.
	const TYPE_NAME: &'static str;

	fn to_value(&self) -> Value;

	/// Returns `None` if `value` is a different variant or out of range for `Self`.
	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_int_field {
    ($($t: ty),*) => {
        $(
            impl FieldValue for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn to_value(&self) -> Value {
                    Value::Int(*self as i64)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_int().and_then(|v| <$t>::try_from(v).ok())
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    value.to_value()
                }
            }
        )*
    };
}

macro_rules! impl_float_field {
    ($($t: ty),*) => {
        $(
            impl FieldValue for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn to_value(&self) -> Value {
                    Value::Float(*self as f64)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_float().map(|v| v as $t)
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    value.to_value()
                }
            }
        )*
    };
}

impl_int_field!(i8, i16, i32, i64, u8, u16, u32);
impl_float_field!(f32, f64);

impl FieldValue for bool {
	const TYPE_NAME: &'static str = "bool";

	fn to_value(&self) -> Value {
		Value::Bool(*self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}
}

impl FieldValue for String {
	const TYPE_NAME: &'static str = "String";

	fn to_value(&self) -> Value {
		Value::Text(Arc::from(self.as_str()))
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Text(v) => Some(v.to_string()),
			_ => None,
		}
	}
}

impl FieldValue for Entity {
	const TYPE_NAME: &'static str = "Entity";

	fn to_value(&self) -> Value {
		Value::Entity(Some(*self))
	}

	fn from_value(value: &Value) -> Option<Self> {
		value.as_entity()
	}
}

impl FieldValue for Option<Entity> {
	const TYPE_NAME: &'static str = "Option<Entity>";

	fn to_value(&self) -> Value {
		Value::Entity(*self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Entity(v) => Some(*v),
			_ => None,
		}
	}
}

impl FieldValue for Value {
	const TYPE_NAME: &'static str = "Value";

	fn to_value(&self) -> Value {
		self.clone()
	}

	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(Arc::from(value))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(Arc::from(value))
	}
}

impl From<Entity> for Value {
	fn from(value: Entity) -> Self {
		Value::Entity(Some(value))
	}
}

impl From<Option<Entity>> for Value {
	fn from(value: Option<Entity>) -> Self {
		Value::Entity(value)
	}
}
