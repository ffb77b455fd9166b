//! Startup configuration for a [World](crate::world::World).

use crate::error::{EcsError, Result};
use serde::Deserialize;

/// Tunables applied when a [World](crate::world::World) is created.
///
/// ```toml
/// entity_capacity = 256
/// system_capacity = 8
/// max_entities = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
	/// Number of entity slots reserved up front.
	pub entity_capacity: usize,
	/// Number of system slots reserved up front.
	pub system_capacity: usize,
	/// Upper bound on live plus staged entities. `None` means unbounded.
	pub max_entities: Option<usize>,
}

impl Default for WorldConfig {
	fn default() -> Self {
		Self {
			entity_capacity: 64,
			system_capacity: 8,
			max_entities: None,
		}
	}
}

impl WorldConfig {
	/// Parse a configuration from TOML. Missing keys take their default value.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| EcsError::Config(e.to_string()))
	}
}
