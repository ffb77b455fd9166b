//! A runtime identifier tied to a [ComponentKind](crate::components::ComponentKind).
//!
//! Ids are dense and allocated per [World](crate::world::World), starting at 0,
//! so they can index the [bitfields](crate::data_structures::BitField) used by entity masks
//! and system filters directly. They are not stable between program re-runs.

use std::fmt::{Display, Formatter};
use nohash_hasher::IsEnabled;

/// Identifies a component kind within its world.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: u32,
}

impl ComponentId {
	#[inline(always)]
	pub(crate) const fn new(value: u32) -> Self {
		Self { value }
	}

	/// The bit index used for this id.
	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value as usize
	}
}

impl IsEnabled for ComponentId {}

impl Display for ComponentId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.value)
	}
}
