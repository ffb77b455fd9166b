use crate::components::ComponentKind;
use crate::data_structures::BitField;

/// It defines the set of [components](ComponentKind) an [entity](crate::entities::Entity)
/// must or must not include to be picked up by a [System](crate::systems::System).
#[derive(Clone, Debug, Default)]
pub struct Filter {
	name: Option<String>,
	include: BitField,
	exclude: BitField,
	kinds: Vec<ComponentKind>,
}

impl Filter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shorthand for `Filter::new().include(kinds)`.
	pub fn requiring<'l>(kinds: impl IntoIterator<Item = &'l ComponentKind>) -> Self {
		Self::new().include(kinds)
	}

	/// Specifies which [components](ComponentKind) an entity must include.
	pub fn include<'l>(mut self, kinds: impl IntoIterator<Item = &'l ComponentKind>) -> Self {
		for kind in kinds {
			self.include.set(kind.id().value(), true);
			self.kinds.push(kind.clone());
		}
		self
	}

	/// Specifies which [components](ComponentKind) an entity must not include.
	pub fn exclude<'l>(mut self, kinds: impl IntoIterator<Item = &'l ComponentKind>) -> Self {
		for kind in kinds {
			self.exclude.set(kind.id().value(), true);
			self.kinds.push(kind.clone());
		}
		self
	}

	/// Names the system built from this filter, for diagnostics.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn requires(&self, kind: &ComponentKind) -> bool {
		self.include.get(kind.id().value()) && self.kinds.contains(kind)
	}

	pub fn forbids(&self, kind: &ComponentKind) -> bool {
		self.exclude.get(kind.id().value()) && self.kinds.contains(kind)
	}

	/// Every kind the filter mentions, included or excluded.
	pub fn kinds(&self) -> &[ComponentKind] {
		&self.kinds
	}

	/// Tests an entity's component mask against the filter.
	pub fn matches(&self, mask: &BitField) -> bool {
		self.include.is_subset_of(mask) && self.exclude.is_disjoint(mask)
	}
}
