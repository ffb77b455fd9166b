use crate::data_structures::BitField;

#[test]
pub fn set_and_get() {
	let mut bitfield = BitField::new();
	bitfield.set(3, true);
	bitfield.set(70, true);

	assert!(bitfield.get(3), "Bit 3 should be set");
	assert!(bitfield.get(70), "Bit 70 should be set");
	assert!(!bitfield.get(4), "Bit 4 should not be set");
	assert!(!bitfield.get(1000), "Bits past the end should read as unset");

	bitfield.set(70, false);
	bitfield.set(2000, false);
	assert!(!bitfield.get(70), "Bit 70 should have been cleared");
	assert!(bitfield.get(3), "Clearing bit 70 should leave bit 3 alone");
}

#[test]
pub fn subset() {
	let filter: BitField = [1, 5].into_iter().collect();
	let mask: BitField = [1, 5, 40].into_iter().collect();
	let partial: BitField = [1, 40].into_iter().collect();

	assert!(filter.is_subset_of(&mask), "Filter should be a subset of the full mask");
	assert!(!filter.is_subset_of(&partial), "Filter should not be a subset of a mask missing bit 5");
	assert!(BitField::new().is_subset_of(&partial), "An empty filter matches everything");
	assert!(!mask.is_subset_of(&filter), "A longer mask is not a subset of a shorter one");
}

#[test]
pub fn disjoint() {
	let a: BitField = [0, 33].into_iter().collect();
	let b: BitField = [1, 34, 100].into_iter().collect();
	let c: BitField = [33].into_iter().collect();

	assert!(a.is_disjoint(&b));
	assert!(!a.is_disjoint(&c));
	assert!(BitField::new().is_disjoint(&a));
}

#[test]
pub fn equality_ignores_trailing_zeros() {
	let mut a = BitField::new();
	let mut b = BitField::new();
	a.set(7, true);
	a.set(255, true);
	a.set(255, false);
	b.set(7, true);

	assert_eq!(a, b, "Bitfields with the same set bits should be equal");

	b.set(200, true);
	assert_ne!(a, b);

	a.clear();
	assert!(a.is_empty());
}
