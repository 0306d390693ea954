use std::any::Any;
use std::fmt::Debug;
use std::rc::Rc;

/// A single property transition. Values are type-erased; the fxhash of
/// each side rides along so equality can be rechecked without downcasting.
pub struct Change {
	old: Rc<dyn Any>,
	new: Rc<dyn Any>,
	old_hash: u64,
	new_hash: u64,
}

impl Change {
	pub(crate) fn new(old: Rc<dyn Any>, old_hash: u64, new: Rc<dyn Any>, new_hash: u64) -> Self {
		Change {
			old,
			new,
			old_hash,
			new_hash,
		}
	}

	/// The value the property held when it first changed in this cycle.
	pub fn old_value<T: 'static>(&self) -> Option<Rc<T>> {
		Rc::downcast::<T>(self.old.clone()).ok()
	}

	/// The value the property holds now (the last write of the cycle).
	pub fn new_value<T: 'static>(&self) -> Option<Rc<T>> {
		Rc::downcast::<T>(self.new.clone()).ok()
	}

	pub(crate) fn is_noop(&self) -> bool {
		self.old_hash == self.new_hash
	}

	// first-old/last-new: the original old side survives, only the new
	// side advances.
	pub(crate) fn overwrite_new(&mut self, newer: Change) {
		self.new = newer.new;
		self.new_hash = newer.new_hash;
	}
}

impl Clone for Change {
	fn clone(&self) -> Self {
		Change {
			old: self.old.clone(),
			new: self.new.clone(),
			old_hash: self.old_hash,
			new_hash: self.new_hash,
		}
	}
}

impl Debug for Change {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Change")
			.field("old_hash", &self.old_hash)
			.field("new_hash", &self.new_hash)
			.finish()
	}
}

/// Per-owner accumulator of property transitions within one flush cycle,
/// in insertion order of first accumulation. An entry, once created, is
/// never removed before the flush, even if the value returns to its
/// original.
pub struct ChangeSet {
	entries: Vec<(&'static str, Change)>,
}

impl ChangeSet {
	pub(crate) fn new() -> Self {
		ChangeSet {
			entries: Vec::new(),
		}
	}

	pub(crate) fn single(name: &'static str, change: Change) -> Self {
		ChangeSet {
			entries: vec![(name, change)],
		}
	}

	pub(crate) fn accumulate(&mut self, name: &'static str, change: Change) {
		match self.entries.iter().position(|(entry, _)| *entry == name) {
			Some(index) => self.entries[index].1.overwrite_new(change),
			None => self.entries.push((name, change)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&Change> {
		self.entries
			.iter()
			.find(|(entry, _)| *entry == name)
			.map(|(_, change)| change)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.iter().map(|(name, _)| *name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Change)> + '_ {
		self.entries.iter().map(|(name, change)| (*name, change))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Debug for ChangeSet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.names()).finish()
	}
}
