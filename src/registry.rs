use std::rc::Rc;

use smallvec::SmallVec;

use crate::addr::RcAddr;
use crate::Priority;

pub type OrderedQueue<F> = SmallVec<[(Rc<F>, Priority); 4]>;

struct Entry<F: ?Sized> {
	callback: RcAddr<F>,
	priority: Priority,
}

/// One listener collection: callbacks keyed by `Rc` pointer identity,
/// each with a priority. The priority ordering is built lazily and cached;
/// any add or remove clears the cache.
pub struct Listeners<F: ?Sized> {
	entries: Vec<Entry<F>>,
	ordered: Option<OrderedQueue<F>>,
}

impl<F: ?Sized> Listeners<F> {
	pub fn new() -> Self {
		Listeners {
			entries: Vec::new(),
			ordered: None,
		}
	}

	/// Inserts the callback, or overwrites its priority if the same `Rc`
	/// is already present. Re-adding never duplicates and keeps the
	/// original insertion position for tie-breaking.
	pub fn add(&mut self, callback: Rc<F>, priority: Priority) {
		let key = RcAddr::new(callback);
		match self.entries.iter().position(|entry| entry.callback == key) {
			Some(index) => self.entries[index].priority = priority,
			None => self.entries.push(Entry {
				callback: key,
				priority,
			}),
		}
		self.ordered = None;
	}

	/// Silent no-op if the callback was never added.
	pub fn remove(&mut self, callback: &Rc<F>) {
		let key = RcAddr::new(callback.clone());
		self.entries.retain(|entry| entry.callback != key);
		self.ordered = None;
	}

	/// Dispatch-order snapshot: priority ascending, ties in insertion
	/// order. Returns a clone of the cached queue so callers hold no
	/// borrow while invoking callbacks.
	pub fn ordered(&mut self) -> OrderedQueue<F> {
		if self.ordered.is_none() {
			let mut queue: OrderedQueue<F> = self
				.entries
				.iter()
				.map(|entry| ((*entry.callback).clone(), entry.priority))
				.collect();
			queue.sort_by_key(|(_, priority)| *priority);
			self.ordered = Some(queue);
		}
		self.ordered.as_ref().unwrap().clone()
	}

	/// The live collection in insertion order, as a snapshot.
	pub fn entries(&self) -> Vec<(Rc<F>, Priority)> {
		self.entries
			.iter()
			.map(|entry| ((*entry.callback).clone(), entry.priority))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<F: ?Sized> Default for Listeners<F> {
	fn default() -> Self {
		Listeners::new()
	}
}
