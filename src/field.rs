use std::cell::{Ref as CellRef, RefCell};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

use crate::binding::Binding;
use crate::changes::{Change, ChangeSet};
use crate::dispatch;
use crate::hashed::Hashed;
use crate::EqualityCheck;

/// A bindable property: owns its current value and routes every write
/// through the pre-commit/commit pipeline of the owner's scheduler.
pub struct BindableField<T> {
	binding: Binding,
	property: &'static str,
	value: RefCell<Hashed<Rc<T>>>,
	adapter: Option<Box<dyn Fn(T) -> T>>,
}

/// Read guard over the current value.
pub struct Ref<'a, T> {
	guard: CellRef<'a, Rc<T>>,
}

impl<'a, T> Deref for Ref<'a, T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&**self.guard
	}
}

impl<T> BindableField<T>
where
	T: 'static,
{
	pub(crate) fn new(binding: Binding, property: &'static str, value: T) -> Self
	where
		T: Hash,
	{
		let hash = fxhash::hash64(&value);
		BindableField {
			binding,
			property,
			value: RefCell::new(Hashed::with_hash(Rc::new(value), hash)),
			adapter: None,
		}
	}

	pub(crate) fn with_adapter(
		binding: Binding,
		property: &'static str,
		value: T,
		adapter: Box<dyn Fn(T) -> T>,
	) -> Self
	where
		T: Hash,
	{
		let value = adapter(value);
		let hash = fxhash::hash64(&value);
		BindableField {
			binding,
			property,
			value: RefCell::new(Hashed::with_hash(Rc::new(value), hash)),
			adapter: Some(adapter),
		}
	}

	pub fn property(&self) -> &'static str {
		self.property
	}

	#[inline]
	pub fn get(&self) -> Ref<'_, T> {
		Ref {
			guard: CellRef::map(self.value.borrow(), |hashed| &hashed.value),
		}
	}

	/// Writes the value through the pipeline: adapter, equality policy,
	/// pre-commit veto, store, then enqueue for the next flush. A vetoed
	/// write leaves the stored value untouched. A write through a stale
	/// binding still stores, but dispatches and enqueues nothing.
	pub fn set(&self, value: T)
	where
		T: Hash,
	{
		let value = match &self.adapter {
			Some(adapter) => adapter(value),
			None => value,
		};
		let new_hash = fxhash::hash64(&value);
		let (old, old_hash) = {
			let current = self.value.borrow();
			(current.value.clone(), current.hash)
		};

		if self.binding.equality() == EqualityCheck::BeforeVeto && new_hash == old_hash {
			return;
		}

		let new = Rc::new(value);
		let owner = self.binding.owner_id();
		let change = Change::new(old, old_hash, new.clone(), new_hash);
		let changes = ChangeSet::single(self.property, change.clone());

		if dispatch::pre_commit(self.binding.body(), owner, &changes) {
			return;
		}

		if new_hash == old_hash {
			// AfterVeto policy: listeners saw the write, value unchanged
			return;
		}

		*self.value.borrow_mut() = Hashed::with_hash(new, new_hash);

		let notify = match self.binding.body().owners().borrow().get(owner) {
			Some(state) => !state.suspended && !state.commit.is_empty(),
			None => false,
		};

		if notify {
			self.binding.body().enqueue(owner, self.property, change);
		}
	}

	#[inline]
	pub fn update(&self, func: impl FnOnce(&mut T))
	where
		T: Clone + Hash,
	{
		let mut value = {
			let current = self.value.borrow();
			(*current.value).clone()
		};
		func(&mut value);
		self.set(value);
	}

	#[inline]
	pub fn toggle(&self)
	where
		T: Toggle + Clone + Hash,
	{
		self.update(T::toggle)
	}
}

pub trait Toggle {
	fn toggle(&mut self);
}

impl Toggle for bool {
	fn toggle(&mut self) {
		*self = !*self
	}
}

impl<T> Debug for BindableField<T>
where
	T: Debug + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.get().fmt(f)
	}
}
