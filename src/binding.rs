use std::hash::Hash;
use std::rc::Rc;

use crate::field::BindableField;
use crate::scheduler::SchedulerBody;
use crate::{CommitFn, EqualityCheck, OwnerId, PreCommitFn, Priority};

/// One owner's registration with a scheduler. Clones share the same
/// owner; the owning struct typically holds one and hands clones to its
/// bindable fields.
pub struct Binding {
	body: Rc<SchedulerBody>,
	id: OwnerId,
}

impl Clone for Binding {
	fn clone(&self) -> Self {
		Binding {
			body: self.body.clone(),
			id: self.id,
		}
	}
}

impl Binding {
	pub(crate) fn new(body: Rc<SchedulerBody>, id: OwnerId) -> Self {
		Binding { body, id }
	}

	pub(crate) fn body(&self) -> &Rc<SchedulerBody> {
		&self.body
	}

	pub(crate) fn equality(&self) -> EqualityCheck {
		self.body.equality()
	}

	pub fn owner_id(&self) -> OwnerId {
		self.id
	}

	/// Builds a bindable property owned by this owner.
	pub fn bind<T>(&self, property: &'static str, value: T) -> BindableField<T>
	where
		T: Hash + 'static,
	{
		BindableField::new(self.clone(), property, value)
	}

	/// Like `bind`, with a write adapter applied to every incoming value
	/// before the equality check and the pre-commit phase (the seam for
	/// coercion an owner would otherwise do in its own setter).
	pub fn bind_with<T>(
		&self,
		property: &'static str,
		value: T,
		adapter: impl Fn(T) -> T + 'static,
	) -> BindableField<T>
	where
		T: Hash + 'static,
	{
		BindableField::with_adapter(self.clone(), property, value, Box::new(adapter))
	}

	pub fn add_change_listener(&self, callback: Rc<CommitFn>, priority: Priority) {
		if let Some(state) = self.body.owners().borrow_mut().get_mut(self.id) {
			state.commit.add(callback, priority);
		}
	}

	pub fn remove_change_listener(&self, callback: &Rc<CommitFn>) {
		if let Some(state) = self.body.owners().borrow_mut().get_mut(self.id) {
			state.commit.remove(callback);
		}
	}

	pub fn add_pre_commit_listener(&self, callback: Rc<PreCommitFn>, priority: Priority) {
		if let Some(state) = self.body.owners().borrow_mut().get_mut(self.id) {
			state.pre_commit.add(callback, priority);
		}
	}

	pub fn remove_pre_commit_listener(&self, callback: &Rc<PreCommitFn>) {
		if let Some(state) = self.body.owners().borrow_mut().get_mut(self.id) {
			state.pre_commit.remove(callback);
		}
	}

	/// Snapshot of the commit listener collection in insertion order.
	pub fn change_listeners(&self) -> Vec<(Rc<CommitFn>, Priority)> {
		self.body
			.owners()
			.borrow()
			.get(self.id)
			.map(|state| state.commit.entries())
			.unwrap_or_default()
	}

	/// Snapshot of the pre-commit listener collection in insertion order.
	pub fn pre_commit_listeners(&self) -> Vec<(Rc<PreCommitFn>, Priority)> {
		self.body
			.owners()
			.borrow()
			.get(self.id)
			.map(|state| state.pre_commit.entries())
			.unwrap_or_default()
	}

	/// While true, accepted writes still store their value but are not
	/// enqueued for commit notification. Pre-commit listeners keep
	/// running.
	pub fn suspend_notifications(&self) -> bool {
		self.body
			.owners()
			.borrow()
			.get(self.id)
			.map(|state| state.suspended)
			.unwrap_or(false)
	}

	pub fn set_suspend_notifications(&self, suspended: bool) {
		if let Some(state) = self.body.owners().borrow_mut().get_mut(self.id) {
			state.suspended = suspended;
		}
	}

	/// Explicit unregister: listener state is dropped and every clone of
	/// this binding goes stale. Fields keep their stored values.
	pub fn release(&self) {
		self.body.release(self.id);
	}
}

/// The instance-level observable surface. Implement `binding` on the
/// owning struct; the listener and suspend methods come for free.
pub trait Observable {
	fn binding(&self) -> &Binding;

	fn add_change_listener(&self, callback: Rc<CommitFn>, priority: Priority) {
		self.binding().add_change_listener(callback, priority)
	}

	fn remove_change_listener(&self, callback: &Rc<CommitFn>) {
		self.binding().remove_change_listener(callback)
	}

	fn add_pre_commit_listener(&self, callback: Rc<PreCommitFn>, priority: Priority) {
		self.binding().add_pre_commit_listener(callback, priority)
	}

	fn remove_pre_commit_listener(&self, callback: &Rc<PreCommitFn>) {
		self.binding().remove_pre_commit_listener(callback)
	}

	fn change_listeners(&self) -> Vec<(Rc<CommitFn>, Priority)> {
		self.binding().change_listeners()
	}

	fn pre_commit_listeners(&self) -> Vec<(Rc<PreCommitFn>, Priority)> {
		self.binding().pre_commit_listeners()
	}

	fn suspend_notifications(&self) -> bool {
		self.binding().suspend_notifications()
	}

	fn set_suspend_notifications(&self, suspended: bool) {
		self.binding().set_suspend_notifications(suspended)
	}
}
