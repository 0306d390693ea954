use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fxhash::FxHashMap;

use crate::binding::Binding;
use crate::changes::{Change, ChangeSet};
use crate::defer::Defer;
use crate::dispatch;
use crate::owners::Owners;
use crate::{EqualityCheck, OwnerId};

/// The engine instance: owner registrations, pending coalesced changes,
/// and the single armed deferred flush. Construct one per composition
/// root; nothing is global.
pub struct ChangeScheduler {
	body: Rc<SchedulerBody>,
}

pub(crate) struct SchedulerBody {
	owners: RefCell<Owners>,
	inner: RefCell<SchedulerInner>,
	defer: Rc<dyn Defer>,
	equality: EqualityCheck,
	this: Weak<SchedulerBody>,
}

struct SchedulerInner {
	pending: FxHashMap<OwnerId, ChangeSet>,
	// owners in first-enqueued order; reset together with `pending`
	queue: Vec<OwnerId>,
	armed: bool,
}

impl ChangeScheduler {
	pub fn new(defer: Rc<dyn Defer>) -> Self {
		ChangeScheduler::with_equality_check(defer, EqualityCheck::BeforeVeto)
	}

	pub fn with_equality_check(defer: Rc<dyn Defer>, equality: EqualityCheck) -> Self {
		ChangeScheduler {
			body: Rc::new_cyclic(|this| SchedulerBody {
				owners: RefCell::new(Owners::new()),
				inner: RefCell::new(SchedulerInner {
					pending: FxHashMap::default(),
					queue: Vec::new(),
					armed: false,
				}),
				defer,
				equality,
				this: this.clone(),
			}),
		}
	}

	pub fn register(&self) -> Binding {
		let id = self.body.owners.borrow_mut().register();
		Binding::new(self.body.clone(), id)
	}

	pub fn release(&self, id: OwnerId) {
		self.body.release(id);
	}

	/// Delivers all pending changes now, without waiting for the armed
	/// deferred task. The task itself calls this.
	pub fn flush(&self) {
		self.body.flush();
	}

	pub fn has_pending(&self) -> bool {
		!self.body.inner.borrow().pending.is_empty()
	}

	pub fn is_armed(&self) -> bool {
		self.body.inner.borrow().armed
	}
}

impl SchedulerBody {
	pub(crate) fn owners(&self) -> &RefCell<Owners> {
		&self.owners
	}

	pub(crate) fn equality(&self) -> EqualityCheck {
		self.equality
	}

	pub(crate) fn release(&self, id: OwnerId) {
		self.owners.borrow_mut().release(id);
	}

	/// Accumulates an accepted change (first-old/last-new) and arms the
	/// deferred flush if it is not armed already.
	pub(crate) fn enqueue(&self, owner: OwnerId, property: &'static str, change: Change) {
		if change.is_noop() {
			return;
		}

		let arm = {
			let mut inner = self.inner.borrow_mut();
			if !inner.pending.contains_key(&owner) {
				inner.queue.push(owner);
			}
			inner
				.pending
				.entry(owner)
				.or_insert_with(ChangeSet::new)
				.accumulate(property, change);
			let arm = !inner.armed;
			inner.armed = true;
			arm
		};

		if arm {
			tracing::trace!(?owner, property, "arming deferred flush");
			let this = self.this.clone();
			self.defer.schedule(Box::new(move || {
				if let Some(body) = this.upgrade() {
					body.flush();
				}
			}));
		}
	}

	pub(crate) fn flush(&self) {
		// disarm and take the snapshot before any dispatch, so writes
		// made by listeners start a fresh cycle and re-arm
		let (queue, mut pending) = {
			let mut inner = self.inner.borrow_mut();
			inner.armed = false;
			(
				std::mem::take(&mut inner.queue),
				std::mem::take(&mut inner.pending),
			)
		};

		tracing::trace!(owners = queue.len(), "flushing pending changes");

		for owner in queue {
			if let Some(changes) = pending.remove(&owner) {
				dispatch::commit(self, owner, &changes);
			}
		}
	}
}
