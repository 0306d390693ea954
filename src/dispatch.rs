use crate::changes::ChangeSet;
use crate::scheduler::SchedulerBody;
use crate::OwnerId;

/// Runs the owner's pre-commit listeners in priority order and returns
/// whether any of them vetoed. The canceled flag is sticky: later
/// listeners still run and see it, but cannot clear it. Listener panics
/// propagate to the write site.
pub(crate) fn pre_commit(body: &SchedulerBody, owner: OwnerId, changes: &ChangeSet) -> bool {
	let queue = match body.owners().borrow_mut().get_mut(owner) {
		Some(state) => state.pre_commit.ordered(),
		None => return false,
	};

	let mut canceled = false;
	for (callback, priority) in queue {
		if !(*callback)(owner, changes, canceled, priority) {
			canceled = true;
		}
	}

	if canceled {
		tracing::trace!(?owner, "pending change vetoed");
	}

	canceled
}

/// Runs the owner's commit listeners in priority order with the full
/// accumulated change set. Return values are ignored; panics propagate
/// to the flush caller.
pub(crate) fn commit(body: &SchedulerBody, owner: OwnerId, changes: &ChangeSet) {
	let queue = match body.owners().borrow_mut().get_mut(owner) {
		Some(state) => state.commit.ordered(),
		None => return,
	};

	for (callback, priority) in queue {
		(*callback)(owner, changes, priority);
	}
}
