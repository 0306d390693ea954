pub mod macros;

mod addr;
mod binding;
mod changes;
mod defer;
mod dispatch;
mod field;
mod hashed;
mod owners;
mod registry;
mod scheduler;

pub use binding::{Binding, Observable};
pub use changes::{Change, ChangeSet};
pub use defer::{Defer, TaskQueue};
pub use field::{BindableField, Ref, Toggle};
pub use hashed::Hashed;
pub use owners::OwnerId;
pub use registry::Listeners;
pub use scheduler::ChangeScheduler;

/// Listener ordering key. Lower runs earlier; ties run in insertion order.
pub type Priority = i32;

/// Commit listener: called once per flush with the owner's accumulated
/// changes. Commit listeners cannot veto.
pub type CommitFn = dyn Fn(OwnerId, &ChangeSet, Priority);

/// Pre-commit listener: called synchronously before a single-property
/// change is accepted, with the aggregate canceled flag so far. Returning
/// `false` vetoes the change; once canceled it stays canceled.
pub type PreCommitFn = dyn Fn(OwnerId, &ChangeSet, bool, Priority) -> bool;

/// Where the equal-value check sits relative to pre-commit dispatch.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EqualityCheck {
	/// An equal write is a silent no-op; pre-commit listeners never see it.
	BeforeVeto,
	/// Pre-commit listeners run first; equality decides only whether the
	/// value is stored and enqueued.
	AfterVeto,
}

impl Default for EqualityCheck {
	fn default() -> Self {
		EqualityCheck::BeforeVeto
	}
}
