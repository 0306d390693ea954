pub use enclose::*;

#[macro_export]
macro_rules! commit_listener {
	(( $($d_tt:tt)* ) $owner:ident, $changes:ident, $priority:ident => $($b:tt)*) => {
		::std::rc::Rc::new($crate::macros::enclose!(($( $d_tt )*) move |$owner: $crate::OwnerId, $changes: &$crate::ChangeSet, $priority: $crate::Priority| { $($b)* })) as ::std::rc::Rc<$crate::CommitFn>
	};
	($owner:ident, $changes:ident, $priority:ident => $($b:tt)*) => {
		::std::rc::Rc::new(move |$owner: $crate::OwnerId, $changes: &$crate::ChangeSet, $priority: $crate::Priority| { $($b)* }) as ::std::rc::Rc<$crate::CommitFn>
	};
}

#[macro_export]
macro_rules! pre_commit_listener {
	(( $($d_tt:tt)* ) $owner:ident, $changes:ident, $canceled:ident, $priority:ident => $($b:tt)*) => {
		::std::rc::Rc::new($crate::macros::enclose!(($( $d_tt )*) move |$owner: $crate::OwnerId, $changes: &$crate::ChangeSet, $canceled: bool, $priority: $crate::Priority| -> bool { $($b)* })) as ::std::rc::Rc<$crate::PreCommitFn>
	};
	($owner:ident, $changes:ident, $canceled:ident, $priority:ident => $($b:tt)*) => {
		::std::rc::Rc::new(move |$owner: $crate::OwnerId, $changes: &$crate::ChangeSet, $canceled: bool, $priority: $crate::Priority| -> bool { $($b)* }) as ::std::rc::Rc<$crate::PreCommitFn>
	};
}
