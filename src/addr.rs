use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::Rc;

/// Pointer-identity wrapper: two `RcAddr`s are equal when they point at
/// the same allocation. Comparison uses the thin data pointer, so two
/// clones of one `Rc<dyn Fn(..)>` always compare equal even if their
/// vtable pointers differ across codegen units.
pub struct RcAddr<T: ?Sized> {
	ptr: Rc<T>,
}

impl<T: ?Sized> RcAddr<T> {
	pub fn new(ptr: Rc<T>) -> Self {
		RcAddr { ptr }
	}

	fn addr(&self) -> *const u8 {
		Rc::as_ptr(&self.ptr) as *const u8
	}
}

impl<T: ?Sized> Deref for RcAddr<T> {
	type Target = Rc<T>;
	fn deref(&self) -> &Self::Target {
		&self.ptr
	}
}

impl<T: ?Sized> PartialEq for RcAddr<T> {
	fn eq(&self, other: &Self) -> bool {
		self.addr() == other.addr()
	}
}

impl<T: ?Sized> Eq for RcAddr<T> {}

impl<T: ?Sized> Ord for RcAddr<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.addr().cmp(&other.addr())
	}
}

impl<T: ?Sized> PartialOrd for RcAddr<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
