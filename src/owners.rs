use crate::registry::Listeners;
use crate::{CommitFn, PreCommitFn};

/// Generational handle for a registered owner. Stale handles (released,
/// or from a recycled slot) fail the generation check and make every
/// operation through them a silent no-op.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub struct OwnerId {
	index: u32,
	generation: u32,
}

pub struct OwnerState {
	pub commit: Listeners<CommitFn>,
	pub pre_commit: Listeners<PreCommitFn>,
	pub suspended: bool,
}

impl OwnerState {
	fn new() -> Self {
		OwnerState {
			commit: Listeners::new(),
			pre_commit: Listeners::new(),
			suspended: false,
		}
	}
}

struct Slot {
	generation: u32,
	state: Option<OwnerState>,
}

pub struct Owners {
	slots: Vec<Slot>,
	free: Vec<u32>,
}

impl Owners {
	pub fn new() -> Self {
		Owners {
			slots: Vec::new(),
			free: Vec::new(),
		}
	}

	pub fn register(&mut self) -> OwnerId {
		match self.free.pop() {
			Some(index) => {
				let slot = &mut self.slots[index as usize];
				slot.state = Some(OwnerState::new());
				OwnerId {
					index,
					generation: slot.generation,
				}
			}
			None => {
				self.slots.push(Slot {
					generation: 0,
					state: Some(OwnerState::new()),
				});
				OwnerId {
					index: self.slots.len() as u32 - 1,
					generation: 0,
				}
			}
		}
	}

	/// Releases the slot and bumps its generation so outstanding handles
	/// go stale. Double release is a no-op.
	pub fn release(&mut self, id: OwnerId) {
		if let Some(slot) = self.slots.get_mut(id.index as usize) {
			if slot.generation == id.generation && slot.state.is_some() {
				slot.state = None;
				slot.generation = slot.generation.wrapping_add(1);
				self.free.push(id.index);
			}
		}
	}

	pub fn get(&self, id: OwnerId) -> Option<&OwnerState> {
		self.slots
			.get(id.index as usize)
			.filter(|slot| slot.generation == id.generation)
			.and_then(|slot| slot.state.as_ref())
	}

	pub fn get_mut(&mut self, id: OwnerId) -> Option<&mut OwnerState> {
		self.slots
			.get_mut(id.index as usize)
			.filter(|slot| slot.generation == id.generation)
			.and_then(|slot| slot.state.as_mut())
	}
}
