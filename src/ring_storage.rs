#[cfg(test)]
mod tests;

use alloc::boxed::Box;
use core::mem::MaybeUninit;

/// Fixed slab of element slots addressed by physical index.
///
/// The slab has no notion of head or length; the owning buffer tracks which slots are live
/// and drops their contents. Vacated slots keep their previous bits until overwritten.
pub(crate) struct RingStorage<T> {
  slots: Box<[MaybeUninit<T>]>,
}

impl<T> RingStorage<T> {
  /// Creates a storage with the specified number of slots, all vacant.
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    let slots = core::iter::repeat_with(MaybeUninit::uninit).take(capacity).collect();
    Self { slots }
  }

  /// Returns the number of slots.
  #[must_use]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Moves a value into the slot at `idx`.
  ///
  /// # Safety
  ///
  /// `idx` must be less than the capacity and the slot must be vacant; writing over a live
  /// slot leaks its value.
  pub(crate) unsafe fn write_unchecked(&mut self, idx: usize, val: T) {
    debug_assert!(idx < self.capacity());
    unsafe {
      self.slots.get_unchecked_mut(idx).write(val);
    }
  }

  /// Moves the value out of the slot at `idx`, leaving its stale bits in place.
  ///
  /// # Safety
  ///
  /// `idx` must be less than the capacity and the slot must be live; the slot must not be
  /// read again before the next write.
  pub(crate) unsafe fn take_unchecked(&mut self, idx: usize) -> T {
    debug_assert!(idx < self.capacity());
    unsafe { self.slots.get_unchecked(idx).assume_init_read() }
  }

  /// Borrows the value in the slot at `idx`.
  ///
  /// # Safety
  ///
  /// `idx` must be less than the capacity and the slot must be live.
  pub(crate) unsafe fn get_unchecked(&self, idx: usize) -> &T {
    debug_assert!(idx < self.capacity());
    unsafe { self.slots.get_unchecked(idx).assume_init_ref() }
  }
}
