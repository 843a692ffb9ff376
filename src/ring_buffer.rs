
use alloc::{vec, vec::Vec};
use core::{cmp, fmt};

use crate::{Iter, OfferOutcome, OverflowPolicy, QueueConfig, QueueError, ring_storage::RingStorage};

/// Default capacity used by the `Default` constructions of [`RingBuffer`] and [`QueueConfig`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity FIFO ring buffer with bulk transfer and a configurable overflow policy.
///
/// Elements are offered singly or in batches and polled out oldest first. The backing
/// storage never moves or grows; logical positions wrap around it via the head cursor.
/// When an offer meets a full buffer the configured [`OverflowPolicy`] decides between
/// rejecting the batch and evicting the oldest elements.
///
/// # Examples
///
/// ```
/// use ring_queue_rs::{OverflowPolicy, RingBuffer};
///
/// let mut buffer: RingBuffer<u32> = RingBuffer::new(3, OverflowPolicy::default())?;
/// buffer.offer_all(vec![1, 2, 3])?;
/// buffer.offer(4)?; // full buffer: the oldest element is evicted
/// assert_eq!(buffer.poll_many(3), vec![2, 3, 4]);
/// # Ok::<(), ring_queue_rs::QueueError<u32>>(())
/// ```
pub struct RingBuffer<T> {
  storage: RingStorage<T>,
  policy:  OverflowPolicy,
  head:    usize,
  len:     usize,
}

impl<T> RingBuffer<T> {
  /// Creates a buffer with the specified capacity and overflow policy.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero.
  pub fn new(capacity: usize, policy: OverflowPolicy) -> Result<Self, QueueError<T>> {
    if capacity == 0 {
      return Err(QueueError::InvalidCapacity);
    }
    Ok(Self { storage: RingStorage::with_capacity(capacity), policy, head: 0, len: 0 })
  }

  /// Creates a buffer from the provided configuration.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when the configured capacity is zero.
  pub fn with_config(config: QueueConfig) -> Result<Self, QueueError<T>> {
    Self::new(config.capacity(), config.policy())
  }

  /// Returns the current number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns the storage capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Returns the number of elements that fit before the buffer is full.
  #[must_use]
  pub fn remaining_capacity(&self) -> usize {
    self.capacity() - self.len
  }

  /// Indicates whether the buffer is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Indicates whether the buffer is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.capacity()
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.policy
  }

  /// Offers a single element.
  ///
  /// Degenerate case of [`RingBuffer::offer_all`] with a one-element batch; the same
  /// policy and eviction rules apply.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying the element back when the buffer is full under
  /// [`OverflowPolicy::Reject`].
  pub fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.offer_all(vec![item])
  }

  /// Offers a batch of elements, preserving their order.
  ///
  /// When the buffer is full on entry the overflow policy runs first, even for an empty
  /// batch. A batch still larger than the remaining space then discards exactly as many
  /// oldest elements as it needs, under any policy. The batch is written with a
  /// two-segment copy that wraps at the end of the storage.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::OverCapacity`] when the batch is larger than the total
  /// capacity, and [`QueueError::Full`] when the buffer is full under
  /// [`OverflowPolicy::Reject`]. Both carry the batch back and leave the buffer
  /// untouched.
  pub fn offer_all(&mut self, items: Vec<T>) -> Result<OfferOutcome, QueueError<T>> {
    if items.len() > self.capacity() {
      log::debug!("offer rejected, batch of {} exceeds capacity {}", items.len(), self.capacity());
      return Err(QueueError::OverCapacity(items));
    }

    let mut evicted = 0;
    if self.is_full() {
      match self.policy {
        | OverflowPolicy::Reject => {
          log::debug!("offer rejected, queue is full at {} element(s)", self.len);
          return Err(QueueError::Full(items));
        },
        | OverflowPolicy::EvictOldest { .. } => {
          let target = self.policy.evict_target(self.capacity());
          evicted += self.discard_oldest(target);
        },
      }
    }
    let deficit = items.len().saturating_sub(self.remaining_capacity());
    if deficit > 0 {
      evicted += self.discard_oldest(deficit);
    }

    let count = items.len();
    let tail = self.tail_index();
    let first = cmp::min(count, self.capacity() - tail);
    let mut items = items.into_iter();
    // SAFETY: the evictions above guarantee `count <= remaining_capacity()`, so every
    // target slot is vacant and in bounds.
    for (offset, item) in (&mut items).take(first).enumerate() {
      unsafe {
        self.storage.write_unchecked(tail + offset, item);
      }
    }
    for (offset, item) in items.enumerate() {
      unsafe {
        self.storage.write_unchecked(offset, item);
      }
    }
    self.len += count;

    let outcome = if evicted == 0 {
      OfferOutcome::Enqueued
    } else {
      OfferOutcome::EvictedOldest { count: evicted }
    };
    log::trace!("offer outcome: {}", <&str>::from(&outcome));
    Ok(outcome)
  }

  /// Removes and returns the oldest element, or `None` when the buffer is empty.
  pub fn poll(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    // SAFETY: the buffer is non-empty, so the head slot is live.
    let item = unsafe { self.storage.take_unchecked(self.head) };
    self.head = (self.head + 1) % self.capacity();
    self.len -= 1;
    Some(item)
  }

  /// Removes and returns up to `count` oldest elements, oldest first.
  ///
  /// An empty buffer and a zero count both yield an empty vector; the count is otherwise
  /// clamped to the current length. Elements are read with a two-segment copy that wraps
  /// at the end of the storage.
  pub fn poll_many(&mut self, count: usize) -> Vec<T> {
    if self.is_empty() {
      return Vec::new();
    }
    if count == 0 {
      log::debug!("poll ignored, requested count is zero");
      return Vec::new();
    }

    let count = cmp::min(count, self.len);
    let mut out = Vec::with_capacity(count);
    let first = cmp::min(count, self.capacity() - self.head);
    // SAFETY: `count <= len`, so every source slot is live; each slot is taken once.
    for idx in self.head..self.head + first {
      out.push(unsafe { self.storage.take_unchecked(idx) });
    }
    for idx in 0..count - first {
      out.push(unsafe { self.storage.take_unchecked(idx) });
    }
    self.head = (self.head + count) % self.capacity();
    self.len -= count;
    out
  }

  /// Drops every live element and resets the cursors.
  ///
  /// Capacity, policy, and backing storage are retained. Calling this on an empty buffer
  /// is a no-op.
  pub fn clean_up(&mut self) {
    let _ = self.discard_oldest(self.len);
    self.head = 0;
  }

  /// Returns an iterator over the live elements, oldest first.
  ///
  /// The walk is restartable; each call starts a fresh pass over the current contents.
  #[must_use]
  pub const fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  /// Borrows the element at logical offset `pos` from the head.
  pub(crate) fn get(&self, pos: usize) -> Option<&T> {
    if pos >= self.len {
      return None;
    }
    let idx = (self.head + pos) % self.capacity();
    // SAFETY: `pos < len`, so the slot is live.
    Some(unsafe { self.storage.get_unchecked(idx) })
  }

  /// Index of the next insertion slot, derived from the head cursor and length.
  fn tail_index(&self) -> usize {
    (self.head + self.len) % self.capacity()
  }

  /// Drops up to `count` oldest elements and advances the head past them.
  fn discard_oldest(&mut self, count: usize) -> usize {
    let count = cmp::min(count, self.len);
    if count == 0 {
      return 0;
    }
    let first = cmp::min(count, self.capacity() - self.head);
    // SAFETY: `count <= len`, so every discarded slot is live; each slot is taken once.
    for idx in self.head..self.head + first {
      drop(unsafe { self.storage.take_unchecked(idx) });
    }
    for idx in 0..count - first {
      drop(unsafe { self.storage.take_unchecked(idx) });
    }
    self.head = (self.head + count) % self.capacity();
    self.len -= count;
    log::trace!("discarded {} oldest element(s)", count);
    count
  }
}

impl<T> Default for RingBuffer<T> {
  /// Creates a buffer with [`DEFAULT_CAPACITY`] slots and the default overflow policy,
  /// the fallback the convenience constructors use for missing capacities.
  fn default() -> Self {
    Self { storage: RingStorage::with_capacity(DEFAULT_CAPACITY), policy: OverflowPolicy::default(), head: 0, len: 0 }
  }
}

impl<T> Drop for RingBuffer<T> {
  fn drop(&mut self) {
    self.clean_up();
  }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingBuffer")
      .field("capacity", &self.capacity())
      .field("policy", &self.policy)
      .field("items", &self.iter())
      .finish()
  }
}
