use alloc::vec::Vec;
use core::fmt;

/// Errors that occur during buffer construction and offer operations.
///
/// Polling an empty buffer is not an error; it yields an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The buffer was constructed with a capacity of zero.
  InvalidCapacity,
  /// The buffer is full and the policy rejects new elements. Contains the elements that were
  /// attempted to be offered.
  Full(Vec<T>),
  /// More elements were offered than the buffer can hold at any occupancy. Contains the
  /// elements that were attempted to be offered.
  OverCapacity(Vec<T>),
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the elements on failure.
  #[must_use]
  pub fn into_items(self) -> Option<Vec<T>> {
    match self {
      | Self::Full(items) | Self::OverCapacity(items) => Some(items),
      | Self::InvalidCapacity => None,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::InvalidCapacity => write!(f, "capacity must be greater than zero"),
      | Self::Full(items) => write!(f, "queue is full, rejected {} element(s)", items.len()),
      | Self::OverCapacity(items) => {
        write!(f, "offered {} element(s), more than the queue can ever hold", items.len())
      },
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
