use crate::{OverflowPolicy, ring_buffer::DEFAULT_CAPACITY};

/// Construction parameters for a [`crate::RingBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
  capacity: usize,
  policy:   OverflowPolicy,
}

impl QueueConfig {
  /// Creates a configuration with the specified capacity and the default overflow policy.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self { capacity, policy: OverflowPolicy::default() }
  }

  /// Replaces the overflow policy.
  #[must_use]
  pub const fn with_policy(mut self, policy: OverflowPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn policy(&self) -> OverflowPolicy {
    self.policy
  }
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
