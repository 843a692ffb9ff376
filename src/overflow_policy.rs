/// Default percentage of capacity evicted when a full buffer applies [`OverflowPolicy::EvictOldest`].
pub const DEFAULT_EVICT_PERCENT: u8 = 10;

/// Policy describing how to handle capacity overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
  /// Reject new elements while the buffer is full.
  Reject,
  /// Evict the oldest elements to make room for new ones.
  EvictOldest {
    /// Percentage of capacity discarded per full-buffer offer, at least one element.
    percent: u8,
  },
}

impl OverflowPolicy {
  /// Number of oldest elements a full buffer of the given capacity discards under this policy.
  ///
  /// Zero for [`OverflowPolicy::Reject`].
  #[must_use]
  pub fn evict_target(self, capacity: usize) -> usize {
    match self {
      | OverflowPolicy::Reject => 0,
      | OverflowPolicy::EvictOldest { percent } => {
        let target = capacity.saturating_mul(usize::from(percent)) / 100;
        target.max(1)
      },
    }
  }
}

impl Default for OverflowPolicy {
  fn default() -> Self {
    OverflowPolicy::EvictOldest { percent: DEFAULT_EVICT_PERCENT }
  }
}
