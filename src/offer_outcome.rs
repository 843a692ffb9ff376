/// Outcome produced by a successful offer operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The elements were enqueued without any side effects.
  Enqueued,
  /// The offer succeeded after discarding the oldest elements.
  EvictedOldest {
    /// Total number of elements removed from the head of the buffer.
    count: usize,
  },
}

impl From<&OfferOutcome> for &'static str {
  fn from(outcome: &OfferOutcome) -> Self {
    match outcome {
      | OfferOutcome::Enqueued => "enqueue",
      | OfferOutcome::EvictedOldest { .. } => "evict_oldest",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn offer_outcome_enqueued_variant() {
    let outcome = OfferOutcome::Enqueued;
    assert_eq!(outcome, OfferOutcome::Enqueued);
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "enqueue");
  }

  #[test]
  fn offer_outcome_evicted_oldest_variant() {
    let outcome = OfferOutcome::EvictedOldest { count: 3 };
    if let OfferOutcome::EvictedOldest { count } = outcome {
      assert_eq!(count, 3);
    } else {
      panic!("Expected EvictedOldest variant");
    }
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "evict_oldest");
  }

  #[test]
  fn offer_outcome_copy_works() {
    let original = OfferOutcome::EvictedOldest { count: 2 };
    let copied = original;
    assert_eq!(original, copied);
  }

  #[test]
  fn offer_outcome_partial_eq() {
    assert_eq!(OfferOutcome::Enqueued, OfferOutcome::Enqueued);
    assert_ne!(OfferOutcome::Enqueued, OfferOutcome::EvictedOldest { count: 1 });
    assert_ne!(
      OfferOutcome::EvictedOldest { count: 1 },
      OfferOutcome::EvictedOldest { count: 2 }
    );
  }
}
