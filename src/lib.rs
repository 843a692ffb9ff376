#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::from_over_into)]
#![deny(clippy::match_like_matches_macro)]
#![deny(dropping_copy_types)]
#![no_std]

//! Fixed-capacity circular queue with bulk transfer and configurable overflow policies.
//!
//! Provides a single-owner FIFO ring buffer whose storage never moves or grows. Elements
//! are offered one at a time or in batches, polled out oldest first, and a tagged
//! [`OverflowPolicy`] decides what happens when an offer meets a full buffer. The crate is
//! `no_std` with `alloc`; callers sharing a buffer across threads serialize access
//! themselves.

extern crate alloc;

mod iter;
mod offer_outcome;
mod overflow_policy;
mod queue_config;
mod queue_error;
mod ring_buffer;
mod ring_storage;

pub use iter::Iter;
pub use offer_outcome::OfferOutcome;
pub use overflow_policy::{DEFAULT_EVICT_PERCENT, OverflowPolicy};
pub use queue_config::QueueConfig;
pub use queue_error::QueueError;
pub use ring_buffer::{DEFAULT_CAPACITY, RingBuffer};
