//! Timing actions.
//!
//! Each action implements [`TimedListAction`](crate::traits::TimedListAction)
//! and measures a single operation on a caller-supplied sequence.

pub mod iterate;

pub use iterate::IterateAction;
