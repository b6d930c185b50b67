//! Forward-iteration timing action.
//!
//! Appends `limit` synthetic elements to a sequence, then times exactly one
//! front-to-back pass over everything the sequence holds, including elements
//! that were already there.
//!
//! ## Flow
//!
//! ```text
//!   time_action(seq, 3)
//!
//!   populate (not timed)          traverse (timed)
//!   ────────────────────          ──────────────────────────────────────
//!   try_push("Element 0")         start = Instant::now()
//!   try_push("Element 1")         for e in seq.iter() { black_box(e) }
//!   try_push("Element 2")         return start.elapsed() as nanoseconds
//! ```
//!
//! A push failure ends the call at once. The error is returned unchanged,
//! elements appended before it stay in the sequence, and nothing is timed.
//!
//! ## Example Usage
//!
//! ```
//! use listkit::action::iterate::measure;
//!
//! let mut list: Vec<String> = Vec::new();
//! let nanos = measure(&mut list, 3).unwrap();
//!
//! assert_eq!(list, vec!["Element 0", "Element 1", "Element 2"]);
//! let _ = nanos; // machine-dependent
//! ```

use std::hint::black_box;
use std::time::Instant;

use crate::traits::{OrderedSequence, TimedListAction};

/// Label reported to drivers for this action.
pub const NAME: &str = "iterate()";

/// Text placed before the index in every generated element.
pub const ELEMENT_PREFIX: &str = "Element";

/// Times a single forward traversal of a sequence.
///
/// Stateless; a single value can be shared by any number of measurements.
///
/// # Example
///
/// ```
/// use std::collections::LinkedList;
///
/// use listkit::action::IterateAction;
/// use listkit::traits::TimedListAction;
///
/// let action = IterateAction;
/// assert_eq!(action.name(), "iterate()");
///
/// let mut list = LinkedList::from(["X".to_string()]);
/// action.time_action(&mut list, 0).unwrap();
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterateAction;

impl TimedListAction for IterateAction {
    #[inline]
    fn name(&self) -> &'static str {
        NAME
    }

    fn time_action<S>(&self, sequence: &mut S, limit: usize) -> Result<u64, S::Error>
    where
        S: OrderedSequence<String>,
    {
        for index in 0..limit {
            sequence.try_push(element(index))?;
        }

        let start = Instant::now();
        for value in sequence.iter() {
            black_box(value);
        }
        Ok(saturating_nanos(start))
    }
}

/// Appends `n` elements to `sequence` and returns the nanoseconds one full
/// forward pass took. Shorthand for [`IterateAction::time_action`].
pub fn measure<S>(sequence: &mut S, n: usize) -> Result<u64, S::Error>
where
    S: OrderedSequence<String>,
{
    IterateAction.time_action(sequence, n)
}

#[inline]
fn element(index: usize) -> String {
    format!("{ELEMENT_PREFIX} {index}")
}

#[inline]
fn saturating_nanos(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
