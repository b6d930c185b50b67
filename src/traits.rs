//! # Sequence and Action Traits
//!
//! The two seams of the crate: what a probe may do to a sequence, and what a
//! driver may ask of a probe.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────┐        ┌─────────────────────────────────┐
//!   │   TimedListAction            │        │   OrderedSequence<T>            │
//!   │                              │ uses   │                                 │
//!   │  name() → &'static str       │───────►│  try_push(&mut, T) → Result     │
//!   │  time_action(&mut S, usize)  │        │  len(&) → usize                 │
//!   │      → Result<u64, S::Error> │        │  is_empty(&) → bool             │
//!   └──────────────────────────────┘        │  iter(&) → Iter<'_>             │
//!                                           └────────────────┬────────────────┘
//!                                                            │
//!             ┌──────────────┬──────────────┬────────────────┼──────────────┐
//!             ▼              ▼              ▼                ▼              ▼
//!          Vec<T>       VecDeque<T>    LinkedList<T>   BoundedList<T>  ArenaList<T>
//!        (Infallible)   (Infallible)   (Infallible)   (CapacityError)  (Infallible)
//! ```
//!
//! `OrderedSequence` deliberately exposes only append and forward iteration.
//! A probe written against it cannot index, remove, or reorder, so every
//! implementation is measured through the same narrow surface.
//!
//! ## Example Usage
//!
//! ```
//! use listkit::traits::OrderedSequence;
//!
//! fn fill<S: OrderedSequence<u32>>(seq: &mut S, n: u32) -> Result<(), S::Error> {
//!     for i in 0..n {
//!         seq.try_push(i)?;
//!     }
//!     Ok(())
//! }
//!
//! let mut v = Vec::new();
//! fill(&mut v, 3).unwrap();
//! assert_eq!(OrderedSequence::iter(&v).copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```
//!
//! ## Thread Safety
//!
//! Nothing here synchronizes. Callers must not touch a sequence from another
//! thread while a probe is running against it.

use std::collections::{LinkedList, VecDeque};
use std::convert::Infallible;

/// An ordered, appendable, forward-iterable container.
///
/// Insertion order is iteration order. Containers that can always grow use
/// [`Infallible`] as their error type.
pub trait OrderedSequence<T> {
    /// Error returned when an element cannot be appended.
    type Error: std::error::Error;

    /// Forward iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends `value` at the back.
    fn try_push(&mut self, value: T) -> Result<(), Self::Error>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator from front to back.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A pluggable timing strategy run by an external benchmark driver.
///
/// Each action populates the sequence it is given and returns the elapsed
/// nanoseconds of the one operation it measures. Aggregation, warm-up and
/// reporting belong to the driver.
pub trait TimedListAction {
    /// Stable label used by drivers when reporting results.
    fn name(&self) -> &'static str;

    /// Populates `sequence` with `limit` elements and times the measured phase.
    fn time_action<S>(&self, sequence: &mut S, limit: usize) -> Result<u64, S::Error>
    where
        S: OrderedSequence<String>;
}

// ---------------------------------------------------------------------------
// std collections
// ---------------------------------------------------------------------------

impl<T> OrderedSequence<T> for Vec<T> {
    type Error = Infallible;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> OrderedSequence<T> for VecDeque<T> {
    type Error = Infallible;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), Self::Error> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T> OrderedSequence<T> for LinkedList<T> {
    type Error = Infallible;
    type Iter<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), Self::Error> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}
