//! Fixed-capacity ordered list.
//!
//! Holds at most `capacity` elements in insertion order. Unlike a ring
//! buffer it never overwrites: once full, every further push is rejected
//! with [`CapacityError`] and the list is left untouched.
//!
//! ## Architecture
//!
//! ```text
//!   BoundedList<T> { items: Vec<T>, capacity: 4 }
//!
//!   Index:     0     1     2     3
//!            ┌─────┬─────┬─────┬─────┐
//!   items:   │  A  │  B  │  C  │     │   len = 3, remaining = 1
//!            └─────┴─────┴─────┴─────┘
//!
//!   try_push(D) → Ok          len = 4, is_full
//!   try_push(E) → Err(CapacityError { capacity: 4 }), items unchanged
//! ```
//!
//! ## Operations
//!
//! | Operation              | Description                        | Complexity |
//! |------------------------|------------------------------------|------------|
//! | [`try_push`]           | Append, or reject when full        | O(1)       |
//! | [`get`]                | Element at insertion index         | O(1)       |
//! | [`iter`]               | Iterate in insertion order         | O(n)       |
//! | [`clear`]              | Drop all elements, keep capacity   | O(n)       |
//!
//! [`try_push`]: BoundedList::try_push
//! [`get`]: BoundedList::get
//! [`iter`]: BoundedList::iter
//! [`clear`]: BoundedList::clear
//!
//! ## Example Usage
//!
//! ```
//! use listkit::ds::BoundedList;
//!
//! let mut list = BoundedList::with_capacity(2);
//! list.try_push("a").unwrap();
//! list.try_push("b").unwrap();
//! assert!(list.is_full());
//!
//! let err = list.try_push("c").unwrap_err();
//! assert_eq!(err.capacity(), 2);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```
//!
//! ## Implementation Notes
//!
//! - Storage is allocated once, up front; pushes never reallocate
//! - `debug_validate_invariants()` available in debug/test builds

use crate::error::{CapacityError, ConfigError};
use crate::traits::OrderedSequence;

/// Ordered list with a capacity fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    /// Creates an empty list that holds at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_with_capacity`](Self::try_with_capacity)
    /// for user-supplied values.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates an empty list, rejecting a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use listkit::ds::BoundedList;
    ///
    /// assert!(BoundedList::<u8>::try_with_capacity(8).is_ok());
    /// assert!(BoundedList::<u8>::try_with_capacity(0).is_err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if no further element can be pushed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns how many more elements fit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Appends `value`, or returns [`CapacityError`] if the list is full.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError::new(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    /// Returns the element at insertion index `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns an iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all elements; capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.capacity > 0);
        assert!(self.items.len() <= self.capacity);
        assert!(self.items.capacity() >= self.capacity);
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> OrderedSequence<T> for BoundedList<T> {
    type Error = CapacityError;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), Self::Error> {
        BoundedList::try_push(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        BoundedList::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BoundedList::iter(self)
    }
}
