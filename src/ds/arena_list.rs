//! Append-only singly linked list backed by a node arena.
//!
//! Nodes live contiguously in a `Vec` and are linked by index rather than by
//! pointer. Traversal still follows `next` links, so iteration cost reflects
//! link chasing rather than a plain slice walk.
//!
//! ## Architecture
//!
//! ```text
//!   nodes (Vec<Node<T>>)
//!   ┌───────┬────────────────────────────┐
//!   │ index │ Node { value, next }       │
//!   ├───────┼────────────────────────────┤
//!   │   0   │ { value: A, next: Some(1) }│
//!   │   1   │ { value: B, next: Some(2) }│
//!   │   2   │ { value: C, next: None }   │
//!   └───────┴────────────────────────────┘
//!
//!   head ─► [0] ──► [1] ──► [2] ◄── tail
//! ```
//!
//! ## Performance
//! - `push_back`: O(1) amortized
//! - `front` / `back`: O(1)
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::convert::Infallible;

use crate::traits::OrderedSequence;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list whose nodes are stored in an arena and linked by index.
#[derive(Debug, Clone)]
pub struct ArenaList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> ArenaList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first value in the list.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.nodes[idx].value)
    }

    /// Returns the last value in the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.nodes[idx].value)
    }

    /// Appends a value at the back.
    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.nodes.is_empty() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            return;
        }

        assert!(self.head.is_some());
        assert!(self.tail.is_some());

        let mut count = 0usize;
        let mut last = None;
        let mut current = self.head;
        while let Some(idx) = current {
            assert!(idx < self.nodes.len());
            count += 1;
            assert!(count <= self.nodes.len(), "cycle detected");
            last = Some(idx);
            current = self.nodes[idx].next;
        }

        assert_eq!(count, self.nodes.len());
        assert_eq!(last, self.tail);
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over values from front to back.
///
/// Created by [`ArenaList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = &self.list.nodes[idx];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArenaList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> OrderedSequence<T> for ArenaList<T> {
    type Error = Infallible;
    type Iter<'a>
        = Iter<'a, T>
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
        ArenaList::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        ArenaList::iter(self)
    }
}
