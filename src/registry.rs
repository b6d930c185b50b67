//! Central registry of sequence implementations.
//!
//! Benchmarks and integration tests iterate over the same set of sequence
//! types through [`for_each_sequence!`](crate::for_each_sequence). To add a
//! new implementation, add a block to the macro below.

/// Runs monomorphic code once for every registered sequence type.
///
/// Avoids dynamic dispatch in timing loops while keeping the list of
/// implementations in one place.
///
/// # Usage
///
/// ```
/// use listkit::for_each_sequence;
/// use listkit::action::iterate::measure;
/// use listkit::traits::OrderedSequence;
///
/// let mut seen = Vec::new();
/// for_each_sequence! {
///     with |seq_id, display_name, make_seq| {
///         let mut seq = make_seq(8);
///         measure(&mut seq, 8).unwrap();
///         assert_eq!(OrderedSequence::len(&seq), 8);
///         seen.push(seq_id);
///         let _ = display_name;
///     }
/// }
/// assert_eq!(seen.len(), 5);
/// ```
///
/// Each block defines:
/// - `seq_id`: &str - sequence identifier
/// - `display_name`: &str - human-readable name
/// - `make_seq`: closure taking the number of elements the caller intends to
///   hold and returning an empty sequence of `String`
#[macro_export]
macro_rules! for_each_sequence {
    (with |$seq_id:ident, $display_name:ident, $make_seq:ident| $body:block) => {{
        use std::collections::{LinkedList, VecDeque};
        use $crate::ds::{ArenaList, BoundedList};

        {
            let $seq_id = "vec";
            let $display_name = "Vec";
            let $make_seq = |_elements: usize| Vec::<String>::new();
            $body
        }
        {
            let $seq_id = "vec_deque";
            let $display_name = "VecDeque";
            let $make_seq = |_elements: usize| VecDeque::<String>::new();
            $body
        }
        {
            let $seq_id = "linked_list";
            let $display_name = "LinkedList";
            let $make_seq = |_elements: usize| LinkedList::<String>::new();
            $body
        }
        {
            let $seq_id = "arena_list";
            let $display_name = "ArenaList";
            let $make_seq = |_elements: usize| ArenaList::<String>::new();
            $body
        }
        {
            let $seq_id = "bounded_list";
            let $display_name = "BoundedList";
            let $make_seq =
                |elements: usize| BoundedList::<String>::with_capacity(elements.max(1));
            $body
        }
    }};
}
