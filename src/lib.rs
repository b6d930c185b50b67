//! listkit: timing probes for ordered sequence implementations.
//!
//! A probe populates a caller-supplied sequence and times one operation on
//! it. Sequences are reached only through [`traits::OrderedSequence`], so the
//! same probe can be pointed at `Vec`, `VecDeque`, `LinkedList` or the
//! containers in [`ds`].

pub mod action;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod traits;
