//! Error types for the listkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. a zero capacity for a bounded container).
//! - [`CapacityError`]: Returned when appending to a fixed-capacity sequence
//!   that is already full.
//!
//! Probes never wrap these: whatever a sequence's `try_push` returns is handed
//! back to the caller as-is.
//!
//! ## Example Usage
//!
//! ```
//! use listkit::ds::BoundedList;
//! use listkit::error::ConfigError;
//!
//! let list: Result<BoundedList<String>, ConfigError> = BoundedList::try_with_capacity(4);
//! assert!(list.is_ok());
//!
//! let bad = BoundedList::<String>::try_with_capacity(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BoundedList::try_with_capacity`](crate::ds::BoundedList::try_with_capacity).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use listkit::ds::BoundedList;
///
/// let err = BoundedList::<u32>::try_with_capacity(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// CapacityError
// ---------------------------------------------------------------------------

/// Error returned when a fixed-capacity sequence cannot accept another element.
///
/// The rejected element is dropped; the sequence is left exactly as it was
/// before the failed push.
///
/// # Example
///
/// ```
/// use listkit::ds::BoundedList;
///
/// let mut list = BoundedList::with_capacity(1);
/// list.try_push("a").unwrap();
///
/// let err = list.try_push("b").unwrap_err();
/// assert_eq!(err.capacity(), 1);
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    /// Creates a new `CapacityError` for a sequence holding `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the capacity that was exceeded.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity exceeded: sequence is full at {} elements", self.capacity)
    }
}

impl std::error::Error for CapacityError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("bad capacity");
        assert_eq!(err.message(), "bad capacity");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- CapacityError ----------------------------------------------------

    #[test]
    fn capacity_display_includes_capacity() {
        let err = CapacityError::new(16);
        let msg = err.to_string();
        assert!(msg.contains("capacity exceeded"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn capacity_accessor() {
        assert_eq!(CapacityError::new(3).capacity(), 3);
    }

    #[test]
    fn capacity_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CapacityError>();
    }
}
