//! Capsule: independently-owned stateful counters
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: each capsule owns its count outright. Two capsules
//!    created from the same factory path never share state.
//! 2. **One Entry Point**: the count is observable and mutable only
//!    through `increment`. There is no getter.
//! 3. **No Internal Locking**: `increment` is a plain read-modify-write.
//!    Concurrent use of one handle must be serialized by the caller,
//!    e.g. by wrapping the capsule in a mutex.

use tracing::trace;

/// Independently-owned stateful counter behind an opaque handle
///
/// Each handle starts at zero. The Nth sequential `increment` call
/// returns exactly N, and mutating one capsule never affects another.
///
/// # Example
///
/// ```
/// use semprobe_primitives::Capsule;
///
/// let mut first = Capsule::new();
/// let mut second = Capsule::new();
///
/// assert_eq!(first.increment(), 1);
/// assert_eq!(first.increment(), 2);
/// assert_eq!(second.increment(), 1); // independent state
/// ```
#[derive(Debug)]
pub struct Capsule {
    count: i64,
}

impl Capsule {
    /// Create a fresh capsule with its count at zero
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Add exactly 1 to the private count and return the new value
    ///
    /// Cannot fail. Overflow past `i64::MAX` inherits the platform's
    /// native behavior and is outside the supported range.
    pub fn increment(&mut self) -> i64 {
        self.count += 1;
        trace!(count = self.count, "capsule incremented");
        self.count
    }
}

impl Default for Capsule {
    fn default() -> Self {
        Self::new()
    }
}
