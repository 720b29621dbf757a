//! Error types for semprobe
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for semprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the probe primitives
///
/// The capsule and aliasing operations are total functions and never
/// appear here; only the dynamic dispatch path and the bounded queue
/// have failure modes.
#[derive(Debug, Error)]
pub enum Error {
    /// A type-erased value reached the dispatcher with no registered
    /// conformance for the name capability
    #[error("capability not satisfied: {type_name} has no registered name() conformance")]
    CapabilityUnsatisfied {
        /// Concrete type of the rejected value
        type_name: &'static str,
    },

    /// Push onto a bounded queue already holding `capacity` items
    #[error("queue full: capacity {capacity} reached")]
    QueueFull {
        /// Fixed capacity of the queue
        capacity: usize,
    },
}
