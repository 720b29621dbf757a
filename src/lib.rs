//! semprobe - executable probes for state, aliasing, and dispatch semantics
//!
//! semprobe packages the three behaviors where aliasing intuition most
//! often goes wrong: closure-style private state behind opaque handles,
//! copy-by-value vs. share-by-reference parameter passing, and
//! capability-based dispatch over an open set of concrete types. A
//! bounded close-signaled queue rounds out the set.
//!
//! # Quick Start
//!
//! ```
//! use semprobe::{dispatch, Capsule, Professor};
//!
//! // Each capsule owns its state; handles never alias each other.
//! let mut capsule = Capsule::new();
//! assert_eq!(capsule.increment(), 1);
//! assert_eq!(capsule.increment(), 2);
//!
//! // Dispatch resolves the name capability without knowing the type.
//! let professor = Professor { id: 1, name: "John".into() };
//! let mut names: Vec<String> = Vec::new();
//! dispatch(&professor, &mut names);
//! assert_eq!(names, ["John"]);
//! ```
//!
//! # Architecture
//!
//! The probes live in [`semprobe_primitives`] over shared capability
//! traits and error types from [`semprobe_core`]. This crate re-exports
//! the public surface of both.

// Re-export the public API from the member crates
pub use semprobe_core::{Address, Error, NameSink, Named, Professor, Result, User};
pub use semprobe_primitives::{
    aliasing, dispatch, BoundedQueue, Capsule, ClosedQueue, DispatchRegistry, TracingSink,
};
