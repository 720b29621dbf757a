//! Probe primitives for semprobe
//!
//! Provides the aliasing/dispatch probes as independent leaf components:
//! - **Capsule**: independently-owned stateful counters behind opaque handles
//! - **aliasing**: copy-by-value vs. share-by-reference parameter contracts
//! - **dispatch**: capability-based routing over an open set of concrete types
//! - **BoundedQueue**: bounded FIFO with a terminal close signal
//!
//! ## Design Principle: Independent Leaves
//!
//! No primitive depends on another; each is usable on its own. State is
//! single-owner throughout: a capsule owns its count, a queue owns its
//! items, and the dispatcher owns nothing beyond its conformance table.
//!
//! ## Calling Model
//!
//! Everything here is synchronous and single-threaded by contract. The
//! one read-modify-write operation (`Capsule::increment`) is documented
//! as requiring caller-side serialization when a handle is shared across
//! threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aliasing;
pub mod capsule;
pub mod dispatch;
pub mod queue;

pub use capsule::Capsule;
pub use dispatch::{dispatch, DispatchRegistry, TracingSink};
pub use queue::{BoundedQueue, ClosedQueue};
