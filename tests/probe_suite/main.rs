//! End-to-end probe suite
//!
//! Exercises the observable contracts across the public crate surface:
//! capsule state independence, the aliasing oracles, capability dispatch
//! on both the static and dynamic paths, and the close-signaled queue
//! drain.

use std::sync::Once;

mod capsule_state;
mod queue_drain;

static INIT: Once = Once::new();

/// Install the test subscriber once for the whole suite
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}
