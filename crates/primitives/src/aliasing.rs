//! Parameter-passing probes: copy vs. shared-reference semantics
//!
//! Each function here is one side of an aliasing contract, and the
//! signature carries the contract: a plain `i64` or `&[i64]` parameter is
//! an independent copy or a read-only view, while `&mut` parameters alias
//! the caller's own storage. Getting the sequence pair backwards silently
//! breaks caller expectations, so both directions are implemented and
//! tested.

use tracing::trace;

/// Double an independent copy of the caller's scalar
///
/// The callee mutates only its local copy and returns the local result;
/// the caller's variable is unchanged after the call.
pub fn double_scalar_copy(mut n: i64) -> i64 {
    n *= 2;
    trace!(local = n, "doubled local scalar copy");
    n
}

/// Double the caller's scalar through an exclusive reference
///
/// Writes the caller's own storage; the caller observes the doubled
/// value after the call.
pub fn double_scalar_in_place(n: &mut i64) {
    *n *= 2;
}

/// Double every element of the caller's sequence in place
///
/// Element assignment through the exclusive slice is visible to the
/// caller afterward. An empty slice is a no-op.
pub fn double_elements_in_place(seq: &mut [i64]) {
    for value in seq.iter_mut() {
        *value *= 2;
    }
    trace!(len = seq.len(), "doubled elements in place");
}

/// Double locally bound copies of each element into a fresh vector
///
/// Value iteration copies each element; the caller's sequence is
/// unchanged. An empty slice yields an empty vector.
pub fn double_elements_copied(seq: &[i64]) -> Vec<i64> {
    seq.iter().map(|value| value * 2).collect()
}
