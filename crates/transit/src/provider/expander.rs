//! Canonical traversal of routes.
//!
//! A linear route is driven out and back, so its canonical sequence mirrors
//! the outbound leg without repeating the turnaround stop:
//!
//! ```text
//! [A, B, C]  ->  [A, B, C, B, A]
//! ```
//!
//! Circular routes are stored as given. Everything downstream (statistics,
//! membership, rendering) reads the canonical sequence only.

use crate::identifiers::StopId;

/// Expand resolved stops into the canonical traversal sequence
pub fn expand(mut stops: Vec<StopId>, circular: bool) -> Vec<StopId> {
    if circular || stops.len() < 2 {
        return stops;
    }

    let outbound = stops.len();
    stops.reserve(outbound - 1);
    for i in (0..outbound - 1).rev() {
        stops.push(stops[i]);
    }
    stops
}

/// Index of the turnaround stop in a canonical linear sequence of `len` stops
///
/// Ties round toward the later index.
pub fn turnaround_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((len - 1).div_ceil(2))
}
