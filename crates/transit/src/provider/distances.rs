//! Measured road distances between stops.

use std::collections::HashMap;

use crate::identifiers::StopId;

/// Directed road distances in meters
///
/// An entry for `(a, b)` says nothing about `(b, a)`; the reverse direction is
/// only consulted as a fallback when reading.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    meters: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the distance for one ordered pair, replacing any previous value
    pub fn record(&mut self, from: StopId, to: StopId, meters: u32) {
        self.meters.insert((from, to), meters);
    }

    /// Distance from `from` to `to`
    ///
    /// Uses the `(from, to)` entry if present, else `(to, from)`, else 0.
    /// A recorded zero and a missing pair both read as 0.
    pub fn lookup(&self, from: StopId, to: StopId) -> u32 {
        self.meters
            .get(&(from, to))
            .or_else(|| self.meters.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(index: usize) -> StopId {
        StopId::from_index(index)
    }

    #[test]
    fn test_direct_lookup() {
        let mut table = DistanceTable::new();
        table.record(stop(0), stop(1), 3900);

        assert_eq!(table.lookup(stop(0), stop(1)), 3900);
    }

    #[test]
    fn test_reverse_fallback() {
        let mut table = DistanceTable::new();
        table.record(stop(0), stop(1), 3900);

        assert_eq!(table.lookup(stop(1), stop(0)), 3900);
    }

    #[test]
    fn test_directed_entries_are_independent() {
        let mut table = DistanceTable::new();
        table.record(stop(0), stop(1), 2600);
        table.record(stop(1), stop(0), 890);

        assert_eq!(table.lookup(stop(0), stop(1)), 2600);
        assert_eq!(table.lookup(stop(1), stop(0)), 890);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_record_overwrites_same_pair() {
        let mut table = DistanceTable::new();
        table.record(stop(0), stop(1), 100);
        table.record(stop(0), stop(1), 250);

        assert_eq!(table.lookup(stop(0), stop(1)), 250);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_pair_is_zero() {
        let table = DistanceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup(stop(4), stop(5)), 0);
    }

    #[test]
    fn test_recorded_zero_reads_like_missing() {
        let mut table = DistanceTable::new();
        table.record(stop(0), stop(1), 0);

        assert_eq!(table.lookup(stop(0), stop(1)), 0);
        assert_eq!(table.lookup(stop(0), stop(1)), table.lookup(stop(2), stop(3)));
    }

    #[test]
    fn test_self_distance() {
        let mut table = DistanceTable::new();
        table.record(stop(2), stop(2), 50);

        assert_eq!(table.lookup(stop(2), stop(2)), 50);
    }
}
