//! Directed road distances between stops.

use std::collections::HashMap;

use crate::domain::StopId;

/// Directed road distances in meters.
///
/// Setting A→B also fills B→A when B→A has never been set. An explicitly
/// set direction is never overwritten by a later mirror.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(StopId, StopId), u64>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance from `from` to `to`, mirroring it if the reverse is unset.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u64) {
        self.distances.insert((from, to), meters);
        self.distances.entry((to, from)).or_insert(meters);
    }

    /// Get the distance from `from` to `to`, if known.
    pub fn get(&self, from: StopId, to: StopId) -> Option<u64> {
        self.distances.get(&(from, to)).copied()
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no distance has been set.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
