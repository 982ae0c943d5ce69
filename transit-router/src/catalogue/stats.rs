//! Aggregate statistics derived from the network.

use std::sync::Arc;

/// Statistics for a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Route name
    pub name: Arc<str>,
    /// Calls in the expanded sequence
    pub stops_count: usize,
    /// Distinct stops in the sequence
    pub unique_stops_count: usize,
    /// Road length in meters, summed over consecutive directed hops
    pub distance_total: u64,
    /// Road length divided by great-circle length
    pub curvature: f64,
}

/// The routes serving a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopInfo {
    /// Stop name
    pub name: Arc<str>,
    /// Names of routes calling at the stop, sorted lexicographically
    pub routes: Vec<Arc<str>>,
}

impl StopInfo {
    /// Returns true if no route calls at this stop.
    pub fn is_unserved(&self) -> bool {
        self.routes.is_empty()
    }
}
