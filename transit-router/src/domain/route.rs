//! Route types.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::StopId;

/// Stable handle of a route inside a [`NetworkStore`](crate::catalogue::NetworkStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named sequence of stops a vehicle follows.
///
/// The sequence is stored fully expanded: a route that is not a round trip
/// already contains its return leg, so the last stop equals the first in
/// both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route name
    pub name: Arc<str>,
    /// Expanded stop sequence
    pub stops: Vec<StopId>,
    /// Whether the route was declared a round trip
    pub is_round_trip: bool,
}

impl Route {
    /// Creates a new route.
    pub fn new(name: impl Into<Arc<str>>, stops: Vec<StopId>, is_round_trip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_round_trip,
        }
    }

    /// Returns the route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of calls in the expanded sequence.
    pub fn stops_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of distinct stops in the sequence.
    pub fn unique_stops_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Consecutive (from, to) pairs along the sequence.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
