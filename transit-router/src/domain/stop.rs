//! Stop types.

use std::fmt;
use std::sync::Arc;

use super::Coordinates;

/// Stable handle of a stop inside a [`NetworkStore`](crate::catalogue::NetworkStore).
///
/// Handles are dense indices assigned in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named physical location where vehicles call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name
    pub name: Arc<str>,
    /// Geographic position
    pub location: Coordinates,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(name: impl Into<Arc<str>>, location: Coordinates) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
