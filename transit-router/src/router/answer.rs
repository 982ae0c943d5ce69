//! Itineraries returned by the planner.

use std::sync::Arc;

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Waiting for a vehicle at a stop
    Wait {
        stop: Arc<str>,
        /// Minutes
        time: u32,
    },
    /// Riding a route over `span_count` hops
    Ride {
        route: Arc<str>,
        span_count: usize,
        /// Minutes
        time: f64,
    },
}

impl Item {
    /// Duration of the item in minutes.
    pub fn time(&self) -> f64 {
        match self {
            Item::Wait { time, .. } => f64::from(*time),
            Item::Ride { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait item.
    pub fn is_wait(&self) -> bool {
        matches!(self, Item::Wait { .. })
    }
}

/// The fastest itinerary between two stops.
///
/// Items alternate Wait, Ride, Wait, Ride, ... starting with a wait at the
/// origin. An empty item list means origin and destination coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAnswer {
    /// Total minutes, waiting included.
    pub total_time: f64,
    pub items: Vec<Item>,
}

impl RouteAnswer {
    /// Number of vehicles boarded.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_wait()).count()
    }
}
