//! Transit route planner.
//!
//! Stores a bus network (stops, road distances between them, and routes
//! through them), answers statistics about routes and stops, and finds
//! the fastest itinerary between two stops given a fixed boarding wait
//! and a constant vehicle speed.

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod requests;
pub mod router;
pub mod transport;
