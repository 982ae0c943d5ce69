//! The network store.
//!
//! Holds stops, routes and road distances, and answers aggregate
//! questions about them (route length and curvature, routes per stop).

mod distances;
mod error;
mod stats;
mod store;

pub use distances::DistanceTable;
pub use error::CatalogueError;
pub use stats::{RouteInfo, StopInfo};
pub use store::NetworkStore;
