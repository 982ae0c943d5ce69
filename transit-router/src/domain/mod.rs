//! Domain types for the transit network.
//!
//! Stops and routes are owned by the network store and referenced
//! everywhere else through their integer handles.

mod geo;
mod route;
mod stop;

pub use geo::{Coordinates, EARTH_RADIUS_M};
pub use route::{Route, RouteId};
pub use stop::{Stop, StopId};
