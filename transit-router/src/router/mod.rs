//! Fastest-itinerary routing.
//!
//! Routes are turned into a directed graph whose edges are rides over one
//! or more consecutive spans, each weighted with the wait before boarding
//! plus the ride time. A shortest path in that graph is the fastest
//! itinerary, which the planner translates into wait and ride items.

mod answer;
mod config;
mod dijkstra;
mod error;
mod graph;
mod mapper;
mod planner;


pub use answer::{Item, RouteAnswer};
pub use config::RoutingSettings;
pub use dijkstra::{Dijkstra, PathInfo, ShortestPathSolver};
pub use error::RouterError;
pub use graph::{Edge, EdgeId, RoutingGraph, VertexId};
pub use mapper::{EdgeInfo, IdentityMapper};
pub use planner::RoutePlanner;
