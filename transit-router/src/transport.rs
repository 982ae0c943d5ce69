//! Read-only query facade over a loaded network.

use std::sync::Arc;

use crate::cache::AnswerEntry;
use crate::catalogue::{CatalogueError, NetworkStore, RouteInfo, StopInfo};
use crate::router::{RoutePlanner, RouterError, RoutingSettings};

/// A frozen transit network with an optional route planner.
///
/// Built once from a fully loaded [`NetworkStore`]. The store is moved
/// behind an `Arc`, so nothing can mutate it while queries are served.
#[derive(Debug)]
pub struct TransportCatalogue {
    store: Arc<NetworkStore>,
    planner: Option<RoutePlanner>,
}

impl TransportCatalogue {
    /// Freeze `store` and, when routing settings are given, build the
    /// routing graph.
    pub fn new(store: NetworkStore, settings: Option<RoutingSettings>) -> Result<Self, RouterError> {
        let store = Arc::new(store);
        let planner = settings
            .map(|settings| RoutePlanner::init(Arc::clone(&store), settings))
            .transpose()?;

        Ok(Self { store, planner })
    }

    /// Statistics for a route.
    pub fn route_info(&self, name: &str) -> Result<&RouteInfo, CatalogueError> {
        self.store.route_info(name)
    }

    /// Routes serving a stop.
    pub fn stop_info(&self, name: &str) -> Result<&StopInfo, CatalogueError> {
        self.store.stop_info(name)
    }

    /// Fastest itinerary between two stops.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotInitialized`] when the catalogue was built without
    /// routing settings, otherwise as [`RoutePlanner::build_route`].
    pub fn build_route(&self, from: &str, to: &str) -> Result<AnswerEntry, RouterError> {
        self.planner
            .as_ref()
            .ok_or(RouterError::NotInitialized)?
            .build_route(from, to)
    }

    pub fn store(&self) -> &NetworkStore {
        &self.store
    }

    /// Returns the planner, if routing settings were supplied.
    pub fn planner(&self) -> Option<&RoutePlanner> {
        self.planner.as_ref()
    }
}
