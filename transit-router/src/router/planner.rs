//! Route planner facade: lazy graph construction, solving and caching.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::cache::{AnswerCache, AnswerEntry};
use crate::catalogue::NetworkStore;

use super::answer::{Item, RouteAnswer};
use super::config::RoutingSettings;
use super::dijkstra::{Dijkstra, PathInfo, ShortestPathSolver};
use super::error::RouterError;
use super::graph::{RoutingGraph, VertexId};
use super::mapper::IdentityMapper;

/// Answers fastest-itinerary queries between named stops.
///
/// The routing graph is built once, in [`RoutePlanner::init`], from a store
/// that is shared read-only from then on. Answers are cached per
/// (origin, destination) vertex pair for the planner's lifetime, so
/// repeated queries return the same `Arc` without running the solver again.
pub struct RoutePlanner<S = Dijkstra> {
    store: Arc<NetworkStore>,
    settings: RoutingSettings,
    graph: RoutingGraph,
    mapper: IdentityMapper,
    solver: S,
    answers: AnswerCache,
}

impl RoutePlanner<Dijkstra> {
    /// Build the routing graph for `store` and return a planner over it.
    pub fn init(store: Arc<NetworkStore>, settings: RoutingSettings) -> Result<Self, RouterError> {
        Self::with_solver(store, settings, Dijkstra)
    }
}

impl<S: ShortestPathSolver> RoutePlanner<S> {
    /// Like [`RoutePlanner::init`], with a custom path solver.
    pub fn with_solver(
        store: Arc<NetworkStore>,
        settings: RoutingSettings,
        solver: S,
    ) -> Result<Self, RouterError> {
        settings.validate()?;

        let (mapper, graph) = IdentityMapper::build(&store, &settings)?;

        info!(
            wait_time = settings.bus_wait_time,
            velocity = settings.bus_velocity,
            vertices = mapper.vertex_count(),
            edges = graph.edge_count(),
            "Route planner initialized"
        );

        Ok(Self {
            store,
            settings,
            graph,
            mapper,
            solver,
            answers: AnswerCache::new(),
        })
    }

    /// Fastest itinerary from stop `from` to stop `to`.
    ///
    /// Returns `Ok(None)` when both stops exist but no itinerary connects
    /// them, including when either stop is served by no route.
    ///
    /// # Errors
    ///
    /// [`RouterError::Catalogue`] with `StopNotFound` if either name is
    /// unknown.
    pub fn build_route(&self, from: &str, to: &str) -> Result<AnswerEntry, RouterError> {
        let from_stop = self.store.stop_id(from)?;
        let to_stop = self.store.stop_id(to)?;

        let (Some(from_vertex), Some(to_vertex)) =
            (self.mapper.vertex(from_stop), self.mapper.vertex(to_stop))
        else {
            debug!(from, to, "Stop is not served by any route");
            return Ok(None);
        };

        let key = (from_vertex, to_vertex);
        if let Some(cached) = self.answers.get(&key) {
            trace!(from, to, "Answer cache hit");
            return Ok(cached);
        }

        Ok(self.answers.get_or_compute(key, || {
            trace!(from, to, "Answer cache miss");
            self.solve(from_vertex, to_vertex)
        }))
    }

    fn solve(&self, from: VertexId, to: VertexId) -> AnswerEntry {
        let Some(path) = self.solver.find_path(&self.graph, from, to) else {
            debug!(from = from.0, to = to.0, "No path");
            return None;
        };

        debug!(
            from = from.0,
            to = to.0,
            total_time = path.weight,
            edges = path.edges.len(),
            "Path found"
        );

        Some(Arc::new(self.translate(&path)))
    }

    /// Expand every edge of a path into a wait at its boarding stop
    /// followed by the ride.
    fn translate(&self, path: &PathInfo) -> RouteAnswer {
        let mut items = Vec::with_capacity(path.edges.len() * 2);

        for &edge in &path.edges {
            let info = self.mapper.edge_info(edge);
            items.push(Item::Wait {
                stop: self.store.stop(info.boarding_stop).name.clone(),
                time: self.settings.bus_wait_time,
            });
            items.push(Item::Ride {
                route: self.store.route(info.route).name.clone(),
                span_count: info.span_count,
                time: info.ride_time,
            });
        }

        RouteAnswer {
            total_time: path.weight,
            items,
        }
    }

    /// The store the graph was built from.
    pub fn store(&self) -> &NetworkStore {
        &self.store
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &RoutingGraph {
        &self.graph
    }

    pub fn mapper(&self) -> &IdentityMapper {
        &self.mapper
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Number of cached answers, "no path" results included.
    pub fn cached_answers(&self) -> u64 {
        self.answers.entry_count()
    }
}

impl<S> std::fmt::Debug for RoutePlanner<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("settings", &self.settings)
            .field("vertices", &self.mapper.vertex_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}
