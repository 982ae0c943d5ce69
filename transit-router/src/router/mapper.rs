//! Stop ↔ vertex identity and ride-segment edge construction.
//!
//! Every route contributes one edge per (boarding stop, alighting stop)
//! pair along its expanded sequence, so a passenger can ride any number
//! of spans without a transfer edge at each intermediate stop. The walk
//! from a boarding stop stops extending as soon as the vehicle comes back
//! to that same stop.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::catalogue::{CatalogueError, NetworkStore};
use crate::domain::{Route, RouteId, StopId};

use super::config::RoutingSettings;
use super::graph::{Edge, EdgeId, RoutingGraph, VertexId};

/// Trip metadata of a ride-segment edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeInfo {
    /// Route ridden along the edge
    pub route: RouteId,
    /// Stop where the passenger waits and boards
    pub boarding_stop: StopId,
    /// Number of hops between boarding and alighting
    pub span_count: usize,
    /// Time aboard in minutes, without waiting
    pub ride_time: f64,
}

/// Mapping between stops and graph vertices, plus per-edge trip metadata.
///
/// Built exactly once together with the [`RoutingGraph`] and immutable
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct IdentityMapper {
    stop_to_vertex: HashMap<StopId, VertexId>,
    vertex_to_stop: Vec<StopId>,
    edges: Vec<EdgeInfo>,
}

impl IdentityMapper {
    /// Build the routing graph for every route in `store`.
    ///
    /// Vertex ids are handed out densely from 0, the first time a stop
    /// takes part in an emitted edge. Stops outside every multi-stop
    /// route get no vertex.
    ///
    /// # Errors
    ///
    /// [`CatalogueError::NoDistanceData`] if two consecutive stops of a
    /// route have no road distance.
    pub fn build(
        store: &NetworkStore,
        settings: &RoutingSettings,
    ) -> Result<(Self, RoutingGraph), CatalogueError> {
        let mut mapper = Self::default();
        let mut graph = RoutingGraph::new(store.stops_count());

        for (route_id, route) in store.routes() {
            let before = graph.edge_count();
            mapper.add_route_spans(store, settings, &mut graph, route_id, route)?;
            debug!(
                route = route.name(),
                edges = graph.edge_count() - before,
                "Added route spans"
            );
        }

        info!(
            vertices = mapper.vertex_to_stop.len(),
            edges = graph.edge_count(),
            "Routing graph built"
        );

        Ok((mapper, graph))
    }

    fn add_route_spans(
        &mut self,
        store: &NetworkStore,
        settings: &RoutingSettings,
        graph: &mut RoutingGraph,
        route_id: RouteId,
        route: &Route,
    ) -> Result<(), CatalogueError> {
        let stops = &route.stops;

        for (i, &boarding) in stops.iter().enumerate() {
            let mut accumulated = 0;

            for j in (i + 1)..stops.len() {
                if stops[j] == boarding {
                    break;
                }

                accumulated += store.distance_between(stops[j - 1], stops[j])?;
                let ride_time = settings.ride_time_mins(accumulated);

                let from = self.assign_vertex(boarding);
                let to = self.assign_vertex(stops[j]);
                let edge_id = graph.add_edge(Edge {
                    from,
                    to,
                    weight: settings.wait_time_mins() + ride_time,
                });
                debug_assert_eq!(edge_id.0, self.edges.len());

                self.edges.push(EdgeInfo {
                    route: route_id,
                    boarding_stop: boarding,
                    span_count: j - i,
                    ride_time,
                });
            }
        }

        Ok(())
    }

    fn assign_vertex(&mut self, stop: StopId) -> VertexId {
        if let Some(&vertex) = self.stop_to_vertex.get(&stop) {
            return vertex;
        }

        let vertex = VertexId(self.vertex_to_stop.len());
        self.stop_to_vertex.insert(stop, vertex);
        self.vertex_to_stop.push(stop);
        vertex
    }

    /// Vertex of a stop, if it is part of the graph.
    pub fn vertex(&self, stop: StopId) -> Option<VertexId> {
        self.stop_to_vertex.get(&stop).copied()
    }

    /// Stop behind a vertex issued by this mapper.
    pub fn stop(&self, vertex: VertexId) -> StopId {
        self.vertex_to_stop[vertex.0]
    }

    /// Trip metadata for an edge of the graph built alongside this mapper.
    pub fn edge_info(&self, edge: EdgeId) -> &EdgeInfo {
        &self.edges[edge.0]
    }

    /// Number of stops that received a vertex.
    pub fn vertex_count(&self) -> usize {
        self.vertex_to_stop.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use approx::assert_relative_eq;

    fn sample_store() -> NetworkStore {
        let mut store = NetworkStore::new();
        store.add_stop("A", Coordinates::new(55.611, 37.20));
        store.add_stop("B", Coordinates::new(55.595, 37.21));
        store.add_stop("C", Coordinates::new(55.632, 37.333));
        store.set_distance("A", "B", 2000).unwrap();
        store.set_distance("B", "A", 2100).unwrap();
        store.set_distance("B", "C", 4300).unwrap();
        store.set_distance("C", "B", 4200).unwrap();
        store.set_distance("C", "A", 4200).unwrap();
        store.add_route("1", &["A", "B", "C", "A"], true).unwrap();
        store
    }

    fn find_edge(
        mapper: &IdentityMapper,
        graph: &RoutingGraph,
        store: &NetworkStore,
        from: &str,
        to: &str,
    ) -> Vec<EdgeId> {
        let from = mapper.vertex(store.stop_id(from).unwrap()).unwrap();
        let to = mapper.vertex(store.stop_id(to).unwrap()).unwrap();
        graph
            .incident_edges(from)
            .iter()
            .copied()
            .filter(|&e| graph.edge(e).to == to)
            .collect()
    }

    #[test]
    fn round_trip_edges() {
        let store = sample_store();
        let settings = RoutingSettings::new(5, 30.0);
        let (mapper, graph) = IdentityMapper::build(&store, &settings).unwrap();

        // A: B, C (then back at A). B: C, A. C: A.
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(mapper.vertex_count(), 3);

        let ab = find_edge(&mapper, &graph, &store, "A", "B");
        assert_eq!(ab.len(), 1);
        assert_relative_eq!(graph.edge(ab[0]).weight, 9.0, epsilon = 1e-9);

        let bc = find_edge(&mapper, &graph, &store, "B", "C");
        assert_relative_eq!(graph.edge(bc[0]).weight, 13.6, epsilon = 1e-9);

        let ac = find_edge(&mapper, &graph, &store, "A", "C");
        assert_eq!(ac.len(), 1);
        assert_relative_eq!(graph.edge(ac[0]).weight, 17.6, epsilon = 1e-9);

        let info = mapper.edge_info(ac[0]);
        assert_eq!(info.route, store.route_id("1").unwrap());
        assert_eq!(info.boarding_stop, store.stop_id("A").unwrap());
        assert_eq!(info.span_count, 2);
        assert_relative_eq!(info.ride_time, 12.6, epsilon = 1e-9);

        let ca = find_edge(&mapper, &graph, &store, "C", "A");
        assert_relative_eq!(graph.edge(ca[0]).weight, 5.0 + 8.4, epsilon = 1e-9);

        let ba = find_edge(&mapper, &graph, &store, "B", "A");
        assert_eq!(mapper.edge_info(ba[0]).span_count, 2);
        assert_relative_eq!(graph.edge(ba[0]).weight, 5.0 + 17.0, epsilon = 1e-9);
    }

    #[test]
    fn no_edge_from_a_stop_to_itself() {
        let store = sample_store();
        let (mapper, graph) = IdentityMapper::build(&store, &RoutingSettings::default()).unwrap();
        let a = mapper.vertex(store.stop_id("A").unwrap()).unwrap();
        assert!(graph.incident_edges(a).iter().all(|&e| graph.edge(e).to != a));
    }

    #[test]
    fn vertices_follow_first_encounter() {
        let mut store = NetworkStore::new();
        store.add_stop("X", Coordinates::new(0.0, 0.0));
        store.add_stop("Y", Coordinates::new(0.0, 0.1));
        store.add_stop("Z", Coordinates::new(0.0, 0.2));
        store.set_distance("Z", "Y", 100).unwrap();
        store.add_route("r", &["Z", "Y", "Z"], false).unwrap();

        let (mapper, graph) = IdentityMapper::build(&store, &RoutingSettings::default()).unwrap();
        let z = store.stop_id("Z").unwrap();
        let y = store.stop_id("Y").unwrap();

        assert_eq!(mapper.vertex(z), Some(VertexId(0)));
        assert_eq!(mapper.vertex(y), Some(VertexId(1)));
        assert_eq!(mapper.vertex(store.stop_id("X").unwrap()), None);
        assert_eq!(mapper.stop(VertexId(0)), z);
        // The graph still has room for every stop in the store
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn single_stop_route_gets_no_vertex() {
        let mut store = NetworkStore::new();
        store.add_stop("Only", Coordinates::new(0.0, 0.0));
        store.add_route("r", &["Only"], true).unwrap();

        let (mapper, graph) = IdentityMapper::build(&store, &RoutingSettings::default()).unwrap();
        assert_eq!(mapper.vertex(store.stop_id("Only").unwrap()), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn missing_distance_is_fatal() {
        let mut store = NetworkStore::new();
        store.add_stop("A", Coordinates::new(0.0, 0.0));
        store.add_stop("B", Coordinates::new(0.0, 0.1));
        store.add_route("r", &["A", "B"], true).unwrap();

        let err = IdentityMapper::build(&store, &RoutingSettings::default()).unwrap_err();
        assert!(matches!(err, CatalogueError::NoDistanceData { .. }));
    }

    /// A revisited intermediate stop cuts spans short: from A on
    /// A → B → A → C there is no span-3 edge to C, only the span-1 edge
    /// boarded at the second visit of A.
    #[test]
    fn revisit_of_boarding_stop_restarts_spans() {
        let mut store = NetworkStore::new();
        for (name, lng) in [("A", 0.0), ("B", 0.1), ("C", 0.2)] {
            store.add_stop(name, Coordinates::new(0.0, lng));
        }
        store.set_distance("A", "B", 1000).unwrap();
        store.set_distance("A", "C", 3000).unwrap();
        store.add_route("r", &["A", "B", "A", "C"], true).unwrap();

        let (mapper, graph) = IdentityMapper::build(&store, &RoutingSettings::default()).unwrap();
        let ac = find_edge(&mapper, &graph, &store, "A", "C");
        assert_eq!(ac.len(), 1);
        assert_eq!(mapper.edge_info(ac[0]).span_count, 1);

        let bc = find_edge(&mapper, &graph, &store, "B", "C");
        assert_eq!(mapper.edge_info(bc[0]).span_count, 2);
    }
}
