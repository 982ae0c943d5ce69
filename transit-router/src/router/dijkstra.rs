//! Single-source shortest paths over a [`RoutingGraph`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::trace;

use super::graph::{EdgeId, RoutingGraph, VertexId};

/// A minimum-weight path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    /// Sum of edge weights.
    pub weight: f64,
    /// Edges in travel order. Empty when source and target coincide.
    pub edges: Vec<EdgeId>,
}

/// Finds minimum-weight paths.
///
/// This abstraction allows the planner to be tested with an instrumented
/// solver.
pub trait ShortestPathSolver {
    /// Returns a minimum-weight path from `from` to `to`, or `None` if `to`
    /// is unreachable.
    fn find_path(&self, graph: &RoutingGraph, from: VertexId, to: VertexId) -> Option<PathInfo>;
}

/// Dijkstra's algorithm with a binary heap.
///
/// Ties between equal-weight paths are resolved by heap order and
/// edge insertion order, so a fixed graph always yields the same path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPathSolver for Dijkstra {
    fn find_path(&self, graph: &RoutingGraph, from: VertexId, to: VertexId) -> Option<PathInfo> {
        let n = graph.vertex_count();
        if from.0 >= n || to.0 >= n {
            return None;
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[from.0] = 0.0;
        heap.push(Reverse((OrderedFloat(0.0), from)));

        while let Some(Reverse((OrderedFloat(cost), vertex))) = heap.pop() {
            if vertex == to {
                break;
            }

            // Skip stale heap entries
            if cost > dist[vertex.0] {
                continue;
            }

            for &edge_id in graph.incident_edges(vertex) {
                let edge = graph.edge(edge_id);
                let candidate = cost + edge.weight;
                if candidate < dist[edge.to.0] {
                    dist[edge.to.0] = candidate;
                    prev_edge[edge.to.0] = Some(edge_id);
                    heap.push(Reverse((OrderedFloat(candidate), edge.to)));
                }
            }
        }

        if dist[to.0].is_infinite() {
            trace!(from = from.0, to = to.0, "Target unreachable");
            return None;
        }

        let mut edges = Vec::new();
        let mut current = to;
        while current != from {
            let edge_id = prev_edge[current.0]?;
            edges.push(edge_id);
            current = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(PathInfo {
            weight: dist[to.0],
            edges,
        })
    }
}
