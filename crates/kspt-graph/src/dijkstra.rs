//! Reference single-pair shortest path (Dijkstra).
//!
//! Not used by the ripple simulator itself.  It gives callers and tests an
//! independent answer to compare a `k = 1`, two-group tour against.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use kspt_core::{EdgeId, NodeId};

use crate::{Graph, GraphError, GraphResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// The result of a routing query: visited nodes in order and total length.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from source to destination, inclusive.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along `nodes`.
    pub length: f64,
}

impl ShortestPath {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Shortest path from `from` to `to`.
///
/// # Errors
///
/// - [`GraphError::NodeNotFound`] if either endpoint is outside the graph.
/// - [`GraphError::NoRoute`] if `to` is unreachable from `from`.
pub fn shortest_path(graph: &Graph, from: NodeId, to: NodeId) -> GraphResult<ShortestPath> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(GraphError::NodeNotFound(node));
        }
    }
    if from == to {
        return Ok(ShortestPath { nodes: vec![from], length: 0.0 });
    }

    let n = graph.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    dist[from.index()] = 0.0;

    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(Dist, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Dist(0.0), from)));

    while let Some(Reverse((Dist(cost), node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost + graph.edge_weight[edge.index()];
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Dist(new_cost), neighbor)));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

/// Length of the shortest path from `from` to `to`.
pub fn shortest_distance(graph: &Graph, from: NodeId, to: NodeId) -> GraphResult<f64> {
    shortest_path(graph, from, to).map(|p| p.length)
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Heap key with a total order over `f64` distances.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dist(f64);

impl Eq for Dist {}

impl PartialOrd for Dist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn reconstruct(graph: &Graph, prev_edge: &[EdgeId], to: NodeId, length: f64) -> ShortestPath {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    ShortestPath { nodes, length }
}
