//! Weighted directed graph and its builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** form.  Given
//! a `NodeId n`, its outgoing edges occupy:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! The CSR row of a node doubles as its neighbor index: the ripple simulator
//! walks it once per active ripple per tick, so it must be a contiguous scan.
//! Within a row, edges keep the order in which they were first added.

use std::collections::HashMap;

use kspt_core::{EdgeId, NodeId};

use crate::{GraphError, GraphResult};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Immutable weighted directed graph in CSR format.
///
/// Every weight is finite and strictly positive; [`GraphBuilder::build`]
/// rejects anything else.  Construct via [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct Graph {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length (weight) of each edge.
    pub edge_weight: Vec<f64>,
}

impl Graph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// `true` if `node` is a valid index into this graph.
    ///
    /// Ids are dense: every id below `node_count()` is present, including
    /// ids in a gap that no edge touches.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Iterator over all node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// `(neighbor, weight)` pairs for every outgoing edge of `node`, in
    /// insertion order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        self.edge_to[start..end]
            .iter()
            .copied()
            .zip(self.edge_weight[start..end].iter().copied())
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Weight of the edge `from → to`, or `None` if there is no such edge or
    /// `from` is outside the graph.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if !self.contains(from) {
            return None;
        }
        self.neighbors(from)
            .find(|&(n, _)| n == to)
            .map(|(_, w)| w)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order.  Adding the edge `from → to` a second time
/// overwrites its weight but keeps its original position in `from`'s neighbor
/// order.  The node count grows to cover every edge endpoint; isolated nodes
/// can be declared with [`add_node`](Self::add_node) or
/// [`ensure_nodes`](Self::ensure_nodes).
///
/// # Example
///
/// ```
/// use kspt_core::NodeId;
/// use kspt_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_undirected_edge(NodeId(0), NodeId(1), 3.0);
/// b.add_edge(NodeId(1), NodeId(2), 4.0);
/// let g = b.build().unwrap();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_count: u32,
    raw_edges:  Vec<RawEdge>,
    /// `(from, to)` → position in `raw_edges`, for overwrite-on-readd.
    positions:  HashMap<(NodeId, NodeId), usize>,
}

#[derive(Debug, Clone, Copy)]
struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            node_count: 0,
            raw_edges:  Vec::with_capacity(edges),
            positions:  HashMap::with_capacity(edges),
        }
    }

    /// Add an isolated node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        id
    }

    /// Grow the node count to at least `count`.
    pub fn ensure_nodes(&mut self, count: u32) {
        self.node_count = self.node_count.max(count);
    }

    /// Add a **directed** edge `from → to` with length `weight`.
    ///
    /// Weights are validated in [`build`](Self::build), not here.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.ensure_nodes(from.0.max(to.0).saturating_add(1));
        match self.positions.get(&(from, to)) {
            Some(&pos) => self.raw_edges[pos].weight = weight,
            None => {
                self.positions.insert((from, to), self.raw_edges.len());
                self.raw_edges.push(RawEdge { from, to, weight });
            }
        }
    }

    /// Convenience: add edges in **both directions** with the same weight.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize { self.node_count as usize }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Validate weights and produce a [`Graph`].
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidGraph`] if any weight is non-finite or ≤ 0, or if
    /// the node count does not fit the CSR row pointer.
    pub fn build(self) -> GraphResult<Graph> {
        if self.node_count == u32::MAX {
            return Err(GraphError::InvalidGraph(format!(
                "node count {} exceeds the supported maximum",
                self.node_count
            )));
        }
        if let Some(bad) = self
            .raw_edges
            .iter()
            .find(|e| !(e.weight.is_finite() && e.weight > 0.0))
        {
            return Err(GraphError::InvalidGraph(format!(
                "edge {} -> {} has non-positive weight {}",
                bad.from, bad.to, bad.weight
            )));
        }

        let node_count = self.node_count as usize;
        let edge_count = self.raw_edges.len();

        // Stable sort keeps insertion order within each source row.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Ok(Graph {
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
        })
    }
}
