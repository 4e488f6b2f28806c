//! Path costing.

use kspt_core::NodeId;

use crate::{Graph, GraphError, GraphResult};

/// Total length of `path`: the sum of edge weights over consecutive pairs.
///
/// Paths with fewer than two nodes have length `0.0`.
///
/// # Errors
///
/// [`GraphError::DisconnectedPath`] if a consecutive pair has no edge.  Paths
/// produced by the ripple simulator always follow edges, so this signals a
/// bug rather than bad input.
pub fn path_length(graph: &Graph, path: &[NodeId]) -> GraphResult<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (pair[0], pair[1]);
        graph
            .weight(from, to)
            .map(|w| total + w)
            .ok_or(GraphError::DisconnectedPath { from, to })
    })
}
