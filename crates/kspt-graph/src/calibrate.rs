//! Propagation-speed calibration.
//!
//! Ripples grow by exactly `v` per tick.  Choosing `v` as the smallest edge
//! weight in the whole graph means no edge's arrival window `[L, L + v)` can
//! be stepped over, so every crossing is observed in exactly one tick.

use crate::{Graph, GraphError, GraphResult};

/// Global propagation speed: the minimum edge weight over the whole graph.
///
/// Computed once per solve and shared read-only by every stage.
///
/// # Errors
///
/// [`GraphError::InvalidGraph`] if the graph has no edges (speed undefined)
/// or holds a non-positive weight.  The second case cannot happen for graphs
/// produced by [`GraphBuilder`](crate::GraphBuilder) but is re-checked because
/// `Graph`'s fields are public.
pub fn propagation_speed(graph: &Graph) -> GraphResult<f64> {
    let speed = graph
        .edge_weight
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    if graph.edge_count() == 0 {
        return Err(GraphError::InvalidGraph(
            "graph has no edges; propagation speed is undefined".into(),
        ));
    }
    if !(speed.is_finite() && speed > 0.0) {
        return Err(GraphError::InvalidGraph(format!(
            "minimum edge weight {speed} is not a positive finite number"
        )));
    }
    Ok(speed)
}
