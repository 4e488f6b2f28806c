//! Turns final-stage arrivals into costed tours.

use std::collections::HashSet;

use kspt_core::NodeId;
use kspt_graph::{Graph, GraphResult, path_length};
use kspt_ripple::ArrivalRecord;

use crate::Tour;

/// Costs each arrival path and optionally drops repeated paths.
///
/// Order is preserved: the first occurrence of a path wins.
#[derive(Debug, Clone, Copy)]
pub struct ResultRanker {
    pub deduplicate: bool,
}

impl ResultRanker {
    pub fn new(deduplicate: bool) -> Self {
        Self { deduplicate }
    }

    /// Build tours from `arrivals`.
    ///
    /// # Errors
    ///
    /// `GraphError::DisconnectedPath` if a path steps across a missing edge.
    pub fn rank(&self, graph: &Graph, arrivals: Vec<ArrivalRecord>) -> GraphResult<Vec<Tour>> {
        let mut seen: HashSet<Vec<NodeId>> = HashSet::with_capacity(arrivals.len());
        let mut tours = Vec::with_capacity(arrivals.len());

        for record in arrivals {
            if self.deduplicate && !seen.insert(record.path.clone()) {
                continue;
            }
            let length = path_length(graph, &record.path)?;
            tours.push(Tour { path: record.path, length });
        }
        Ok(tours)
    }
}

impl Default for ResultRanker {
    fn default() -> Self {
        Self::new(true)
    }
}
