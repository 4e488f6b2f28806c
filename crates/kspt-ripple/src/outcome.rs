//! Stage output: arrival records and the exhaustion report.

use kspt_core::{NodeId, Tick};

/// A ripple created at a node of the stage's destination group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRecord {
    pub node:   NodeId,
    /// Overshoot radius of the ripple at creation.
    pub radius: f64,
    pub tick:   Tick,
    /// Full path from the tour origin to `node`.
    pub path:   Vec<NodeId>,
}

/// How short one destination node fell of `k` arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeShortfall {
    pub node:  NodeId,
    pub found: usize,
}

/// The wavefront died out before every destination node reached `k`
/// arrivals.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhaustion {
    /// Tick at which no active ripple or pending seed was left.
    pub tick:  Tick,
    /// Destination nodes still below `k`, in destination-group order.
    pub unmet: Vec<NodeShortfall>,
}

/// Result of one simulator stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome {
    /// Arrival records grouped by destination node (group order), creation
    /// order within a node.
    pub arrivals: Vec<ArrivalRecord>,

    /// First tick processed (the earliest seed tick).
    pub start_tick: Tick,

    /// Last tick processed.
    pub final_tick: Tick,

    /// Total ripples created, seeds included.
    pub ripples_created: usize,

    /// `Some` if the stage ended because the wavefront was exhausted.
    pub exhausted: Option<Exhaustion>,
}

impl StageOutcome {
    /// `true` if every destination node received `k` arrivals.
    pub fn is_complete(&self) -> bool {
        self.exhausted.is_none()
    }
}
