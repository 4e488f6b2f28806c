//! Tour-level error type.
//!
//! Graph and simulator errors are folded into the categories a caller acts
//! on: bad graph, bad request, not enough tours, or an internal bug.

use kspt_core::{NodeId, Tick};
use kspt_graph::GraphError;
use kspt_ripple::RippleError;
use thiserror::Error;

use crate::Tour;

#[derive(Debug, Error)]
pub enum TourError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Waypoint group `group` could not collect `requested` arrivals per
    /// node.  `tours` holds every tour that was completed anyway.
    #[error("only {found} tour(s) found; waypoint group {group} ran out of paths before k = {requested}")]
    InsufficientPaths {
        requested: usize,
        found:     usize,
        group:     usize,
        tours:     Vec<Tour>,
    },

    /// A simulated path stepped between two nodes with no edge.  Always a bug.
    #[error("internal error: tour path has no edge from {from} to {to}")]
    DisconnectedPath { from: NodeId, to: NodeId },

    #[error("solve cancelled at {tick}")]
    Cancelled { tick: Tick },

    #[error("stage exceeded its budget of {limit} ticks (stopped at {tick})")]
    TickLimit { limit: u64, tick: Tick },

    #[error("graph error: {0}")]
    Graph(#[source] GraphError),
}

impl From<GraphError> for TourError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidGraph(msg)               => TourError::InvalidGraph(msg),
            GraphError::DisconnectedPath { from, to }   => TourError::DisconnectedPath { from, to },
            GraphError::NodeNotFound(node)              => {
                TourError::InvalidInput(format!("node {node} is not in the graph"))
            }
            other                                       => TourError::Graph(other),
        }
    }
}

impl From<RippleError> for TourError {
    fn from(e: RippleError) -> Self {
        match e {
            RippleError::InvalidInput(msg)        => TourError::InvalidInput(msg),
            RippleError::Cancelled { tick }       => TourError::Cancelled { tick },
            RippleError::TickLimit { limit, tick } => TourError::TickLimit { limit, tick },
        }
    }
}

pub type TourResult<T> = Result<T, TourError>;
