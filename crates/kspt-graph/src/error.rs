//! Graph-subsystem error type.

use thiserror::Error;

use kspt_core::NodeId;

/// Errors produced by `kspt-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("path is disconnected: no edge from {from} to {to}")]
    DisconnectedPath { from: NodeId, to: NodeId },

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("edge list parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
