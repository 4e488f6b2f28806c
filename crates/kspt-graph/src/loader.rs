//! CSV edge-list loader.
//!
//! # CSV format
//!
//! One row per edge.  Node ids are dense `u32`s; the node count is one more
//! than the largest id seen.
//!
//! ```csv
//! from,to,weight
//! 0,1,3.0
//! 0,2,3.0
//! 1,3,5.0
//! ```
//!
//! With `directed = false` every row also adds the reverse edge.  A repeated
//! `(from, to)` pair overwrites the earlier weight.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use kspt_core::NodeId;

use crate::{Graph, GraphBuilder, GraphError, GraphResult};

#[derive(Deserialize)]
struct EdgeRecord {
    from:   u32,
    to:     u32,
    weight: f64,
}

/// Load a [`Graph`] from a CSV edge-list file.
pub fn load_edges_csv(path: &Path, directed: bool) -> GraphResult<Graph> {
    let file = std::fs::File::open(path)?;
    load_edges_reader(file, directed)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R, directed: bool) -> GraphResult<Graph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut builder = GraphBuilder::new();

    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let (from, to) = (NodeId(row.from), NodeId(row.to));
        if directed {
            builder.add_edge(from, to, row.weight);
        } else {
            builder.add_undirected_edge(from, to, row.weight);
        }
    }

    builder.build()
}
