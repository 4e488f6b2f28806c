//! Problem files and the built-in four-node network.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use kspt_core::{NodeId, SolverConfig};
use kspt_graph::{Graph, GraphBuilder, load_edges_reader};
use serde::Deserialize;

// ── Built-in network ──────────────────────────────────────────────────────────

// Undirected; every pair listed once.
const BUILTIN_EDGES_CSV: &str = "\
from,to,weight\n\
0,1,3\n\
0,2,3\n\
1,2,3\n\
1,3,5\n\
2,3,4\n\
";

// ── Problem file ──────────────────────────────────────────────────────────────

/// A solve request as read from JSON.
///
/// ```json
/// {
///   "edges":    [[0, 1, 3.0], [1, 2, 2.5]],
///   "directed": false,
///   "groups":   [[0], [2]],
///   "config":   { "k": 2 }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct Problem {
    pub edges:    Vec<(u32, u32, f64)>,
    #[serde(default)]
    pub directed: bool,
    pub groups:   Vec<Vec<NodeId>>,
    #[serde(default)]
    pub config:   SolverConfig,
}

/// A problem with its graph built.
pub struct Loaded {
    pub graph:  Graph,
    pub groups: Vec<Vec<NodeId>>,
    pub config: SolverConfig,
}

impl Problem {
    pub fn from_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn build(self) -> Result<Loaded> {
        let mut b = GraphBuilder::with_capacity(self.edges.len() * 2);
        for (from, to, weight) in self.edges {
            if self.directed {
                b.add_edge(NodeId(from), NodeId(to), weight);
            } else {
                b.add_undirected_edge(NodeId(from), NodeId(to), weight);
            }
        }
        Ok(Loaded {
            graph:  b.build()?,
            groups: self.groups,
            config: self.config,
        })
    }
}

/// Four-node network, visiting node 1 then node 3 from node 0, k = 2.
pub fn builtin() -> Result<Loaded> {
    let graph = load_edges_reader(Cursor::new(BUILTIN_EDGES_CSV), false)?;
    Ok(Loaded {
        graph,
        groups: vec![vec![NodeId(0)], vec![NodeId(1)], vec![NodeId(3)]],
        config: SolverConfig::with_k(2),
    })
}

/// Graph from an edge CSV file plus groups given on the command line.
pub fn from_csv(path: &Path, directed: bool, groups: Vec<Vec<NodeId>>, k: usize) -> Result<Loaded> {
    let graph = kspt_graph::load_edges_csv(path, directed)
        .with_context(|| format!("loading edges from {}", path.display()))?;
    Ok(Loaded { graph, groups, config: SolverConfig::with_k(k) })
}

/// Parse `"0,4;1;3,5"` into `[[0, 4], [1], [3, 5]]`.
pub fn parse_groups(text: &str) -> Result<Vec<Vec<NodeId>>> {
    text.split(';')
        .map(|group| {
            group
                .split(',')
                .map(|id| {
                    id.trim()
                        .parse::<u32>()
                        .map(NodeId)
                        .with_context(|| format!("bad node id {id:?} in group {group:?}"))
                })
                .collect()
        })
        .collect()
}
