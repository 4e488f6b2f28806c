//! Unit tests for kspt-graph.
//!
//! All tests use hand-crafted graphs.

#[cfg(test)]
mod helpers {
    use kspt_core::NodeId;

    use crate::{Graph, GraphBuilder};

    /// Small undirected graph used across modules.
    ///
    /// ```text
    ///   0 ──3── 1
    ///   │ ╲     │
    ///   3   3   5
    ///   │     ╲ │
    ///   2 ──4── 3      (edges: 0-1, 0-2, 1-2, 1-3, 2-3)
    /// ```
    ///
    /// Shortest 0 → 3: 0→2→3 = 7 (vs 0→1→3 = 8).
    pub fn square_graph() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_undirected_edge(NodeId(0), NodeId(1), 3.0);
        b.add_undirected_edge(NodeId(0), NodeId(2), 3.0);
        b.add_undirected_edge(NodeId(1), NodeId(2), 3.0);
        b.add_undirected_edge(NodeId(1), NodeId(3), 5.0);
        b.add_undirected_edge(NodeId(2), NodeId(3), 4.0);
        b.build().unwrap()
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use kspt_core::NodeId;

    use crate::{GraphBuilder, GraphError};

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build().unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn edges_grow_node_count() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(4), 1.0);
        let g = b.build().unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.out_degree(NodeId(0)), 1);
        assert_eq!(g.out_degree(NodeId(4)), 0);
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let mut b = GraphBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        b.add_node();
        b.add_edge(a, c, 2.0);
        let g = b.build().unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.nodes().count(), 3);
    }

    #[test]
    fn csr_rows_keep_insertion_order() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(1), NodeId(0), 1.0);
        b.add_edge(NodeId(0), NodeId(3), 1.0);
        b.add_edge(NodeId(0), NodeId(1), 2.0);
        b.add_edge(NodeId(0), NodeId(2), 3.0);
        let g = b.build().unwrap();
        let row: Vec<_> = g.neighbors(NodeId(0)).map(|(n, _)| n).collect();
        assert_eq!(row, vec![NodeId(3), NodeId(1), NodeId(2)]);
        for e in g.out_edges(NodeId(0)) {
            assert_eq!(g.edge_from[e.index()], NodeId(0));
        }
    }

    #[test]
    fn readding_edge_overwrites_weight_in_place() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 5.0);
        b.add_edge(NodeId(0), NodeId(2), 1.0);
        b.add_edge(NodeId(0), NodeId(1), 2.0);
        let g = b.build().unwrap();
        assert_eq!(g.edge_count(), 2);
        let row: Vec<_> = g.neighbors(NodeId(0)).collect();
        assert_eq!(row, vec![(NodeId(1), 2.0), (NodeId(2), 1.0)]);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 1.0);
        let g = b.build().unwrap();
        assert_eq!(g.weight(NodeId(0), NodeId(1)), Some(1.0));
        assert_eq!(g.weight(NodeId(1), NodeId(0)), None);
        assert_eq!(g.weight(NodeId(9), NodeId(0)), None);
    }

    #[test]
    fn zero_weight_rejected() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 0.0);
        assert!(matches!(b.build(), Err(GraphError::InvalidGraph(_))));
    }

    #[test]
    fn negative_and_nan_weights_rejected() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), -1.0);
        assert!(matches!(b.build(), Err(GraphError::InvalidGraph(_))));

        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), f64::NAN);
        assert!(matches!(b.build(), Err(GraphError::InvalidGraph(_))));
    }

    #[test]
    fn undirected_edge_is_two_directed_edges() {
        let g = super::helpers::square_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 10);
        assert_eq!(g.out_degree(NodeId(1)), 3);
    }
}

// ── Speed calibration ─────────────────────────────────────────────────────────

#[cfg(test)]
mod calibrate {
    use kspt_core::NodeId;

    use crate::{propagation_speed, GraphBuilder, GraphError};

    #[test]
    fn speed_is_minimum_weight() {
        let g = super::helpers::square_graph();
        assert_eq!(propagation_speed(&g).unwrap(), 3.0);
    }

    #[test]
    fn speed_considers_every_node() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 7.5);
        b.add_edge(NodeId(3), NodeId(2), 0.25);
        let g = b.build().unwrap();
        assert_eq!(propagation_speed(&g).unwrap(), 0.25);
    }

    #[test]
    fn no_edges_is_invalid() {
        let mut b = GraphBuilder::new();
        b.add_node();
        b.add_node();
        let g = b.build().unwrap();
        assert!(matches!(propagation_speed(&g), Err(GraphError::InvalidGraph(_))));
    }

    #[test]
    fn tampered_weight_is_invalid() {
        let mut g = super::helpers::square_graph();
        g.edge_weight[0] = 0.0;
        assert!(matches!(propagation_speed(&g), Err(GraphError::InvalidGraph(_))));
    }
}

// ── Path costing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use kspt_core::NodeId;

    use crate::{path_length, GraphError};

    #[test]
    fn sums_consecutive_edges() {
        let g = super::helpers::square_graph();
        let path = [NodeId(0), NodeId(1), NodeId(3), NodeId(2)];
        assert_eq!(path_length(&g, &path).unwrap(), 3.0 + 5.0 + 4.0);
    }

    #[test]
    fn single_node_path_is_zero() {
        let g = super::helpers::square_graph();
        assert_eq!(path_length(&g, &[NodeId(2)]).unwrap(), 0.0);
        assert_eq!(path_length(&g, &[]).unwrap(), 0.0);
    }

    #[test]
    fn missing_edge_reports_pair() {
        let g = super::helpers::square_graph();
        let path = [NodeId(0), NodeId(3)];
        match path_length(&g, &path) {
            Err(GraphError::DisconnectedPath { from, to }) => {
                assert_eq!((from, to), (NodeId(0), NodeId(3)));
            }
            other => panic!("expected DisconnectedPath, got {other:?}"),
        }
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use kspt_core::NodeId;

    use crate::{shortest_distance, shortest_path, GraphBuilder, GraphError};

    #[test]
    fn trivial_same_node() {
        let g = super::helpers::square_graph();
        let p = shortest_path(&g, NodeId(1), NodeId(1)).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.length, 0.0);
    }

    #[test]
    fn shortest_path_correct() {
        let g = super::helpers::square_graph();
        let p = shortest_path(&g, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(p.nodes, vec![NodeId(0), NodeId(2), NodeId(3)]);
        assert_eq!(p.length, 7.0);
        assert_eq!(shortest_distance(&g, NodeId(3), NodeId(0)).unwrap(), 7.0);
    }

    #[test]
    fn one_way_blocks_return() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 1.0);
        let g = b.build().unwrap();
        assert!(shortest_path(&g, NodeId(0), NodeId(1)).is_ok());
        assert!(matches!(
            shortest_path(&g, NodeId(1), NodeId(0)),
            Err(GraphError::NoRoute { .. })
        ));
    }

    #[test]
    fn unknown_node() {
        let g = super::helpers::square_graph();
        assert!(matches!(
            shortest_path(&g, NodeId(0), NodeId(42)),
            Err(GraphError::NodeNotFound(NodeId(42)))
        ));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use kspt_core::NodeId;

    use crate::{load_edges_reader, GraphError};

    const EDGES: &str = "from,to,weight\n0,1,3\n0,2,3.5\n2,3, 1\n";

    #[test]
    fn directed_load() {
        let g = load_edges_reader(Cursor::new(EDGES), true).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.weight(NodeId(2), NodeId(3)), Some(1.0));
        assert_eq!(g.weight(NodeId(3), NodeId(2)), None);
    }

    #[test]
    fn undirected_load() {
        let g = load_edges_reader(Cursor::new(EDGES), false).unwrap();
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.weight(NodeId(2), NodeId(0)), Some(3.5));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let bad = "from,to,weight\n0,x,1\n";
        assert!(matches!(
            load_edges_reader(Cursor::new(bad), true),
            Err(GraphError::Parse(_))
        ));
    }

    #[test]
    fn non_positive_weight_is_invalid_graph() {
        let bad = "from,to,weight\n0,1,0\n";
        assert!(matches!(
            load_edges_reader(Cursor::new(bad), true),
            Err(GraphError::InvalidGraph(_))
        ));
    }
}
