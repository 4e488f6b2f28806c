//! Property-based tests for the tour solver.
//!
//! Random small graphs with integer weights keep every radius exact, so
//! lengths can be compared without a tolerance.

use kspt_core::NodeId;
use kspt_graph::{Graph, GraphBuilder, GraphError, path_length, shortest_distance};
use kspt_tour::{TourSet, solve};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// Node count, directedness, and `(from, to, weight)` edges without
/// self-loops.
fn arb_graph() -> impl Strategy<Value = (u32, bool, Vec<(u32, u32, u32)>)> {
    (2u32..=7).prop_flat_map(|n| {
        let edge = (0..n, 1..n, 1u32..=9).prop_map(move |(a, off, w)| (a, (a + off) % n, w));
        (
            Just(n),
            any::<bool>(),
            proptest::collection::vec(edge, 1..=(3 * n as usize)),
        )
    })
}

fn arb_groups(n: u32) -> impl Strategy<Value = Vec<Vec<NodeId>>> {
    let group = proptest::collection::vec((0..n).prop_map(NodeId), 1..=2);
    proptest::collection::vec(group, 2..=4)
}

fn build(n: u32, directed: bool, edges: &[(u32, u32, u32)]) -> Graph {
    let mut b = GraphBuilder::with_capacity(edges.len() * 2);
    b.ensure_nodes(n);
    for &(from, to, w) in edges {
        if directed {
            b.add_edge(NodeId(from), NodeId(to), f64::from(w));
        } else {
            b.add_undirected_edge(NodeId(from), NodeId(to), f64::from(w));
        }
    }
    b.build().expect("generated weights are positive")
}

/// `true` if `path` passes one node of every group, in group order, and
/// ends in the last group.  One node may serve several consecutive groups.
fn visits_in_order(path: &[NodeId], groups: &[Vec<NodeId>]) -> bool {
    let mut next = 0;
    for node in path {
        while next < groups.len() && groups[next].contains(node) {
            next += 1;
        }
    }
    let ends_in_last = path.last().is_some_and(|n| groups[groups.len() - 1].contains(n));
    next == groups.len() && ends_in_last
}

fn unique_count(nodes: &[NodeId]) -> usize {
    let mut v = nodes.to_vec();
    v.sort();
    v.dedup();
    v.len()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// With k = 1 and a single origin and destination, the tour is a
    /// shortest path.
    #[test]
    fn single_tour_matches_dijkstra(
        (n, directed, edges, from, to) in arb_graph().prop_flat_map(|(n, d, e)| {
            (Just(n), Just(d), Just(e), 0..n, 0..n)
        })
    ) {
        let graph = build(n, directed, &edges);
        let (from, to) = (NodeId(from), NodeId(to));
        let set = solve(&graph, &[vec![from], vec![to]], 1).unwrap();

        match shortest_distance(&graph, from, to) {
            Ok(best) => {
                prop_assert!(set.is_complete());
                prop_assert_eq!(set.len(), 1);
                prop_assert_eq!(set.tours[0].length, best);
            }
            Err(GraphError::NoRoute { .. }) => {
                prop_assert!(!set.is_complete());
                prop_assert!(set.is_empty());
            }
            Err(e) => prop_assert!(false, "unexpected routing error: {e}"),
        }
    }

    /// Every tour follows real edges, is costed exactly, and passes the
    /// waypoint groups in order.
    #[test]
    fn tours_are_connected_and_ordered(
        (n, directed, edges, groups, k) in arb_graph().prop_flat_map(|(n, d, e)| {
            (Just(n), Just(d), Just(e), arb_groups(n), 1usize..=3)
        })
    ) {
        let graph = build(n, directed, &edges);
        let set: TourSet = solve(&graph, &groups, k).unwrap();

        for tour in &set {
            prop_assert_eq!(path_length(&graph, &tour.path).unwrap(), tour.length);
            prop_assert!(visits_in_order(&tour.path, &groups), "path {:?}", tour.path);
        }
    }

    /// The final group bounds the number of tours, and a complete solve
    /// produces at least one.
    #[test]
    fn tour_count_is_bounded(
        (n, directed, edges, groups, k) in arb_graph().prop_flat_map(|(n, d, e)| {
            (Just(n), Just(d), Just(e), arb_groups(n), 1usize..=3)
        })
    ) {
        let graph = build(n, directed, &edges);
        let set = solve(&graph, &groups, k).unwrap();
        let last = &groups[groups.len() - 1];

        prop_assert!(set.len() <= k * unique_count(last));
        if set.is_complete() {
            prop_assert!(!set.is_empty());
        }

        let sorted = set.sorted_by_length();
        prop_assert!(sorted.windows(2).all(|w| w[0].length <= w[1].length));
    }
}
