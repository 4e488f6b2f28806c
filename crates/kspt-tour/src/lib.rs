//! `kspt-tour` — k shortest path tours through ordered waypoint groups.
//!
//! A tour starts at any node of the first group and visits one node of every
//! following group in order.  The solver runs one ripple-spreading stage per
//! consecutive pair of groups, seeding each stage with the previous stage's
//! arrivals, then costs the surviving paths.
//!
//! # Pipeline
//!
//! | Step                                     | Module          |
//! |------------------------------------------|-----------------|
//! | Validate groups, calibrate speed         | [`solver`]      |
//! | One simulator stage per group pair       | [`chain`]       |
//! | Cost, deduplicate, keep simulation order | [`rank`]        |
//! | Result set, strict / partial views       | [`tour`]        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use kspt_graph::GraphBuilder;
//! use kspt_tour::compute_k_shortest_path_tour;
//!
//! let mut b = GraphBuilder::new();
//! b.add_edge(NodeId(0), NodeId(1), 2.0);
//! b.add_edge(NodeId(1), NodeId(2), 2.0);
//! let graph = b.build()?;
//!
//! let tours = compute_k_shortest_path_tour(&graph, &[vec![NodeId(0)], vec![NodeId(2)]], 1)?;
//! assert_eq!(tours[0].length, 4.0);
//! ```

pub mod chain;
pub mod error;
pub mod rank;
pub mod solver;
pub mod tour;


pub use chain::{ChainOutcome, StageChainer};
pub use error::{TourError, TourResult};
pub use rank::ResultRanker;
pub use solver::{TourSolver, compute_k_shortest_path_tour, solve};
pub use tour::{Shortfall, Tour, TourSet};
