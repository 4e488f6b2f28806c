//! Fluent entry point for solving a k-shortest-path-tour problem.

use kspt_core::{CancelToken, NodeId, SolverConfig};
use kspt_graph::{Graph, propagation_speed};
use kspt_ripple::{NoopObserver, RippleSimulator, StageObserver};
use tracing::info;

use crate::{ResultRanker, StageChainer, Tour, TourError, TourResult, TourSet};

/// Fluent solver over one graph.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.max_ticks(n)`      | `config.max_ticks` (unbounded)   |
/// | `.deduplicate(b)`    | `config.deduplicate` (`true`)    |
/// | `.cancel_token(t)`   | Never cancelled                  |
///
/// # Example
///
/// ```rust,ignore
/// let tours = TourSolver::new(&graph, SolverConfig::with_k(2))
///     .max_ticks(10_000)
///     .solve(&[vec![NodeId(0)], vec![NodeId(1)], vec![NodeId(3)]])?;
/// for tour in tours.sorted_by_length() {
///     println!("{:?} {}", tour.path, tour.length);
/// }
/// ```
pub struct TourSolver<'g> {
    graph:  &'g Graph,
    config: SolverConfig,
    cancel: Option<CancelToken>,
}

impl<'g> TourSolver<'g> {
    pub fn new(graph: &'g Graph, config: SolverConfig) -> Self {
        Self { graph, config, cancel: None }
    }

    /// Bound the number of ticks any single stage may run.
    pub fn max_ticks(mut self, limit: u64) -> Self {
        self.config.max_ticks = Some(limit);
        self
    }

    pub fn deduplicate(mut self, on: bool) -> Self {
        self.config.deduplicate = on;
        self
    }

    /// Checked once per tick; a cancelled solve returns
    /// [`TourError::Cancelled`].
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for `groups` (origin group first, final group last).
    pub fn solve(&self, groups: &[Vec<NodeId>]) -> TourResult<TourSet> {
        self.solve_with_observer(groups, &mut NoopObserver)
    }

    /// Like [`solve`][Self::solve], reporting every stage to `observer`.
    ///
    /// # Errors
    ///
    /// - [`TourError::InvalidGraph`] for a graph with no edges.
    /// - [`TourError::InvalidInput`] for `k == 0`, fewer than two groups, an
    ///   empty group, or a node outside the graph.
    /// - [`TourError::Cancelled`] / [`TourError::TickLimit`] when a stage is
    ///   interrupted.
    ///
    /// Running out of paths is not an error here: the shortfall is recorded
    /// on the returned [`TourSet`].
    pub fn solve_with_observer<O: StageObserver>(
        &self,
        groups:   &[Vec<NodeId>],
        observer: &mut O,
    ) -> TourResult<TourSet> {
        self.validate(groups)?;
        let speed = propagation_speed(self.graph)?;

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            groups = groups.len(),
            k = self.config.k,
            speed,
            "solving k-shortest path tours"
        );

        let mut sim = RippleSimulator::new(self.graph, speed, self.config.k)?
            .with_max_ticks(self.config.max_ticks);
        if let Some(token) = &self.cancel {
            sim = sim.with_cancel_token(token.clone());
        }

        let chain = StageChainer::new(&sim).run(groups, observer)?;
        let tours = ResultRanker::new(self.config.deduplicate).rank(self.graph, chain.arrivals)?;

        info!(
            tours = tours.len(),
            stages = chain.stages_run,
            complete = chain.shortfalls.is_empty(),
            "solve finished"
        );

        Ok(TourSet {
            tours,
            requested_k: self.config.k,
            shortfalls:  chain.shortfalls,
        })
    }

    /// Node ids are dense, so an isolated id below the node count counts as
    /// present; a tour to it simply comes up short.
    fn validate(&self, groups: &[Vec<NodeId>]) -> TourResult<()> {
        if self.graph.is_empty() {
            return Err(TourError::InvalidGraph("graph has no nodes".into()));
        }
        if self.config.k == 0 {
            return Err(TourError::InvalidInput("k must be at least 1".into()));
        }
        if groups.len() < 2 {
            return Err(TourError::InvalidInput(format!(
                "need at least 2 waypoint groups, got {}",
                groups.len()
            )));
        }
        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(TourError::InvalidInput(format!("waypoint group {index} is empty")));
            }
            if let Some(node) = group.iter().find(|&&n| !self.graph.contains(n)) {
                return Err(TourError::InvalidInput(format!(
                    "waypoint group {index} names node {node}, which is not in the graph"
                )));
            }
        }
        Ok(())
    }
}

/// Solve with default options, returning partial results as a [`TourSet`].
pub fn solve(graph: &Graph, groups: &[Vec<NodeId>], k: usize) -> TourResult<TourSet> {
    TourSolver::new(graph, SolverConfig::with_k(k)).solve(groups)
}

/// Up to `k` shortest tours per final-group node, visiting one node of each
/// group in order.
///
/// Strict: any stage that runs out of paths yields
/// [`TourError::InsufficientPaths`] with the tours found so far.
pub fn compute_k_shortest_path_tour(
    graph:  &Graph,
    groups: &[Vec<NodeId>],
    k:      usize,
) -> TourResult<Vec<Tour>> {
    solve(graph, groups, k)?.into_complete()
}
