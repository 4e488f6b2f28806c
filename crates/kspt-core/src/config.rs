//! Solver configuration and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Top-level solver configuration.
///
/// Typically built in code or loaded from a JSON/TOML file by the application
/// crate and passed to the tour solver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Arrivals wanted at every node of every destination group.  Must be ≥ 1.
    pub k: usize,

    /// Upper bound on the number of ticks a single stage may run.  `None`
    /// means unbounded; the exhaustion check still guarantees termination on
    /// any graph with positive weights.
    pub max_ticks: Option<u64>,

    /// Drop tours whose path repeats an earlier tour's path.  Default: `true`.
    pub deduplicate: bool,
}

impl SolverConfig {
    /// Configuration asking for `k` tours with all other options at defaults.
    pub fn with_k(k: usize) -> Self {
        Self { k, ..Self::default() }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            k:           1,
            max_ticks:   None,
            deduplicate: true,
        }
    }
}

// ── CancelToken ───────────────────────────────────────────────────────────────

/// Shared flag used to stop a long-running solve from another thread.
///
/// The ripple simulator checks the flag once per tick, so cancellation takes
/// effect at the next tick boundary.  Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.  Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
