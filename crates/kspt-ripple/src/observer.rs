//! Stage observer trait for tracing and invariant checking.

use kspt_core::{NodeId, RippleId, Tick};

use crate::{ArrivalRecord, RippleRef, RippleStore, StageOutcome};

/// Read-only snapshot of the simulator state at the end of a tick.
#[derive(Debug, Clone, Copy)]
pub struct StageView<'a> {
    pub tick:   Tick,
    pub k:      usize,
    /// Every ripple created so far this stage.
    pub store:  &'a RippleStore,
    /// Ripples still able to cross an edge, in creation order.
    pub active: &'a [RippleId],
    /// Ripples created per node this stage, indexed by `NodeId`.
    pub omega:  &'a [usize],
}

impl StageView<'_> {
    /// Arrival counter of `node`.
    #[inline]
    pub fn omega(&self, node: NodeId) -> usize {
        self.omega[node.index()]
    }
}

/// Callbacks invoked by [`RippleSimulator::run_stage`][crate::RippleSimulator::run_stage]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — tick counter
///
/// ```rust,ignore
/// struct TickCounter(usize);
///
/// impl StageObserver for TickCounter {
///     fn on_tick_end(&mut self, _view: StageView<'_>) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait StageObserver {
    /// Called once before the first tick.  `seeds` is the number of seeds.
    fn on_stage_start(&mut self, _start: Tick, _seeds: usize) {}

    /// Called at the start of each processed tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every ripple created in the apply phase, seeds included.
    fn on_ripple_created(&mut self, _tick: Tick, _ripple: RippleRef<'_>) {}

    /// Called when a created ripple lands on a destination node.
    fn on_arrival(&mut self, _record: &ArrivalRecord) {}

    /// Called after the deactivation step of each tick.
    fn on_tick_end(&mut self, _view: StageView<'_>) {}

    /// Called once when the stage returns an outcome.
    fn on_stage_end(&mut self, _outcome: &StageOutcome) {}
}

/// A [`StageObserver`] that does nothing.
pub struct NoopObserver;

impl StageObserver for NoopObserver {}
