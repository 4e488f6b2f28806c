//! Runs the simulator once per consecutive pair of waypoint groups.

use kspt_core::NodeId;
use kspt_ripple::{ArrivalRecord, RippleResult, RippleSimulator, Seed, StageObserver};
use tracing::{debug, warn};

use crate::Shortfall;

/// What the chain produced: the last stage's arrivals and every stage that
/// fell short.
#[derive(Debug, Clone, Default)]
pub struct ChainOutcome {
    pub arrivals:   Vec<ArrivalRecord>,
    pub shortfalls: Vec<Shortfall>,
    /// Stages actually simulated.
    pub stages_run: usize,
}

/// Chains stages so each stage's arrivals seed the next one.
///
/// Stage `i` spreads from the arrivals at group `i - 1` toward group `i`.
/// Seeds keep their arrival tick and overshoot radius, so the clock and the
/// wavefront position carry over between stages.  A stage that ends short
/// is recorded and the chain continues with whatever arrived; a stage with
/// no arrivals at all ends the chain.
pub struct StageChainer<'s, 'g> {
    sim: &'s RippleSimulator<'g>,
}

impl<'s, 'g> StageChainer<'s, 'g> {
    pub fn new(sim: &'s RippleSimulator<'g>) -> Self {
        Self { sim }
    }

    /// Run every stage.  `groups` must hold at least two groups; the caller
    /// validates them.
    pub fn run<O: StageObserver>(
        &self,
        groups:   &[Vec<NodeId>],
        observer: &mut O,
    ) -> RippleResult<ChainOutcome> {
        let mut out = ChainOutcome::default();
        let Some((origin, rest)) = groups.split_first() else {
            return Ok(out);
        };

        let mut seeds: Vec<Seed> = origin.iter().copied().map(Seed::origin).collect();

        for (offset, destinations) in rest.iter().enumerate() {
            let group = offset + 1;
            let outcome = self.sim.run_stage(destinations, std::mem::take(&mut seeds), observer)?;
            out.stages_run += 1;

            debug!(
                group,
                arrivals = outcome.arrivals.len(),
                final_tick = %outcome.final_tick,
                "waypoint group reached"
            );

            if let Some(ex) = outcome.exhausted {
                warn!(
                    group,
                    tick = %ex.tick,
                    unmet = ex.unmet.len(),
                    "waypoint group ran out of paths"
                );
                out.shortfalls.push(Shortfall { group, tick: ex.tick, unmet: ex.unmet });
            }

            if group == groups.len() - 1 {
                out.arrivals = outcome.arrivals;
            } else {
                seeds = outcome.arrivals.into_iter().map(Seed::from).collect();
                if seeds.is_empty() {
                    break;
                }
            }
        }

        Ok(out)
    }
}
