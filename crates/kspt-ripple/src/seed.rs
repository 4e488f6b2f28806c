//! Stage seeds and the pending-seed queue.
//!
//! A seed is a ripple that has not been injected yet: the first stage gets one
//! per node of the first waypoint group, later stages get the previous
//! stage's arrival records unchanged.  Seeds are injected at exactly their
//! start tick, so the queue is keyed by tick.

use std::collections::BTreeMap;

use kspt_core::{NodeId, Tick};

use crate::ArrivalRecord;

// ── Seed ──────────────────────────────────────────────────────────────────────

/// A ripple waiting to be injected at `origin` on `tick`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed {
    pub origin: NodeId,
    pub tick:   Tick,
    /// Initial radius of the ripple once injected.
    pub radius: f64,
    /// Path so far; its last node is `origin`.
    pub path:   Vec<NodeId>,
}

impl Seed {
    /// A fresh wavefront at `node`: tick 0, radius 0, path `[node]`.
    pub fn origin(node: NodeId) -> Self {
        Self {
            origin: node,
            tick:   Tick::ZERO,
            radius: 0.0,
            path:   vec![node],
        }
    }
}

impl From<ArrivalRecord> for Seed {
    /// An arrival in one stage is a start in the next; time and radius carry
    /// over unchanged.
    fn from(record: ArrivalRecord) -> Self {
        Self {
            origin: record.node,
            tick:   record.tick,
            radius: record.radius,
            path:   record.path,
        }
    }
}

// ── SeedQueue ─────────────────────────────────────────────────────────────────

/// Pending seeds ordered by start tick; seeds sharing a tick keep their
/// insertion order.
#[derive(Debug, Default)]
pub struct SeedQueue {
    inner: BTreeMap<Tick, Vec<Seed>>,
    /// Cached total seed count for O(1) `len()`.
    total: usize,
}

impl SeedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: impl IntoIterator<Item = Seed>) -> Self {
        let mut queue = Self::new();
        for seed in seeds {
            queue.push(seed);
        }
        queue
    }

    pub fn push(&mut self, seed: Seed) {
        self.inner.entry(seed.tick).or_default().push(seed);
        self.total += 1;
    }

    /// Remove and return all seeds starting at exactly `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Seed>> {
        let seeds = self.inner.remove(&tick)?;
        self.total -= seeds.len();
        Some(seeds)
    }

    /// The earliest start tick still pending, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
