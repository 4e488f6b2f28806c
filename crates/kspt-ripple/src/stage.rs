//! The `RippleSimulator` and its tick loop.

use kspt_core::{CancelToken, NodeId, RippleId, Tick};
use kspt_graph::Graph;
use tracing::{debug, trace};

use crate::{
    ArrivalRecord, Exhaustion, NodeShortfall, RippleError, RippleResult, RippleStore, Seed,
    SeedQueue, StageObserver, StageOutcome, StageView,
};

#[cfg(feature = "fx-hash")]
type PathSet = rustc_hash::FxHashSet<Vec<NodeId>>;
#[cfg(not(feature = "fx-hash"))]
type PathSet = std::collections::HashSet<Vec<NodeId>>;

#[cfg(feature = "fx-hash")]
type NodeMap<V> = rustc_hash::FxHashMap<NodeId, V>;
#[cfg(not(feature = "fx-hash"))]
type NodeMap<V> = std::collections::HashMap<NodeId, V>;

// ── Candidate ripples ─────────────────────────────────────────────────────────

/// A ripple proposed during the snapshot phase (or a seed due this tick),
/// not yet created.
#[derive(Debug)]
struct Candidate {
    node:   NodeId,
    /// Overshoot past the crossed edge, or the seed's radius.
    radius: f64,
    path:   Vec<NodeId>,
}

/// This tick's candidates, deduplicated by path and bucketed by node in order
/// of first appearance.
#[derive(Default)]
struct Proposals {
    seen:   PathSet,
    slots:  NodeMap<usize>,
    groups: Vec<(NodeId, Vec<Candidate>)>,
}

impl Proposals {
    /// Accept `candidate` unless its path was already proposed this tick.
    fn offer(&mut self, candidate: Candidate) -> bool {
        if self.seen.contains(&candidate.path) {
            return false;
        }
        self.seen.insert(candidate.path.clone());
        let groups = &mut self.groups;
        let slot = *self.slots.entry(candidate.node).or_insert_with(|| {
            groups.push((candidate.node, Vec::new()));
            groups.len() - 1
        });
        self.groups[slot].1.push(candidate);
        true
    }
}

// ── Per-stage state ───────────────────────────────────────────────────────────

/// Everything scoped to one stage: ripples, the active list, Ω and arrivals.
/// Built fresh by every `run_stage` call and dropped when it returns.
struct StageState {
    store:        RippleStore,
    active:       Vec<RippleId>,
    /// Ω — ripples created per node this stage.  Never decreases, never > k.
    omega:        Vec<usize>,
    /// Unique destination nodes in group order.
    destinations: Vec<NodeId>,
    /// `NodeId` → index into `destinations` / `arrivals`.
    dest_slot:    Vec<Option<usize>>,
    arrivals:     Vec<Vec<ArrivalRecord>>,
}

impl StageState {
    fn new(node_count: usize, group: &[NodeId]) -> Self {
        let mut destinations = Vec::with_capacity(group.len());
        let mut dest_slot = vec![None; node_count];
        for &node in group {
            if dest_slot[node.index()].is_none() {
                dest_slot[node.index()] = Some(destinations.len());
                destinations.push(node);
            }
        }
        let arrivals = vec![Vec::new(); destinations.len()];
        Self {
            store: RippleStore::new(),
            active: Vec::new(),
            omega: vec![0; node_count],
            destinations,
            dest_slot,
            arrivals,
        }
    }

    fn destinations_satisfied(&self, k: usize) -> bool {
        self.destinations.iter().all(|n| self.omega[n.index()] >= k)
    }

    fn exhaustion(&self, tick: Tick, k: usize) -> Exhaustion {
        let unmet = self
            .destinations
            .iter()
            .filter(|n| self.omega[n.index()] < k)
            .map(|&node| NodeShortfall { node, found: self.omega[node.index()] })
            .collect();
        Exhaustion { tick, unmet }
    }

    /// Create one ripple and record the arrival if it lands on a destination.
    fn spawn<O: StageObserver>(&mut self, now: Tick, candidate: Candidate, observer: &mut O) {
        let node = candidate.node;
        let id = self.store.spawn(node, candidate.radius, candidate.path, now);
        self.active.push(id);
        self.omega[node.index()] += 1;
        observer.on_ripple_created(now, self.store.get(id));

        if let Some(slot) = self.dest_slot[node.index()] {
            let record = ArrivalRecord {
                node,
                radius: candidate.radius,
                tick:   now,
                path:   self.store.path[id.index()].clone(),
            };
            observer.on_arrival(&record);
            self.arrivals[slot].push(record);
        }
    }

    /// Drop ripples that can no longer cross any edge: every neighbor is
    /// either already inside the radius or at capacity.
    fn deactivate(&mut self, graph: &Graph, k: usize) {
        let (store, omega) = (&self.store, &self.omega);
        self.active.retain(|&id| {
            let radius = store.radius[id.index()];
            graph
                .neighbors(store.epicenter[id.index()])
                .any(|(n, len)| radius < len && omega[n.index()] < k)
        });
    }

    fn view(&self, tick: Tick, k: usize) -> StageView<'_> {
        StageView {
            tick,
            k,
            store:  &self.store,
            active: &self.active,
            omega:  &self.omega,
        }
    }
}

// ── RippleSimulator ───────────────────────────────────────────────────────────

/// Discrete-time ripple-spreading engine.
///
/// One simulator is built per solve and shared by every stage: it holds only
/// read-only inputs (graph, speed, k, limits).  All mutable state lives in a
/// per-call `StageState`, so stages are independent and can be tested in
/// isolation.
///
/// Each tick runs five steps:
///
/// 1. **Grow** — every active ripple's radius increases by `v`.
/// 2. **Snapshot** — each active ripple proposes a ripple at every neighbor
///    whose edge length `L` satisfies `L ≤ radius < L + v` and whose Ω is
///    below `k` (optionally parallel with the `parallel` feature).
/// 3. **Seeds** — pending seeds due this tick are proposed at their origin.
///    Proposals with a path already proposed this tick are dropped.
/// 4. **Apply** (sequential) — per node, proposals are sorted by radius
///    descending and the first `k − Ω[node]` become ripples.
/// 5. **Deactivate** — ripples with no possible future crossing leave the
///    active list.
pub struct RippleSimulator<'g> {
    graph:     &'g Graph,
    speed:     f64,
    k:         usize,
    max_ticks: Option<u64>,
    cancel:    Option<CancelToken>,
}

impl<'g> RippleSimulator<'g> {
    /// Create a simulator for `graph` with propagation speed `speed`.
    ///
    /// # Errors
    ///
    /// [`RippleError::InvalidInput`] if `k == 0` or `speed` is not a positive
    /// finite number.
    pub fn new(graph: &'g Graph, speed: f64, k: usize) -> RippleResult<Self> {
        if k == 0 {
            return Err(RippleError::InvalidInput("k must be at least 1".into()));
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(RippleError::InvalidInput(format!(
                "propagation speed {speed} is not a positive finite number"
            )));
        }
        Ok(Self { graph, speed, k, max_ticks: None, cancel: None })
    }

    /// Fail a stage with [`RippleError::TickLimit`] once it has run `limit`
    /// ticks.
    pub fn with_max_ticks(mut self, limit: Option<u64>) -> Self {
        self.max_ticks = limit;
        self
    }

    /// Check `token` once per tick and stop with [`RippleError::Cancelled`].
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn k(&self) -> usize {
        self.k
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one stage: spread ripples from `seeds` until every node of
    /// `destinations` has seen `k` ripples, or the wavefront is exhausted.
    ///
    /// Exhaustion is not an error: the outcome carries the arrivals found so
    /// far and [`StageOutcome::exhausted`] describes the shortfall.
    ///
    /// # Errors
    ///
    /// - [`RippleError::InvalidInput`] for an empty destination group, no
    ///   seeds, unknown node ids, or a malformed seed.
    /// - [`RippleError::Cancelled`] / [`RippleError::TickLimit`] when the
    ///   configured limits stop the stage.
    pub fn run_stage<O: StageObserver>(
        &self,
        destinations: &[NodeId],
        seeds:        Vec<Seed>,
        observer:     &mut O,
    ) -> RippleResult<StageOutcome> {
        self.validate(destinations, &seeds)?;

        let mut state   = StageState::new(self.graph.node_count(), destinations);
        let mut pending = SeedQueue::from_seeds(seeds);
        let start_tick  = pending.next_tick().unwrap_or_default();
        let mut now     = start_tick;
        let mut last    = start_tick;

        debug!(
            start = %start_tick,
            seeds = pending.len(),
            destinations = state.destinations.len(),
            k = self.k,
            "stage started"
        );
        observer.on_stage_start(start_tick, pending.len());

        let exhausted = loop {
            if state.destinations_satisfied(self.k) {
                break None;
            }
            if state.active.is_empty() {
                // Nothing spreads until the next seed; skip the idle ticks.
                match pending.next_tick() {
                    Some(next) => now = now.max(next),
                    None       => break Some(state.exhaustion(now, self.k)),
                }
            }
            if let Some(token) = &self.cancel {
                if token.is_cancelled() {
                    return Err(RippleError::Cancelled { tick: now });
                }
            }
            if let Some(limit) = self.max_ticks {
                if now.since(start_tick) >= limit {
                    return Err(RippleError::TickLimit { limit, tick: now });
                }
            }

            observer.on_tick_start(now);
            let created = self.process_tick(now, &mut state, &mut pending, observer);
            trace!(tick = %now, created, active = state.active.len(), "tick processed");
            observer.on_tick_end(state.view(now, self.k));

            last = now;
            now = now.next();
        };

        let outcome = StageOutcome {
            arrivals:        state.arrivals.into_iter().flatten().collect(),
            start_tick,
            final_tick:      last,
            ripples_created: state.store.len(),
            exhausted,
        };
        debug!(
            final_tick = %outcome.final_tick,
            arrivals = outcome.arrivals.len(),
            ripples = outcome.ripples_created,
            complete = outcome.is_complete(),
            "stage finished"
        );
        observer.on_stage_end(&outcome);
        Ok(outcome)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: StageObserver>(
        &self,
        now:      Tick,
        state:    &mut StageState,
        pending:  &mut SeedQueue,
        observer: &mut O,
    ) -> usize {
        // ── Grow ──────────────────────────────────────────────────────────
        for &id in &state.active {
            state.store.radius[id.index()] += self.speed;
        }

        // ── Snapshot: propose crossings from state fixed at tick start ────
        let mut proposals = Proposals::default();
        for candidate in self.collect_crossings(state) {
            proposals.offer(candidate);
        }

        // ── Seeds due this tick ───────────────────────────────────────────
        if let Some(seeds) = pending.drain_tick(now) {
            for seed in seeds {
                if state.omega[seed.origin.index()] < self.k {
                    proposals.offer(Candidate {
                        node:   seed.origin,
                        radius: seed.radius,
                        path:   seed.path,
                    });
                }
            }
        }

        // ── Apply: per node, largest radius first, up to k − Ω ───────────
        //
        // Every proposal was made while Ω[node] < k and each node appears in
        // exactly one group, so `room` is at least 1 here.
        let mut created = 0;
        for (node, mut group) in proposals.groups {
            group.sort_by(|a, b| b.radius.total_cmp(&a.radius));
            let room = self.k - state.omega[node.index()];
            group.truncate(room);
            created += group.len();
            for candidate in group {
                state.spawn(now, candidate, observer);
            }
        }

        // ── Deactivate ────────────────────────────────────────────────────
        state.deactivate(self.graph, self.k);
        created
    }

    /// Crossings proposed by every active ripple, in active-list order.
    fn collect_crossings(&self, state: &StageState) -> Vec<Candidate> {
        #[cfg(not(feature = "parallel"))]
        {
            state
                .active
                .iter()
                .flat_map(|&id| self.crossings_from(id, &state.store, &state.omega))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Collect per-ripple vectors first so the merged order matches
            // the sequential build exactly.
            let per_ripple: Vec<Vec<Candidate>> = state
                .active
                .par_iter()
                .map(|&id| self.crossings_from(id, &state.store, &state.omega))
                .collect();
            per_ripple.into_iter().flatten().collect()
        }
    }

    /// Edges of `id`'s epicenter whose arrival window `[L, L + v)` contains
    /// the ripple's current radius, restricted to neighbors below capacity.
    fn crossings_from(&self, id: RippleId, store: &RippleStore, omega: &[usize]) -> Vec<Candidate> {
        let ripple = store.get(id);
        let v = self.speed;
        self.graph
            .neighbors(ripple.epicenter)
            .filter(|&(n, len)| {
                omega[n.index()] < self.k && len <= ripple.radius && ripple.radius < len + v
            })
            .map(|(n, len)| {
                let mut path = Vec::with_capacity(ripple.path.len() + 1);
                path.extend_from_slice(ripple.path);
                path.push(n);
                Candidate { node: n, radius: ripple.radius - len, path }
            })
            .collect()
    }

    // ── Validation ────────────────────────────────────────────────────────

    fn validate(&self, destinations: &[NodeId], seeds: &[Seed]) -> RippleResult<()> {
        if destinations.is_empty() {
            return Err(RippleError::InvalidInput("destination group is empty".into()));
        }
        if let Some(node) = destinations.iter().find(|n| !self.graph.contains(**n)) {
            return Err(RippleError::InvalidInput(format!(
                "destination {node} is not in the graph"
            )));
        }
        if seeds.is_empty() {
            return Err(RippleError::InvalidInput("stage has no seeds".into()));
        }
        for seed in seeds {
            if !self.graph.contains(seed.origin) {
                return Err(RippleError::InvalidInput(format!(
                    "seed origin {} is not in the graph",
                    seed.origin
                )));
            }
            if seed.path.last() != Some(&seed.origin) {
                return Err(RippleError::InvalidInput(format!(
                    "seed path must end at its origin {}",
                    seed.origin
                )));
            }
            if !(seed.radius.is_finite() && seed.radius >= 0.0) {
                return Err(RippleError::InvalidInput(format!(
                    "seed at {} has invalid radius {}",
                    seed.origin, seed.radius
                )));
            }
        }
        Ok(())
    }
}
