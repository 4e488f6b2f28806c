//! `kspt-ripple` — the ripple-spreading simulator behind the kspt tour solver.
//!
//! # Two-phase tick loop
//!
//! ```text
//! until every destination node has k arrivals (or nothing is left to spread):
//!   ① Grow      — radius += v for every active ripple.
//!   ② Snapshot  — propose a ripple at each neighbor whose edge window
//!                 [L, L + v) contains the radius and whose Ω < k
//!                 (parallel with the `parallel` feature).
//!   ③ Seeds     — inject pending seeds whose start tick is now.
//!   ④ Apply     — per node: sort proposals by radius (descending), create
//!                 the first k − Ω of them, record destination arrivals.
//!   ⑤ Deactivate — drop ripples that cannot cross any further edge.
//! ```
//!
//! All proposals of a tick are computed from the state fixed at the start of
//! that tick, so a ripple created in ④ never spreads before the next tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the snapshot phase on Rayon's thread pool.        |
//! | `fx-hash`  | FxHash for the per-tick path dedup set.                |
//! | `serde`    | Derives on `Seed` and `ArrivalRecord`.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use kspt_graph::propagation_speed;
//! use kspt_ripple::{NoopObserver, RippleSimulator, Seed};
//!
//! let speed = propagation_speed(&graph)?;
//! let sim = RippleSimulator::new(&graph, speed, 2)?;
//! let outcome = sim.run_stage(&[NodeId(3)], vec![Seed::origin(NodeId(0))], &mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod outcome;
pub mod ripple;
pub mod seed;
pub mod stage;


pub use error::{RippleError, RippleResult};
pub use observer::{NoopObserver, StageObserver, StageView};
pub use outcome::{ArrivalRecord, Exhaustion, NodeShortfall, StageOutcome};
pub use ripple::{RippleRef, RippleStore};
pub use seed::{Seed, SeedQueue};
pub use stage::RippleSimulator;
