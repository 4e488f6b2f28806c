//! `kspt-core` — foundational types for the `kspt` k shortest path tour solver.
//!
//! This crate is a dependency of every other `kspt-*` crate.  It has no
//! `kspt-*` dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`, `RippleId`                        |
//! | [`time`]   | `Tick`                                                |
//! | [`config`] | `SolverConfig`, `CancelToken`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CancelToken, SolverConfig};
pub use ids::{EdgeId, NodeId, RippleId};
pub use time::Tick;
