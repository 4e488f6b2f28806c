//! `kspt-graph` — weighted graph, speed calibration, costing, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `Graph` (CSR adjacency), `GraphBuilder`                   |
//! | [`calibrate`] | `propagation_speed` — global minimum edge weight          |
//! | [`cost`]      | `path_length` — sum of edge weights along a path          |
//! | [`dijkstra`]  | `shortest_path`, `shortest_distance` (reference routing)  |
//! | [`loader`]    | `load_edges_csv`, `load_edges_reader`                     |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the id types.           |

pub mod calibrate;
pub mod cost;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;

#[cfg(test)]
mod tests;

pub use calibrate::propagation_speed;
pub use cost::path_length;
pub use dijkstra::{shortest_distance, shortest_path, ShortestPath};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use loader::{load_edges_csv, load_edges_reader};
