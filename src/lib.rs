//! Maze fabric: a randomly generated 2D grid of typed cells.
//!
//! This crate contains the algorithmic core of a maze game: grid topology, randomized
//! frontier-growth carving, room overlays, boundary repair for the fixed start and end cells, a
//! reachability check, and a flat string rendering of the grid. Everything a game layer needs is
//! reachable through [`Maze`]; the rest of such a game (windows, input, scoring) is out of scope
//! and expected to live in the embedding application.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The clap dependency is only used in the binary crate."
)]

pub mod cell;
pub mod config;
mod generator;
pub mod grid;
pub mod maze;
pub mod position;
mod render;
mod solver;

pub use cell::{Cell, CellType};
pub use maze::Maze;
pub use position::Position;
