//! Named default constants consumed by the binary front-end.
//!
//! These mirror the configuration an embedding game layer would supply: the default maze shape
//! and the fixed start coordinate. The end coordinate is not configured; it is always derived as
//! `(width - 1, height - 2)` at construction.

/// Default width of a generated maze in cells.
pub const DEFAULT_MAZE_WIDTH: usize = 10;

/// Default height of a generated maze in cells.
pub const DEFAULT_MAZE_HEIGHT: usize = 10;

/// Default number of open rooms carved into a generated maze.
pub const DEFAULT_MAZE_ROOMS: usize = 2;

/// Fixed horizontal coordinate of the start cell.
pub const START_X: usize = 0;

/// Fixed vertical coordinate of the start cell.
pub const START_Y: usize = 1;
