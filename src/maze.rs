//! Maze facade tying the generation passes, solver and renderer together.
//!
//! This module contains the `Maze` struct, the public surface consumed by an embedding game
//! layer. Construction allocates the grid and runs every generation phase in sequence; afterwards
//! the maze is immutable from the caller's perspective except through the documented mutators.

use std::fmt;

use color_eyre::eyre::{eyre, Result};
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    cell::{Cell, CellType},
    config, generator,
    grid::Grid,
    position::Position,
    render, solver,
};

/// A fully generated maze over a fixed-size grid of typed cells.
///
/// This structure owns the grid exclusively and tracks the start and end coordinates the solver
/// operates between. Construction carves a random connected skeleton, overlays open rooms, tags
/// the start and end cells, and repairs the border so both markers touch the path network.
pub struct Maze {
    /// Cell storage of the maze.
    ///
    /// This field holds the grid every component operates on. It is allocated once at
    /// construction and never resized.
    grid: Grid,
    /// Position of the start cell.
    ///
    /// This field holds the coordinate the reachability checker starts from. It is set at
    /// construction from the configured fixed offset and retargeted by [`Maze::set_start`].
    start: Position,
    /// Position of the end cell.
    ///
    /// This field holds the coordinate of the end marker, derived at construction as
    /// `(width - 1, height - 2)` and retargeted by [`Maze::set_end`].
    end: Position,
}

impl Maze {
    /// Builds and fully generates a maze with entropy-seeded randomness.
    ///
    /// The shape class is deterministic while the content is not: every call produces a maze with
    /// the same start and end placement but a freshly randomized path network.
    ///
    /// # Errors
    ///
    /// This function returns an error if either dimension is smaller than four cells, which is
    /// the minimum the generation passes can operate on.
    pub fn new(width: usize, height: usize, num_rooms: usize) -> Result<Self> {
        Self::generate(width, height, num_rooms, StdRng::from_entropy())
    }

    /// Builds and fully generates a maze from an explicit seed.
    ///
    /// Two mazes built with the same dimensions, room count and seed are identical, which makes
    /// generation reproducible for tests and debugging sessions.
    ///
    /// # Errors
    ///
    /// This function returns an error if either dimension is smaller than four cells.
    pub fn with_seed(width: usize, height: usize, num_rooms: usize, seed: u64) -> Result<Self> {
        Self::generate(width, height, num_rooms, StdRng::seed_from_u64(seed))
    }

    /// Runs the full generation pipeline over a freshly allocated grid.
    ///
    /// The phases run in the fixed order skeleton, rooms, start/end tagging, boundary repair;
    /// each borrows the grid exclusively in turn.
    fn generate(width: usize, height: usize, num_rooms: usize, mut rng: StdRng) -> Result<Self> {
        if width < 4 || height < 4 {
            return Err(eyre!(
                "maze dimensions must be at least 4x4 cells, got {width}x{height}"
            ));
        }

        let mut grid = Grid::new(width, height);

        generator::carve_skeleton(&mut grid, &mut rng);
        generator::add_rooms(&mut grid, num_rooms, &mut rng);

        let start = Position::new(config::START_X, config::START_Y);
        let end = Position::new(width - 1, height - 2);
        grid.set_type_at(start, CellType::Start);
        grid.set_type_at(end, CellType::End);

        generator::connect_start(&mut grid);
        generator::connect_end(&mut grid);

        Ok(Self { grid, start, end })
    }

    /// Returns the width of the maze in cells.
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the position of the start cell.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the position of the end cell.
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns the cell at the coordinate `(x, y)`.
    ///
    /// # Errors
    ///
    /// This function returns an error if the coordinate is out of bounds.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<&Cell> {
        self.grid.get(x, y)
    }

    /// Returns the cell at the given position.
    ///
    /// # Errors
    ///
    /// This function returns an error if the position is out of bounds.
    pub fn cell_at(&self, position: Position) -> Result<&Cell> {
        self.grid.get(position.x, position.y)
    }

    /// Returns whether the cell at the given position is a wall.
    ///
    /// # Errors
    ///
    /// This function returns an error if the position is out of bounds.
    pub fn is_wall(&self, position: Position) -> Result<bool> {
        Ok(self.cell_at(position)?.cell_type().is_wall())
    }

    /// Returns whether the cell at the given position is a trap.
    ///
    /// # Errors
    ///
    /// This function returns an error if the position is out of bounds.
    pub fn is_trap(&self, position: Position) -> Result<bool> {
        Ok(self.cell_at(position)?.cell_type().is_trap())
    }

    /// Overwrites the cell at `(x, y)` with the start marker and retargets the solver.
    ///
    /// The previous start cell keeps its marker; as in [`Grid::set_type`], no transition
    /// validation is performed and callers relocating the start are expected to clean up the old
    /// cell themselves.
    ///
    /// # Errors
    ///
    /// This function returns an error if the coordinate is out of bounds.
    pub fn set_start(&mut self, x: usize, y: usize) -> Result<()> {
        self.grid.set_type(x, y, CellType::Start)?;
        self.start = Position::new(x, y);

        Ok(())
    }

    /// Overwrites the cell at `(x, y)` with the end marker and retargets the solver.
    ///
    /// # Errors
    ///
    /// This function returns an error if the coordinate is out of bounds.
    pub fn set_end(&mut self, x: usize, y: usize) -> Result<()> {
        self.grid.set_type(x, y, CellType::End)?;
        self.end = Position::new(x, y);

        Ok(())
    }

    /// Checks whether the end cell is reachable from the start cell.
    ///
    /// This function runs the reachability checker with a fresh visited set on every call, so
    /// repeated queries on an unmutated maze always return the same answer and never mutate the
    /// grid.
    pub fn is_solvable(&self) -> bool {
        solver::is_reachable(&self.grid, self.start)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&render::render(&self.grid))
    }
}
