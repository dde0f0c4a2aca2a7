//! Owned 2D cell container with bounds-checked access.
//!
//! This module contains the `Grid` struct holding the maze's cells in a fixed-size row-major
//! layout. The generation passes borrow the grid mutably in sequence; everything else reads it
//! through checked accessors.

use color_eyre::eyre::{eyre, Result};

use crate::{
    cell::{Cell, CellType},
    position::Position,
};

/// Fixed-size 2D array of cells.
///
/// This structure owns one cell per integer coordinate in `[0,width) x [0,height)`. All cells are
/// created once at construction with the wall type and are mutated in place afterwards; the grid
/// is never resized.
pub struct Grid {
    /// Width of the grid in cells.
    ///
    /// This field holds the number of columns, fixed for the lifetime of the maze.
    width: usize,
    /// Height of the grid in cells.
    ///
    /// This field holds the number of rows, fixed for the lifetime of the maze.
    height: usize,
    /// Backing storage for the cells in row-major order.
    ///
    /// This field holds exactly `width * height` cells; the cell at `(x, y)` lives at index
    /// `y * width + x`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a new grid with every cell initialized to a wall.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Position::new(x, y)));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the width of the grid in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the grid in cells.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Computes the backing index for a position, if it is in bounds.
    fn index(&self, position: Position) -> Option<usize> {
        (position.x < self.width && position.y < self.height)
            .then(|| position.y * self.width + position.x)
    }

    /// Returns the cell at a position without failing on out-of-bounds coordinates.
    ///
    /// This accessor backs the traversal and generation code, which probe neighbor coordinates
    /// freely and treat anything outside the grid as absent.
    pub(crate) fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|idx| self.cells.get(idx))
    }

    /// Returns the type tag of the cell at a position, if it is in bounds.
    pub(crate) fn type_at(&self, position: Position) -> Option<CellType> {
        self.cell(position).map(Cell::cell_type)
    }

    /// Returns whether the cell at a position is in bounds and carries the given type.
    pub(crate) fn is_type(&self, position: Position, cell_type: CellType) -> bool {
        self.type_at(position) == Some(cell_type)
    }

    /// Returns the cell at the coordinate `(x, y)`.
    ///
    /// # Errors
    ///
    /// This function returns an error if `x` or `y` falls outside `[0,width)` or `[0,height)`
    /// respectively.
    pub fn get(&self, x: usize, y: usize) -> Result<&Cell> {
        self.cell(Position::new(x, y)).ok_or_else(|| {
            eyre!(
                "cell position ({x}, {y}) is outside the {}x{} grid",
                self.width,
                self.height
            )
        })
    }

    /// Rewrites the type tag of the cell at the coordinate `(x, y)`.
    ///
    /// No validation of legal transitions is performed; callers are responsible for semantic
    /// correctness.
    ///
    /// # Errors
    ///
    /// This function returns an error if `x` or `y` falls outside `[0,width)` or `[0,height)`
    /// respectively.
    pub fn set_type(&mut self, x: usize, y: usize, cell_type: CellType) -> Result<()> {
        let idx = self.index(Position::new(x, y)).ok_or_else(|| {
            eyre!(
                "cell position ({x}, {y}) is outside the {}x{} grid",
                self.width,
                self.height
            )
        })?;

        if let Some(cell) = self.cells.get_mut(idx) {
            cell.set_cell_type(cell_type);
        }

        Ok(())
    }

    /// Rewrites the type tag at a position, silently ignoring out-of-bounds coordinates.
    ///
    /// The generation passes only ever produce in-bounds positions, so the quiet variant keeps
    /// them free of error plumbing.
    pub(crate) fn set_type_at(&mut self, position: Position, cell_type: CellType) {
        if let Some(idx) = self.index(position) {
            if let Some(cell) = self.cells.get_mut(idx) {
                cell.set_cell_type(cell_type);
            }
        }
    }

    /// Returns the in-bounds orthogonal neighbors of a position.
    ///
    /// The neighbors are produced in the fixed order left, right, up, down; coordinates on the
    /// grid edge simply yield fewer entries.
    pub(crate) fn neighbors(&self, position: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);

        if position.x != 0 {
            neighbors.push(Position::new(position.x - 1, position.y));
        }
        if position.x != self.width - 1 {
            neighbors.push(Position::new(position.x + 1, position.y));
        }
        if position.y != 0 {
            neighbors.push(Position::new(position.x, position.y - 1));
        }
        if position.y != self.height - 1 {
            neighbors.push(Position::new(position.x, position.y + 1));
        }

        neighbors
    }
}
