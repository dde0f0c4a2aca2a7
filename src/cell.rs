//! Cell and cell type definitions for the maze grid.
//!
//! This module contains the closed set of cell variants the maze is built from, together with the
//! grid node type that binds a variant to a fixed coordinate.

use crate::position::Position;

/// Closed set of cell variants making up the maze.
///
/// This enumeration holds every kind of cell the maze can contain. The generator only ever
/// produces walls, paths and the start and end markers; traps and rewards exist for gameplay
/// systems that decorate the maze after generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellType {
    /// Impassable cell; the default state of every cell at construction.
    #[default]
    Wall,
    /// Traversable carved cell.
    Path,
    /// Traversable entry marker; exactly one instance exists after construction.
    Start,
    /// Traversable exit marker; exactly one instance exists after construction.
    End,
    /// Blocking gameplay marker, treated like a wall by the reachability checker.
    Trap,
    /// Traversable gameplay marker, never produced by the generator itself.
    Reward,
}

impl CellType {
    /// Returns whether this cell type is a wall.
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Returns whether this cell type is a trap.
    pub const fn is_trap(self) -> bool {
        matches!(self, Self::Trap)
    }

    /// Returns whether this cell type is the end marker.
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    /// Returns whether this cell type blocks traversal.
    ///
    /// Walls and traps cannot be moved through; every other variant is open to the reachability
    /// checker.
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Wall | Self::Trap)
    }

    /// Returns the character this cell type renders as.
    ///
    /// This function provides the flat-string projection alphabet: paths render as underscores,
    /// walls as hashes, and the start, end, reward and trap markers as their initial letter.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Path => '_',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Trap => 'T',
            Self::Reward => 'R',
        }
    }
}

/// A single grid node carrying a fixed coordinate and a mutable type tag.
///
/// This structure represents one cell of the maze. The position is fixed when the grid allocates
/// the cell and never changes afterwards; the type tag is rewritten in place by the generation
/// passes and by gameplay systems placing traps or rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Coordinate of the cell inside the grid.
    ///
    /// This field holds the position the cell was created at. It is immutable for the lifetime of
    /// the maze.
    position: Position,
    /// Current type tag of the cell.
    ///
    /// This field holds the cell's variant. It starts as [`CellType::Wall`] and is mutated through
    /// the grid's setters during generation.
    cell_type: CellType,
}

impl Cell {
    /// Creates a new wall cell at the given position.
    pub(crate) const fn new(position: Position) -> Self {
        Self {
            position,
            cell_type: CellType::Wall,
        }
    }

    /// Returns the fixed position of the cell.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the current type tag of the cell.
    pub const fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Rewrites the type tag of the cell.
    ///
    /// No transition validation is performed; callers are responsible for semantic correctness,
    /// such as not overwriting the start marker by accident.
    pub(crate) fn set_cell_type(&mut self, cell_type: CellType) {
        self.cell_type = cell_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_defaults_to_wall() {
        assert_eq!(CellType::default(), CellType::Wall);
    }

    #[test]
    fn test_cell_type_predicates() {
        assert!(CellType::Wall.is_wall());
        assert!(!CellType::Path.is_wall());
        assert!(CellType::Trap.is_trap());
        assert!(!CellType::Reward.is_trap());
        assert!(CellType::End.is_end());
        assert!(!CellType::Start.is_end());
    }

    #[test]
    fn test_cell_type_blocking_set() {
        assert!(CellType::Wall.is_blocking());
        assert!(CellType::Trap.is_blocking());
        assert!(!CellType::Path.is_blocking());
        assert!(!CellType::Start.is_blocking());
        assert!(!CellType::End.is_blocking());
        assert!(!CellType::Reward.is_blocking());
    }

    #[test]
    fn test_cell_type_symbols() {
        assert_eq!(CellType::Path.symbol(), '_');
        assert_eq!(CellType::Wall.symbol(), '#');
        assert_eq!(CellType::Start.symbol(), 'S');
        assert_eq!(CellType::End.symbol(), 'E');
        assert_eq!(CellType::Reward.symbol(), 'R');
        assert_eq!(CellType::Trap.symbol(), 'T');
    }

    #[test]
    fn test_cell_starts_as_wall_and_keeps_position() {
        let mut cell = Cell::new(Position::new(2, 3));

        assert_eq!(cell.cell_type(), CellType::Wall);
        assert_eq!(cell.position(), Position::new(2, 3));

        cell.set_cell_type(CellType::Path);
        assert_eq!(cell.cell_type(), CellType::Path);
        assert_eq!(cell.position(), Position::new(2, 3));
    }
}
