//! Coordinate value type for addressing cells in the maze grid.

/// Immutable 2D integer coordinate.
///
/// This structure represents a single coordinate inside the maze grid. Positions compare and hash
/// by value, which lets traversal code track visited coordinates in a set without touching the
/// cells themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate of the position.
    ///
    /// This field holds the column index, counted from the left edge of the grid starting at zero.
    pub x: usize,
    /// Vertical coordinate of the position.
    ///
    /// This field holds the row index, counted from the top edge of the grid starting at zero.
    pub y: usize,
}

impl Position {
    /// Creates a new position from its two coordinates.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_position_equality_by_value() {
        assert_eq!(Position::new(3, 7), Position::new(3, 7));
        assert_ne!(Position::new(3, 7), Position::new(7, 3));
    }

    #[test]
    fn test_position_hashes_by_value() {
        let mut set = HashSet::new();
        assert!(set.insert(Position::new(1, 2)));
        assert!(!set.insert(Position::new(1, 2)));
        assert!(set.insert(Position::new(2, 1)));
    }

    #[test]
    fn test_position_copy_semantics() {
        let original = Position::new(4, 5);
        let copied = original;

        assert_eq!(original, copied);
        assert_eq!(original.x, 4);
        assert_eq!(original.y, 5);
    }
}
