//! Reachability analysis over the maze grid.
//!
//! This module contains the depth-first traversal that decides whether the start cell can reach
//! the end cell through non-blocking cells. The traversal uses an explicit worklist instead of
//! recursion, so large grids cannot exhaust the call stack, and its visited set is created fresh
//! for every query so no state leaks between calls.

use std::collections::HashSet;

use crate::{grid::Grid, position::Position};

/// Decides whether the end cell is reachable from the given start position.
///
/// This function runs an iterative depth-first search over the grid: from each popped cell it
/// succeeds immediately on the end marker, prunes walls and traps, and otherwise expands the
/// in-bounds orthogonal neighbors in the fixed order left, right, up, down. Each cell is visited
/// at most once, giving a worst case of one visit per grid cell.
pub(crate) fn is_reachable(grid: &Grid, start: Position) -> bool {
    let mut visited: HashSet<Position> = HashSet::new();
    let mut worklist = vec![start];

    while let Some(position) = worklist.pop() {
        if !visited.insert(position) {
            continue;
        }

        let Some(cell) = grid.cell(position) else {
            continue;
        };

        if cell.cell_type().is_end() {
            return true;
        }
        if cell.cell_type().is_blocking() {
            continue;
        }

        for neighbor in grid.neighbors(position) {
            if !visited.contains(&neighbor) {
                worklist.push(neighbor);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use crate::cell::CellType;

    use super::*;

    #[test]
    fn test_isolated_start_and_end_are_unreachable() {
        // A 4x4 all-wall grid with a start and end that no path connects.
        let mut grid = Grid::new(4, 4);
        grid.set_type_at(Position::new(0, 1), CellType::Start);
        grid.set_type_at(Position::new(3, 2), CellType::End);

        assert!(!is_reachable(&grid, Position::new(0, 1)));
    }

    #[test]
    fn test_adjacent_start_and_end_are_reachable() {
        let mut grid = Grid::new(4, 4);
        grid.set_type_at(Position::new(1, 1), CellType::Start);
        grid.set_type_at(Position::new(2, 1), CellType::End);

        assert!(is_reachable(&grid, Position::new(1, 1)));
    }

    #[test]
    fn test_corridor_connects_start_to_end() {
        let mut grid = Grid::new(6, 4);
        grid.set_type_at(Position::new(0, 1), CellType::Start);
        for x in 1..5 {
            grid.set_type_at(Position::new(x, 1), CellType::Path);
        }
        grid.set_type_at(Position::new(5, 1), CellType::End);

        assert!(is_reachable(&grid, Position::new(0, 1)));
    }

    #[test]
    fn test_trap_blocks_the_only_corridor() {
        let mut grid = Grid::new(6, 4);
        grid.set_type_at(Position::new(0, 1), CellType::Start);
        for x in 1..5 {
            grid.set_type_at(Position::new(x, 1), CellType::Path);
        }
        grid.set_type_at(Position::new(3, 1), CellType::Trap);
        grid.set_type_at(Position::new(5, 1), CellType::End);

        assert!(!is_reachable(&grid, Position::new(0, 1)));
    }

    #[test]
    fn test_reward_cells_are_traversable() {
        let mut grid = Grid::new(5, 3);
        grid.set_type_at(Position::new(0, 1), CellType::Start);
        grid.set_type_at(Position::new(1, 1), CellType::Path);
        grid.set_type_at(Position::new(2, 1), CellType::Reward);
        grid.set_type_at(Position::new(3, 1), CellType::Path);
        grid.set_type_at(Position::new(4, 1), CellType::End);

        assert!(is_reachable(&grid, Position::new(0, 1)));
    }

    #[test]
    fn test_repeated_queries_return_the_same_answer() {
        // The visited set is scoped to one call, so querying twice must not change the result.
        let mut grid = Grid::new(4, 4);
        grid.set_type_at(Position::new(1, 1), CellType::Start);
        grid.set_type_at(Position::new(2, 1), CellType::Path);
        grid.set_type_at(Position::new(2, 2), CellType::End);

        assert!(is_reachable(&grid, Position::new(1, 1)));
        assert!(is_reachable(&grid, Position::new(1, 1)));

        let mut walled = Grid::new(4, 4);
        walled.set_type_at(Position::new(1, 1), CellType::Start);
        walled.set_type_at(Position::new(2, 2), CellType::End);

        assert!(!is_reachable(&walled, Position::new(1, 1)));
        assert!(!is_reachable(&walled, Position::new(1, 1)));
    }

    #[test]
    fn test_traversal_routes_around_a_wall() {
        // End sits behind a wall segment; the search must detour through the open row below.
        let mut grid = Grid::new(5, 5);
        grid.set_type_at(Position::new(0, 1), CellType::Start);
        grid.set_type_at(Position::new(1, 1), CellType::Path);
        grid.set_type_at(Position::new(1, 2), CellType::Path);
        grid.set_type_at(Position::new(1, 3), CellType::Path);
        grid.set_type_at(Position::new(2, 3), CellType::Path);
        grid.set_type_at(Position::new(3, 3), CellType::Path);
        grid.set_type_at(Position::new(3, 2), CellType::Path);
        grid.set_type_at(Position::new(3, 1), CellType::End);

        assert!(is_reachable(&grid, Position::new(0, 1)));
    }
}
