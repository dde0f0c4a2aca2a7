//! Flat character projection of the maze grid.

use crate::{grid::Grid, position::Position};

/// Renders the grid as a flat row-major character string.
///
/// This function maps every cell to its single-character symbol and concatenates them row by row,
/// producing a string of exactly `width * height` characters. It is a pure projection of the
/// current grid state with no side effects.
pub(crate) fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.width() * grid.height());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if let Some(cell) = grid.cell(Position::new(x, y)) {
                out.push(cell.cell_type().symbol());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::cell::CellType;

    use super::*;

    #[test]
    fn test_render_length_matches_grid_area() {
        let grid = Grid::new(7, 5);
        assert_eq!(render(&grid).len(), 35);
    }

    #[test]
    fn test_render_all_wall_grid() {
        let grid = Grid::new(3, 2);
        assert_eq!(render(&grid), "######");
    }

    #[test]
    fn test_render_is_row_major() {
        let mut grid = Grid::new(3, 3);
        grid.set_type_at(Position::new(1, 0), CellType::Start);
        grid.set_type_at(Position::new(0, 1), CellType::Path);
        grid.set_type_at(Position::new(2, 1), CellType::Trap);
        grid.set_type_at(Position::new(1, 2), CellType::End);

        assert_eq!(render(&grid), "#S#_#T#E#");
    }

    #[test]
    fn test_render_covers_every_symbol() {
        let mut grid = Grid::new(6, 1);
        grid.set_type_at(Position::new(1, 0), CellType::Path);
        grid.set_type_at(Position::new(2, 0), CellType::Start);
        grid.set_type_at(Position::new(3, 0), CellType::End);
        grid.set_type_at(Position::new(4, 0), CellType::Reward);
        grid.set_type_at(Position::new(5, 0), CellType::Trap);

        assert_eq!(render(&grid), "#_SERT");
    }

    #[test]
    fn test_render_is_stable_for_fixed_state() {
        let mut grid = Grid::new(4, 4);
        grid.set_type_at(Position::new(2, 2), CellType::Path);

        assert_eq!(render(&grid), render(&grid));
    }
}
