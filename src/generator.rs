//! Randomized generation passes that carve the maze into the grid.
//!
//! This module contains the three mutating passes run at construction time: the frontier-growth
//! path generator that carves the initial skeleton, the room carver that overlays open rectangles,
//! and the boundary connectors that stitch the fixed start and end cells to the carved network.
//! Every pass borrows the grid exclusively and draws from an injected seedable generator so runs
//! can be reproduced in tests.

use rand::{rngs::StdRng, Rng as _};

use crate::{cell::CellType, grid::Grid, position::Position};

/// Carves a connected, loop-free skeleton of path cells into the interior of the grid.
///
/// This function implements a simplified randomized-Prim growth: it carves a uniformly random
/// interior seed cell, then repeatedly draws a candidate from a frontier list of interior
/// neighbors and carves it only when exactly one of its orthogonal neighbors is already a path,
/// which extends the network without closing a loop. Rejected candidates are discarded; the
/// frontier is deliberately not deduplicated, so cells queued several times act as a natural
/// weighting.
pub(crate) fn carve_skeleton(grid: &mut Grid, rng: &mut StdRng) {
    let seed = Position::new(
        rng.gen_range(1..grid.width() - 1),
        rng.gen_range(1..grid.height() - 1),
    );
    grid.set_type_at(seed, CellType::Path);

    let mut frontier = Vec::new();
    push_frontier_candidates(grid, seed, &mut frontier);

    while !frontier.is_empty() {
        let candidate = frontier.swap_remove(rng.gen_range(0..frontier.len()));

        if path_neighbor_count(grid, candidate) == 1 {
            grid.set_type_at(candidate, CellType::Path);
            push_frontier_candidates(grid, candidate, &mut frontier);
        }
    }
}

/// Pushes the interior orthogonal neighbors of a carved cell onto the frontier.
///
/// Neighbors that would leave the interior band `[1, width-2] x [1, height-2]` are skipped, which
/// keeps the skeleton off the outer wall ring.
fn push_frontier_candidates(grid: &Grid, position: Position, frontier: &mut Vec<Position>) {
    if position.x != 1 {
        frontier.push(Position::new(position.x - 1, position.y));
    }
    if position.x != grid.width() - 2 {
        frontier.push(Position::new(position.x + 1, position.y));
    }
    if position.y != 1 {
        frontier.push(Position::new(position.x, position.y - 1));
    }
    if position.y != grid.height() - 2 {
        frontier.push(Position::new(position.x, position.y + 1));
    }
}

/// Counts how many orthogonal neighbors of a position are already carved paths.
fn path_neighbor_count(grid: &Grid, position: Position) -> usize {
    grid.neighbors(position)
        .into_iter()
        .filter(|&neighbor| grid.is_type(neighbor, CellType::Path))
        .count()
}

/// Overlays open rectangular rooms onto the carved grid.
///
/// This function carves `num_rooms` axis-aligned rectangles with a uniformly random interior
/// anchor and side lengths drawn from one or two cells, redrawing any side that would push the
/// rectangle past the grid bound. Rooms may overlap each other and overwrite any prior cell type;
/// they only ever write paths, so connectivity already established by the skeleton is preserved.
pub(crate) fn add_rooms(grid: &mut Grid, num_rooms: usize, rng: &mut StdRng) {
    for _ in 0..num_rooms {
        let anchor = Position::new(
            rng.gen_range(1..grid.width() - 1),
            rng.gen_range(1..grid.height() - 1),
        );

        let mut room_width = room_extent(rng);
        while anchor.x + room_width >= grid.width() {
            room_width = room_extent(rng);
        }

        let mut room_height = room_extent(rng);
        while anchor.y + room_height >= grid.height() {
            room_height = room_extent(rng);
        }

        carve_room(grid, anchor, room_width, room_height);
    }
}

/// Draws a random room side length of one or two cells.
fn room_extent(rng: &mut StdRng) -> usize {
    rng.gen_range(1..=2)
}

/// Sets every cell of a rectangle to a path, starting from its top-left anchor.
fn carve_room(grid: &mut Grid, anchor: Position, width: usize, height: usize) {
    for row in 0..height {
        for col in 0..width {
            grid.set_type_at(
                Position::new(anchor.x + col, anchor.y + row),
                CellType::Path,
            );
        }
    }
}

/// Stitches the fixed start cell to the carved path network.
///
/// This function walks down column 1 from the top, carving wall cells to paths while both the
/// column-1 cell below and its column-2 diagonal neighbor are still walls. The walk stops at the
/// first pre-existing path cell it encounters, or at the bottom of the column when the skeleton
/// never came near the border. It is a local greedy repair and does not verify full reachability.
pub(crate) fn connect_start(grid: &mut Grid) {
    let mut row = 0;
    while row + 1 < grid.height()
        && grid.is_type(Position::new(1, row + 1), CellType::Wall)
        && grid.is_type(Position::new(2, row), CellType::Wall)
    {
        grid.set_type_at(Position::new(1, row + 1), CellType::Path);
        row += 1;
    }
}

/// Stitches the fixed end cell to the carved path network.
///
/// This function mirrors [`connect_start`] from the bottom-right corner: it walks left along row
/// `height-2`, carving wall cells to paths while both the row `height-2` cell and its row
/// `height-3` neighbor one column to the right are still walls, stopping at the first carved cell
/// or at the end of the row.
pub(crate) fn connect_end(grid: &mut Grid) {
    let width = grid.width();
    let height = grid.height();
    if height < 3 {
        return;
    }

    let mut step = 0;
    while width >= step + 2
        && grid.is_type(Position::new(width - 1 - step, height - 3), CellType::Wall)
        && grid.is_type(Position::new(width - 2 - step, height - 2), CellType::Wall)
    {
        grid.set_type_at(Position::new(width - 2 - step, height - 2), CellType::Path);
        step += 1;
    }
}
