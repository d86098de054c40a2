// src/generator/carve.rs
// Corridor carving and static patterns.

use log::trace;
use rand::Rng;

use crate::grid::{Direction, Grid, Position, TileKind};

/// Carves Path tiles rightward from `from` while the cells are Wall.
///
/// Stops at the last column, at the first non-Wall cell or when `from` is out
/// of bounds. The result is a single straight run; at most `cols` cells are
/// carved. Returns the number of cells converted.
pub fn carve_corridor(grid: &mut Grid, from: Position) -> usize {
    let limit = grid.cols().max(0) as usize;
    let mut pos = from;
    let mut carved = 0;

    while carved < limit {
        if grid.get(pos) != Some(TileKind::Wall) {
            break;
        }
        grid.set(pos, TileKind::Path);
        carved += 1;
        if pos.col >= grid.cols() - 1 {
            break;
        }
        pos = pos.offset(Direction::Right);
    }
    carved
}

/// Walks from the middle of the top row to the bottom row, drifting one
/// column left or right at random.
///
/// Every visited cell turns Black; the cell on the bottom row turns Red. A
/// lateral move is skipped when the neighbour is off the grid or already
/// Black. Returns the visited cells in order, one per row.
pub fn carve_random_walk<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Vec<Position> {
    let mut walk = Vec::with_capacity(grid.rows().max(0) as usize);
    if grid.rows() <= 0 || grid.cols() <= 0 {
        return walk;
    }

    let mut pos = Position::new(0, grid.cols() / 2);
    grid.set(pos, TileKind::Black);
    walk.push(pos);

    while pos.row + 1 < grid.rows() {
        let drift = match rng.random_range(0..3) {
            0 => Some(Direction::Left),
            2 => Some(Direction::Right),
            _ => None,
        };
        if let Some(dir) = drift {
            let side = pos.offset(dir);
            if grid.contains(side) && grid.get(side) != Some(TileKind::Black) {
                trace!("Walk drifts {} at row {}", dir.name(), pos.row);
                pos = side;
            }
        }
        pos = pos.offset(Direction::Down);
        grid.set(pos, TileKind::Black);
        walk.push(pos);
    }

    grid.set(pos, TileKind::Red);
    walk
}

/// Alternating Black/White cells, Black where `row + col` is even.
pub fn paint_checkerboard(grid: &mut Grid) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let kind = if (row + col) % 2 == 0 {
                TileKind::Black
            } else {
                TileKind::White
            };
            grid.set(Position::new(row, col), kind);
        }
    }
}
