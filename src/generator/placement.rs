// src/generator/placement.rs

//! Border stamping, Start/End gate placement and obstacle scattering.

use log::{debug, warn};
use rand::Rng;

use crate::generator::GeneratorError;
use crate::grid::{Grid, Position, TileKind};

/// Which edge of the grid a gate is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
    /// Any side of the ring.
    Ring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    Manhattan,
    /// Horizontal separation only.
    Column,
}

impl DistanceMetric {
    pub fn distance(&self, a: &Position, b: &Position) -> i32 {
        match self {
            DistanceMetric::Manhattan => a.manhattan(b),
            DistanceMetric::Column => a.column_distance(b),
        }
    }
}

/// Sets the outer `thickness` rings to `kind`. With `corner_kind`, the four
/// corners of the outermost ring get that kind instead.
pub fn stamp_border(
    grid: &mut Grid,
    thickness: u32,
    kind: TileKind,
    corner_kind: Option<TileKind>,
) {
    let t = thickness as i32;
    if t == 0 {
        return;
    }
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            if !grid.on_ring(pos, t) {
                continue;
            }
            let tile = match corner_kind {
                Some(corner) if grid.is_corner(pos) => corner,
                _ => kind,
            };
            grid.set(pos, tile);
        }
    }
}

/// Candidate gate cells for `edge`.
///
/// Gates sit on the innermost border ring so that one step inward reaches the
/// interior, and skip the columns/rows covered by the side borders. With no
/// border the whole outer row/column is eligible, corners included.
pub fn edge_cells(grid: &Grid, edge: Edge, thickness: u32) -> Vec<Position> {
    let t = thickness as i32;
    let gate = (t - 1).max(0);
    let (rows, cols) = (grid.rows(), grid.cols());

    let top = move || (t..cols - t).map(move |c| Position::new(gate, c));
    let bottom = move || (t..cols - t).map(move |c| Position::new(rows - 1 - gate, c));
    let left = move || (t..rows - t).map(move |r| Position::new(r, gate));
    let right = move || (t..rows - t).map(move |r| Position::new(r, cols - 1 - gate));

    let cells: Vec<Position> = match edge {
        Edge::Top => top().collect(),
        Edge::Bottom => bottom().collect(),
        Edge::Left => left().collect(),
        Edge::Right => right().collect(),
        Edge::Ring => {
            let mut ring: Vec<Position> = Vec::new();
            for pos in top().chain(bottom()).chain(left()).chain(right()) {
                if !ring.contains(&pos) {
                    ring.push(pos);
                }
            }
            ring
        }
    };
    cells.into_iter().filter(|p| grid.contains(*p)).collect()
}

/// Draws candidates until `accept` passes, giving up after `max_attempts`
/// draws. Returns the accepted cell and the number of draws it took.
pub fn sample_with_retry<R, A>(
    rng: &mut R,
    candidates: &[Position],
    max_attempts: u32,
    what: &'static str,
    mut accept: A,
) -> Result<(Position, u32), GeneratorError>
where
    R: Rng + ?Sized,
    A: FnMut(&Position) -> bool,
{
    if candidates.is_empty() {
        return Err(GeneratorError::InvalidConfig(format!(
            "no eligible cells to place {}",
            what
        )));
    }
    for attempt in 1..=max_attempts {
        let candidate = candidates[rng.random_range(0..candidates.len())];
        if accept(&candidate) {
            return Ok((candidate, attempt));
        }
    }
    warn!("Gave up placing {} after {} attempts", what, max_attempts);
    Err(GeneratorError::PlacementExhausted { what, attempts: max_attempts })
}

fn is_gate(kind: Option<TileKind>) -> bool {
    matches!(kind, Some(TileKind::Start) | Some(TileKind::End))
}

pub fn place_start<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    edge: Edge,
    thickness: u32,
    max_attempts: u32,
) -> Result<(Position, u32), GeneratorError> {
    let candidates = edge_cells(grid, edge, thickness);
    let (start, attempts) =
        sample_with_retry(rng, &candidates, max_attempts, "start", |p| !is_gate(grid.get(*p)))?;
    grid.set(start, TileKind::Start);
    debug!("Start at {} after {} draw(s)", start, attempts);
    Ok((start, attempts))
}

/// Rejection-samples an End cell that is unoccupied and at least
/// `min_distance` from `start` under `metric`.
#[allow(clippy::too_many_arguments)]
pub fn place_end<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    edge: Edge,
    thickness: u32,
    start: Position,
    metric: DistanceMetric,
    min_distance: i32,
    max_attempts: u32,
) -> Result<(Position, u32), GeneratorError> {
    let candidates = edge_cells(grid, edge, thickness);
    let (end, attempts) = sample_with_retry(rng, &candidates, max_attempts, "end", |p| {
        !is_gate(grid.get(*p)) && metric.distance(&start, p) >= min_distance
    })?;
    grid.set(end, TileKind::End);
    debug!("End at {} after {} draw(s)", end, attempts);
    Ok((end, attempts))
}

/// Interior cells that may receive a block: off the border, not a gate, and
/// not touching (Chebyshev distance <= 1) either gate.
pub fn block_candidates(
    grid: &Grid,
    thickness: u32,
    start: Position,
    end: Position,
) -> Vec<Position> {
    let t = thickness as i32;
    grid.iter()
        .filter(|(pos, kind)| {
            !grid.on_ring(*pos, t)
                && !is_gate(Some(*kind))
                && pos.chebyshev(&start) > 1
                && pos.chebyshev(&end) > 1
        })
        .map(|(pos, _)| pos)
        .collect()
}

/// Marks each eligible cell as `kind` with independent probability
/// `probability`. Returns the number of cells marked.
pub fn scatter_blocks<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    probability: f64,
    thickness: u32,
    start: Position,
    end: Position,
    kind: TileKind,
) -> usize {
    let mut placed = 0;
    for pos in block_candidates(grid, thickness, start, end) {
        if rng.random_bool(probability) {
            grid.set(pos, kind);
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bordered(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols, TileKind::Empty);
        stamp_border(&mut grid, 1, TileKind::Border, None);
        grid
    }

    #[test]
    fn test_stamp_border_thickness() {
        let mut grid = Grid::new(8, 10, TileKind::Empty);
        stamp_border(&mut grid, 2, TileKind::Border, Some(TileKind::CornerBlock));
        // 8*10 minus 4*6 interior
        assert_eq!(grid.count(TileKind::Border) + grid.count(TileKind::CornerBlock), 56);
        assert_eq!(grid.count(TileKind::CornerBlock), 4);
        assert_eq!(grid.get(Position::new(1, 1)), Some(TileKind::Border));
        assert_eq!(grid.get(Position::new(2, 2)), Some(TileKind::Empty));
    }

    #[test]
    fn test_edge_cells_skip_corners() {
        let grid = bordered(15, 20);
        let top = edge_cells(&grid, Edge::Top, 1);
        assert_eq!(top.len(), 18);
        assert!(top.iter().all(|p| p.row == 0 && p.col >= 1 && p.col <= 18));

        let ring = edge_cells(&grid, Edge::Ring, 1);
        assert_eq!(ring.len(), 18 * 2 + 13 * 2);
        assert!(ring.iter().all(|p| !grid.is_corner(*p)));
    }

    #[test]
    fn test_edge_cells_without_border_include_corners() {
        let grid = Grid::new(4, 5, TileKind::Wall);
        let left = edge_cells(&grid, Edge::Left, 0);
        assert_eq!(left.len(), 4);
        assert!(left.contains(&Position::new(0, 0)));
        assert_eq!(edge_cells(&grid, Edge::Ring, 0).len(), 14);
    }

    #[test]
    fn test_gates_respect_distance_and_border() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut grid = bordered(15, 20);
            let (start, _) = place_start(&mut grid, &mut rng, Edge::Ring, 1, 1000).unwrap();
            let (end, _) = place_end(
                &mut grid,
                &mut rng,
                Edge::Ring,
                1,
                start,
                DistanceMetric::Manhattan,
                6,
                1000,
            )
            .unwrap();
            assert!(start.manhattan(&end) >= 6);
            assert_eq!(grid.count(TileKind::Start), 1);
            assert_eq!(grid.count(TileKind::End), 1);
            // Every other ring cell is still border.
            let ring_cells = grid.iter().filter(|(p, _)| grid.on_ring(*p, 1)).count();
            assert_eq!(grid.count(TileKind::Border), ring_cells - 2);
        }
    }

    #[test]
    fn test_retry_cap() {
        let mut rng = StdRng::seed_from_u64(0);
        let cells = [Position::new(0, 1)];
        let result = sample_with_retry(&mut rng, &cells, 10, "end", |_| false);
        assert_eq!(
            result,
            Err(GeneratorError::PlacementExhausted { what: "end", attempts: 10 })
        );
        let result = sample_with_retry(&mut rng, &[], 10, "start", |_| true);
        assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_blocks_avoid_border_and_gates() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = bordered(15, 20);
        let start = Position::new(0, 3);
        let end = Position::new(14, 15);
        grid.set(start, TileKind::Start);
        grid.set(end, TileKind::End);
        scatter_blocks(&mut grid, &mut rng, 1.0, 1, start, end, TileKind::Block);

        for (pos, kind) in grid.iter() {
            if kind == TileKind::Block {
                assert!(!grid.on_ring(pos, 1));
                assert!(pos.chebyshev(&start) > 1);
                assert!(pos.chebyshev(&end) > 1);
            }
        }
        assert_eq!(grid.get(Position::new(1, 3)), Some(TileKind::Empty));
        assert_eq!(grid.get(Position::new(13, 16)), Some(TileKind::Empty));
        assert_eq!(grid.get(Position::new(7, 7)), Some(TileKind::Block));
    }

    #[test]
    fn test_block_density_matches_binomial() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut grid = bordered(200, 200);
        let start = Position::new(0, 50);
        let end = Position::new(199, 150);
        grid.set(start, TileKind::Start);
        grid.set(end, TileKind::End);

        let n = block_candidates(&grid, 1, start, end).len() as f64;
        let placed =
            scatter_blocks(&mut grid, &mut rng, 0.1, 1, start, end, TileKind::Block) as f64;

        let expected = n * 0.1;
        let sigma = (n * 0.1 * 0.9).sqrt();
        assert_approx_eq!(placed, expected, 4.0 * sigma);
    }
}
