//! # Walker
//!
//! An automatic agent that heads for the End tile one step per tick using a
//! purely local heuristic:
//!
//! - prefer closing the column gap, then the row gap;
//! - accept a destination only if it is enterable and has at least one
//!   axis-aligned neighbour that is not border;
//! - on rejection rotate the direction 90 degrees clockwise, trying all four.
//!
//! This is not pathfinding. The walker can wander into a dead end and stay
//! there; a stuck tick is a no-op, not an error.

use log::{debug, info};

use crate::grid::{Direction, Grid, Position, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    Active,
    ReachedEnd,
    PathLimitExceeded,
}

/// What a single call to [`Walker::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Position),
    /// No direction validated; nothing changed this tick.
    Blocked,
    /// The walker is done; the step was a no-op.
    Finished(WalkerState),
}

#[derive(Debug, Clone)]
pub struct Walker {
    position: Position,
    target: Position,
    steps: u32,
    max_steps: u32,
    state: WalkerState,
}

impl Walker {
    pub fn new(start: Position, target: Position, max_steps: u32) -> Self {
        Walker {
            position: start,
            target,
            steps: 0,
            max_steps,
            state: WalkerState::Active,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn state(&self) -> WalkerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == WalkerState::Active
    }

    /// Column first, rows only once the columns match.
    pub fn preferred_direction(&self) -> Direction {
        if self.position.col < self.target.col {
            Direction::Right
        } else if self.position.col > self.target.col {
            Direction::Left
        } else if self.position.row < self.target.row {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Advances at most one cell. Once finished, every call is a no-op.
    pub fn step(&mut self, grid: &mut Grid) -> StepOutcome {
        if self.state != WalkerState::Active {
            return StepOutcome::Finished(self.state);
        }
        // Arrival wins over the limit when the last allowed step lands on End.
        if self.position == self.target {
            info!("Walker reached the end in {} steps", self.steps);
            self.state = WalkerState::ReachedEnd;
            return StepOutcome::Finished(self.state);
        }
        if self.steps >= self.max_steps {
            info!("Walker hit the path limit of {} steps", self.max_steps);
            self.state = WalkerState::PathLimitExceeded;
            return StepOutcome::Finished(self.state);
        }

        let mut direction = self.preferred_direction();
        for _ in 0..4 {
            if can_enter(grid, self.position.offset(direction)) {
                return self.advance(grid, direction);
            }
            debug!("Cannot move {} from {}", direction.name(), self.position);
            direction = direction.rotate_cw();
        }

        // One last try before giving up on this tick.
        if can_enter(grid, self.position.offset(direction)) {
            return self.advance(grid, direction);
        }
        debug!("Walker stuck at {}", self.position);
        StepOutcome::Blocked
    }

    fn advance(&mut self, grid: &mut Grid, direction: Direction) -> StepOutcome {
        let destination = self.position.offset(direction);
        if !matches!(grid.get(destination), Some(TileKind::Start) | Some(TileKind::End)) {
            grid.set(destination, TileKind::Walked);
        }
        self.position = destination;
        self.steps += 1;
        debug!("Moving {} to {}", direction.name(), destination);
        StepOutcome::Moved(destination)
    }
}

/// Whether the walker may step onto `destination`.
///
/// The cell must be in bounds, traversable and not the Start gate (so Border,
/// Walked, Block, CornerBlock and Wall are all refused), and
/// [`has_open_neighbour`] must hold.
pub fn can_enter(grid: &Grid, destination: Position) -> bool {
    match grid.get(destination) {
        Some(kind) if kind.is_traversable() && kind != TileKind::Start => {
            has_open_neighbour(grid, destination)
        }
        _ => false,
    }
}

/// At least one of the four axis-aligned neighbours is in bounds and not
/// border. Diagonals are never looked at.
pub fn has_open_neighbour(grid: &Grid, pos: Position) -> bool {
    pos.neighbours()
        .iter()
        .any(|n| matches!(grid.get(*n), Some(kind) if !kind.is_border()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::placement::stamp_border;
    use crate::generator::{GeneratorConfig, ProceduralGenerator};
    use std::collections::HashSet;

    fn bordered(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols, TileKind::Empty);
        stamp_border(&mut grid, 1, TileKind::Border, None);
        grid
    }

    #[test]
    fn test_preferred_direction_is_column_first() {
        let walker = Walker::new(Position::new(5, 2), Position::new(10, 8), 10);
        assert_eq!(walker.preferred_direction(), Direction::Right);
        let walker = Walker::new(Position::new(5, 9), Position::new(1, 8), 10);
        assert_eq!(walker.preferred_direction(), Direction::Left);
        let walker = Walker::new(Position::new(5, 8), Position::new(10, 8), 10);
        assert_eq!(walker.preferred_direction(), Direction::Down);
        let walker = Walker::new(Position::new(5, 8), Position::new(1, 8), 10);
        assert_eq!(walker.preferred_direction(), Direction::Up);
    }

    #[test]
    fn test_can_enter_refuses_border_walked_and_boxed_cells() {
        let mut grid = bordered(3, 3);
        // Centre of a 3x3 bordered grid has only border neighbours.
        assert!(!can_enter(&grid, Position::new(1, 1)));
        assert!(!can_enter(&grid, Position::new(0, 1)));
        assert!(!can_enter(&grid, Position::new(-1, 1)));

        grid = bordered(5, 5);
        assert!(can_enter(&grid, Position::new(2, 2)));
        grid.set(Position::new(2, 2), TileKind::Walked);
        assert!(!can_enter(&grid, Position::new(2, 2)));
    }

    #[test]
    fn test_leaves_top_gate_through_rotation() {
        let mut grid = bordered(15, 20);
        let start = Position::new(0, 3);
        let end = Position::new(14, 12);
        grid.set(start, TileKind::Start);
        grid.set(end, TileKind::End);

        let mut walker = Walker::new(start, end, 500);
        // Right is border, so the rotation lands on Down.
        assert_eq!(walker.step(&mut grid), StepOutcome::Moved(Position::new(1, 3)));
        assert_eq!(grid.get(Position::new(1, 3)), Some(TileKind::Walked));
        assert_eq!(grid.get(start), Some(TileKind::Start));
        assert_eq!(walker.step(&mut grid), StepOutcome::Moved(Position::new(1, 4)));
    }

    #[test]
    fn test_reaches_end_on_generated_board() {
        for seed in 0..30 {
            let config = GeneratorConfig { seed: Some(seed), ..GeneratorConfig::default() };
            let mut generator = ProceduralGenerator::new(config).unwrap();
            let board = generator.walker_board().unwrap();
            let mut grid = board.grid;
            let (start, end) = (board.start.unwrap(), board.end.unwrap());

            let mut walker = Walker::new(start, end, 500);
            let mut visited = HashSet::new();
            for _ in 0..1000 {
                match walker.step(&mut grid) {
                    StepOutcome::Moved(pos) => assert!(visited.insert(pos), "revisited {}", pos),
                    StepOutcome::Blocked => {}
                    StepOutcome::Finished(_) => break,
                }
            }
            assert_eq!(walker.state(), WalkerState::ReachedEnd);
            assert_eq!(walker.position(), end);
            assert!(walker.steps() <= 500);
            assert_eq!(grid.get(end), Some(TileKind::End));
            assert_eq!(grid.count(TileKind::Walked), walker.steps() as usize - 1);
        }
    }

    #[test]
    fn test_path_limit_and_idempotent_finish() {
        let mut grid = bordered(15, 20);
        let start = Position::new(0, 2);
        let end = Position::new(14, 15);
        grid.set(start, TileKind::Start);
        grid.set(end, TileKind::End);

        let mut walker = Walker::new(start, end, 3);
        for _ in 0..3 {
            assert!(matches!(walker.step(&mut grid), StepOutcome::Moved(_)));
        }
        let finished = StepOutcome::Finished(WalkerState::PathLimitExceeded);
        assert_eq!(walker.step(&mut grid), finished);

        let snapshot = grid.clone();
        let position = walker.position();
        for _ in 0..5 {
            assert_eq!(walker.step(&mut grid), finished);
        }
        assert_eq!(grid, snapshot);
        assert_eq!(walker.position(), position);
        assert_eq!(walker.steps(), 3);
    }

    #[test]
    fn test_arrival_on_last_allowed_step_counts_as_reached() {
        let mut grid = bordered(5, 7);
        let start = Position::new(0, 2);
        let end = Position::new(4, 2);
        grid.set(start, TileKind::Start);
        grid.set(end, TileKind::End);

        // Straight down: exactly four steps to End.
        let mut walker = Walker::new(start, end, 4);
        for _ in 0..4 {
            assert!(matches!(walker.step(&mut grid), StepOutcome::Moved(_)));
        }
        assert_eq!(walker.position(), end);
        assert_eq!(walker.steps(), 4);
        assert_eq!(
            walker.step(&mut grid),
            StepOutcome::Finished(WalkerState::ReachedEnd)
        );
        assert_eq!(walker.state(), WalkerState::ReachedEnd);
    }

    #[test]
    fn test_boxed_in_walker_stays_put() {
        let mut grid = bordered(7, 7);
        let start = Position::new(3, 3);
        grid.set(start, TileKind::Start);
        for n in start.neighbours() {
            grid.set(n, TileKind::Block);
        }
        let end = Position::new(6, 5);
        grid.set(end, TileKind::End);

        let mut walker = Walker::new(start, end, 100);
        let snapshot = grid.clone();
        for _ in 0..3 {
            assert_eq!(walker.step(&mut grid), StepOutcome::Blocked);
        }
        assert!(walker.is_active());
        assert_eq!(walker.position(), start);
        assert_eq!(walker.steps(), 0);
        assert_eq!(grid, snapshot);
    }
}
