// src/grid/position.rs

use std::fmt;

/// A (row, col) cell coordinate. Signed so that neighbours past the edge can
/// be expressed and then rejected by the grid's bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }

    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn column_distance(&self, other: &Position) -> i32 {
        (self.col - other.col).abs()
    }

    /// King-move distance; 1 for all eight neighbours.
    pub fn chebyshev(&self, other: &Position) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// The four axis-aligned neighbours, in Up, Right, Down, Left order.
    pub fn neighbours(&self) -> [Position; 4] {
        [
            self.offset(Direction::Up),
            self.offset(Direction::Right),
            self.offset(Direction::Down),
            self.offset(Direction::Left),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, col delta).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Rotates the direction vector 90 degrees clockwise on screen
    /// (Right -> Down -> Left -> Up -> Right).
    pub fn rotate_cw(&self) -> Direction {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn all() -> &'static [Direction; 4] {
        &[Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }
}
