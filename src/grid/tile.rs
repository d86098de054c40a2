// src/grid/tile.rs

/// Every role a cell can play across the demos. Each variant only uses a
/// subset (e.g. the corridor demo never produces `Walked`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Path,
    Empty,
    Border,
    Start,
    End,
    Block,
    CornerBlock,
    Walked,
    Black,
    White,
    Red,
}

impl TileKind {
    /// Number of kinds, used to size lookup tables.
    pub const COUNT: usize = 12;

    /// All kinds in declaration order. Index `i` holds the kind whose
    /// discriminant is `i`.
    pub fn all() -> &'static [TileKind; TileKind::COUNT] {
        &[
            TileKind::Wall,
            TileKind::Path,
            TileKind::Empty,
            TileKind::Border,
            TileKind::Start,
            TileKind::End,
            TileKind::Block,
            TileKind::CornerBlock,
            TileKind::Walked,
            TileKind::Black,
            TileKind::White,
            TileKind::Red,
        ]
    }

    /// Returns a user-friendly name for the kind.
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Wall => "Wall",
            TileKind::Path => "Path",
            TileKind::Empty => "Empty",
            TileKind::Border => "Border",
            TileKind::Start => "Start",
            TileKind::End => "End",
            TileKind::Block => "Block",
            TileKind::CornerBlock => "Corner Block",
            TileKind::Walked => "Walked",
            TileKind::Black => "Black",
            TileKind::White => "White",
            TileKind::Red => "Red",
        }
    }

    /// Whether an agent may legally stand on this kind.
    pub fn is_traversable(&self) -> bool {
        matches!(
            self,
            TileKind::Path | TileKind::Empty | TileKind::Start | TileKind::End
        )
    }

    /// Border-like kinds that frame a bordered grid.
    pub fn is_border(&self) -> bool {
        matches!(self, TileKind::Border | TileKind::CornerBlock)
    }
}

/// A single grid cell. Position is implied by where it sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Tile { kind }
    }
}
