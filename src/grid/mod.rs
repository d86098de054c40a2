// src/grid/mod.rs

//! The tile grid shared by every demo: a fixed-size, row-major container of
//! [`Tile`]s with bounds-checked accessors.

pub mod position;
pub mod tile;

pub use position::{Direction, Position};
pub use tile::{Tile, TileKind};

use crate::generator::GeneratorError;

/// A rectangular grid of tiles. Never resized after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>, // row-major
}

impl Grid {
    /// Allocates a `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: TileKind) -> Self {
        Grid {
            rows: rows as i32,
            cols: cols as i32,
            tiles: vec![Tile::new(fill); rows * cols],
        }
    }

    /// Sizes a grid from surface pixels: `height / tile_size` rows by
    /// `width / tile_size` columns.
    pub fn for_surface(
        width: u32,
        height: u32,
        tile_size: u32,
        fill: TileKind,
    ) -> Result<Self, GeneratorError> {
        if tile_size == 0 {
            return Err(GeneratorError::InvalidConfig(
                "tile size must be positive".into(),
            ));
        }
        let rows = (height / tile_size) as usize;
        let cols = (width / tile_size) as usize;
        if rows == 0 || cols == 0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "surface {}x{} is smaller than one {}px tile",
                width, height, tile_size
            )));
        }
        Ok(Grid::new(rows, cols, fill))
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.row * self.cols + pos.col) as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|i| self.tiles.get(i))
    }

    /// The kind at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<TileKind> {
        self.tile(pos).map(|t| t.kind)
    }

    /// Writes `kind` at `pos`. Returns `false` (and writes nothing) when out
    /// of bounds.
    pub fn set(&mut self, pos: Position, kind: TileKind) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i].kind = kind;
                true
            }
            None => false,
        }
    }

    /// Whether `pos` lies within `thickness` rings of the outer edge.
    pub fn on_ring(&self, pos: Position, thickness: i32) -> bool {
        self.contains(pos)
            && (pos.row < thickness
                || pos.col < thickness
                || pos.row >= self.rows - thickness
                || pos.col >= self.cols - thickness)
    }

    pub fn is_corner(&self, pos: Position) -> bool {
        (pos.row == 0 || pos.row == self.rows - 1) && (pos.col == 0 || pos.col == self.cols - 1)
    }

    /// Iterates every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        let cols = self.cols;
        self.tiles.iter().enumerate().map(move |(i, t)| {
            let i = i as i32;
            (Position::new(i / cols, i % cols), t.kind)
        })
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }
}
