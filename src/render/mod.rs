// src/render/mod.rs

//! Drawing glue between the grid and whatever actually puts pixels on screen.
//!
//! The core never talks to a window. It walks the grid and calls a
//! [`RenderSurface`] once per tile plus once for the agent marker, using the
//! fixed [`PALETTE`] to pick colors.

#[cfg(feature = "gui")]
pub mod egui_surface;

use crate::grid::{Grid, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Green,
    Red,
    Gray,
    Orange,
    Pink,
    Blue,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
            Color::Gray => (128, 128, 128),
            Color::Orange => (255, 165, 0),
            Color::Pink => (255, 192, 203),
            Color::Blue => (0, 0, 255),
        }
    }
}

/// Tile color lookup, indexed by `TileKind as usize`.
pub const PALETTE: [Color; TileKind::COUNT] = [
    Color::Black,  // Wall
    Color::White,  // Path
    Color::Black,  // Empty
    Color::Orange, // Border
    Color::Green,  // Start
    Color::Red,    // End
    Color::Orange, // Block
    Color::Pink,   // CornerBlock
    Color::Gray,   // Walked
    Color::Black,  // Black
    Color::White,  // White
    Color::Red,    // Red
];

pub const AGENT_COLOR: Color = Color::Blue;

pub fn tile_color(kind: TileKind) -> Color {
    PALETTE[kind as usize]
}

/// The drawing primitives the core needs, in surface pixel coordinates.
pub trait RenderSurface {
    fn fill_rectangle(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, color: Color, cx: f32, cy: f32, radius: f32);
}

/// One `fill_rectangle` per tile, row by row.
pub fn draw_grid<S: RenderSurface + ?Sized>(grid: &Grid, tile_size: u32, surface: &mut S) {
    let size = tile_size as f32;
    for (pos, kind) in grid.iter() {
        surface.fill_rectangle(
            tile_color(kind),
            pos.col as f32 * size,
            pos.row as f32 * size,
            size,
            size,
        );
    }
}

/// A circle centred in the tile whose pixel origin is `(x, y)`.
pub fn draw_agent<S: RenderSurface + ?Sized>(x: f32, y: f32, tile_size: u32, surface: &mut S) {
    let half = tile_size as f32 / 2.0;
    surface.fill_circle(AGENT_COLOR, x + half, y + half, half);
}
