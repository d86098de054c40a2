// src/player/mod.rs

use log::trace;

use crate::grid::{Direction, Grid, Position};

/// The arrow-key controlled circle. Position is kept in surface pixels and
/// always sits on a tile origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    x: f32,
    y: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player { x, y }
    }

    /// Places the player on the pixel origin of `pos`.
    pub fn at_tile(pos: Position, tile_size: u32) -> Self {
        let size = tile_size as f32;
        Player::new(pos.col as f32 * size, pos.row as f32 * size)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// The tile under the player, by integer division of its pixel position.
    pub fn tile(&self, tile_size: u32) -> Position {
        tile_at(self.x, self.y, tile_size)
    }

    /// Moves one tile in `direction` if the destination is on the surface and
    /// traversable. A rejected move leaves the position untouched and
    /// returns `false`.
    pub fn try_move(
        &mut self,
        grid: &Grid,
        direction: Direction,
        tile_size: u32,
        surface_width: u32,
        surface_height: u32,
    ) -> bool {
        let (dr, dc) = direction.delta();
        let size = tile_size as f32;
        let x = self.x + dc as f32 * size;
        let y = self.y + dr as f32 * size;

        if x < 0.0 || y < 0.0 || x >= surface_width as f32 || y >= surface_height as f32 {
            trace!("Move {} leaves the surface", direction.name());
            return false;
        }
        let destination = tile_at(x, y, tile_size);
        match grid.get(destination) {
            Some(kind) if kind.is_traversable() => {
                self.x = x;
                self.y = y;
                true
            }
            Some(kind) => {
                trace!("Move {} blocked by {}", direction.name(), kind.name());
                false
            }
            None => false,
        }
    }
}

fn tile_at(x: f32, y: f32, tile_size: u32) -> Position {
    let size = tile_size.max(1) as f32;
    Position::new((y / size).floor() as i32, (x / size).floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::placement::stamp_border;
    use crate::grid::TileKind;

    fn board() -> Grid {
        let mut grid = Grid::new(15, 20, TileKind::Empty);
        stamp_border(&mut grid, 1, TileKind::Border, Some(TileKind::CornerBlock));
        grid.set(Position::new(5, 6), TileKind::Block);
        grid.set(Position::new(0, 4), TileKind::Start);
        grid
    }

    #[test]
    fn test_move_onto_open_tile() {
        let grid = board();
        let mut player = Player::at_tile(Position::new(5, 4), 40);
        assert!(player.try_move(&grid, Direction::Right, 40, 800, 600));
        assert_eq!((player.x(), player.y()), (200.0, 200.0));
        assert_eq!(player.tile(40), Position::new(5, 5));
        assert!(player.try_move(&grid, Direction::Up, 40, 800, 600));
        assert_eq!((player.x(), player.y()), (200.0, 160.0));
    }

    #[test]
    fn test_blocked_moves_leave_position_unchanged() {
        let grid = board();

        let mut player = Player::at_tile(Position::new(5, 5), 40);
        let before = player;
        assert!(!player.try_move(&grid, Direction::Right, 40, 800, 600));
        assert_eq!(player, before);

        let mut player = Player::at_tile(Position::new(1, 1), 40);
        let before = player;
        assert!(!player.try_move(&grid, Direction::Up, 40, 800, 600));
        assert!(!player.try_move(&grid, Direction::Left, 40, 800, 600));
        assert_eq!(player.x().to_bits(), before.x().to_bits());
        assert_eq!(player.y().to_bits(), before.y().to_bits());
    }

    #[test]
    fn test_off_surface_move_is_rejected() {
        let grid = Grid::new(15, 20, TileKind::Empty);
        let mut player = Player::at_tile(Position::new(0, 19), 40);
        assert!(!player.try_move(&grid, Direction::Right, 40, 800, 600));
        assert!(!player.try_move(&grid, Direction::Up, 40, 800, 600));
        assert_eq!(player.tile(40), Position::new(0, 19));
        assert!(player.try_move(&grid, Direction::Down, 40, 800, 600));
    }

    #[test]
    fn test_player_leaves_start_gate_inward() {
        let grid = board();
        let mut player = Player::at_tile(Position::new(0, 4), 40);
        assert!(!player.try_move(&grid, Direction::Left, 40, 800, 600));
        assert!(player.try_move(&grid, Direction::Down, 40, 800, 600));
        assert_eq!(player.tile(40), Position::new(1, 4));
        // Back onto the gate is allowed.
        assert!(player.try_move(&grid, Direction::Up, 40, 800, 600));
    }
}
