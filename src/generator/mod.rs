// src/generator/mod.rs

//! Randomized grid generation for the six demo boards.
//!
//! [`ProceduralGenerator`] owns the configuration and the random source; each
//! `*_board` method allocates a fresh [`Grid`] and runs one generation
//! strategy over it, returning a [`Board`] with the Start/End gates it placed.

pub mod carve;
pub mod placement;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Grid, Position, TileKind};
use placement::{DistanceMetric, Edge};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    #[error("could not place {what} after {attempts} attempts")]
    PlacementExhausted { what: &'static str, attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub tile_size: u32,
    pub border_thickness: u32,
    /// Minimum Start/End separation under the variant's metric.
    pub min_distance: i32,
    pub block_probability: f64,
    pub max_path_length: u32,
    pub max_placement_attempts: u32,
    /// Fixed seed for reproducible boards; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            surface_width: 800,
            surface_height: 600,
            tile_size: 40,
            border_thickness: 1,
            min_distance: 6,
            block_probability: 0.1,
            max_path_length: 500,
            max_placement_attempts: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Rows and columns the configured surface holds.
    pub fn grid_size(&self) -> (i32, i32) {
        if self.tile_size == 0 {
            return (0, 0);
        }
        (
            (self.surface_height / self.tile_size) as i32,
            (self.surface_width / self.tile_size) as i32,
        )
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.tile_size == 0 {
            return Err(GeneratorError::InvalidConfig(
                "tile size must be positive".into(),
            ));
        }
        let (rows, cols) = self.grid_size();
        if rows == 0 || cols == 0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "surface {}x{} is smaller than one {}px tile",
                self.surface_width, self.surface_height, self.tile_size
            )));
        }
        if !(0.0..=1.0).contains(&self.block_probability) {
            return Err(GeneratorError::InvalidConfig(format!(
                "block probability {} is outside [0, 1]",
                self.block_probability
            )));
        }
        let thickness = self.border_thickness as i32;
        if thickness * 2 >= rows.min(cols) {
            return Err(GeneratorError::InvalidConfig(format!(
                "border thickness {} leaves no interior in a {}x{} grid",
                thickness, rows, cols
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(GeneratorError::InvalidConfig(
                "max placement attempts must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Builds the random source: seeded when `seed` is set, OS entropy
    /// otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub carved_count: usize,
    pub block_count: usize,
    pub start_attempts: u32,
    pub end_attempts: u32,
}

/// A generated grid plus the gates placed on it, if the variant has any.
#[derive(Debug, Clone)]
pub struct Board {
    pub grid: Grid,
    pub start: Option<Position>,
    pub end: Option<Position>,
}

pub struct ProceduralGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    stats: GenerationStats,
}

impl ProceduralGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let rng = config.rng();
        Ok(ProceduralGenerator {
            config,
            rng,
            stats: GenerationStats::default(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Stats of the most recent board.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    fn blank(&mut self, fill: TileKind) -> Result<Grid, GeneratorError> {
        self.stats = GenerationStats::default();
        Grid::for_surface(
            self.config.surface_width,
            self.config.surface_height,
            self.config.tile_size,
            fill,
        )
    }

    /// All-Wall grid with Start on the left column, End on the right column,
    /// and one rightward corridor carved from a random left-edge row.
    pub fn corridor_board(&mut self) -> Result<Board, GeneratorError> {
        let mut grid = self.blank(TileKind::Wall)?;
        let attempts = self.config.max_placement_attempts;

        let (start, tries) =
            placement::place_start(&mut grid, &mut self.rng, Edge::Left, 0, attempts)?;
        self.stats.start_attempts = tries;
        let (end, tries) = placement::place_end(
            &mut grid,
            &mut self.rng,
            Edge::Right,
            0,
            start,
            DistanceMetric::Manhattan,
            0,
            attempts,
        )?;
        self.stats.end_attempts = tries;

        let row = self.rng.random_range(0..grid.rows());
        self.stats.carved_count = carve::carve_corridor(&mut grid, Position::new(row, 0));
        debug!("Corridor carved from row {}: {} cells", row, self.stats.carved_count);

        Ok(Board { grid, start: Some(start), end: Some(end) })
    }

    /// One north-south corridor with lateral jitter on a White field.
    pub fn random_walk_board(&mut self) -> Result<Board, GeneratorError> {
        let mut grid = self.blank(TileKind::White)?;
        let walk = carve::carve_random_walk(&mut grid, &mut self.rng);
        self.stats.carved_count = walk.len();
        Ok(Board { grid, start: walk.first().copied(), end: walk.last().copied() })
    }

    /// Bordered empty board with a Start gate on the top edge and an End gate
    /// on the bottom edge, separated by at least `min_distance` columns.
    pub fn walker_board(&mut self) -> Result<Board, GeneratorError> {
        self.bordered(Edge::Top, Edge::Bottom, DistanceMetric::Column, None)
    }

    /// Bordered board with gates anywhere on the ring and scattered blocks.
    pub fn obstacle_board(&mut self) -> Result<Board, GeneratorError> {
        let mut board = self.bordered(Edge::Ring, Edge::Ring, DistanceMetric::Manhattan, None)?;
        self.scatter(&mut board, TileKind::Block);
        Ok(board)
    }

    /// Like [`obstacle_board`](Self::obstacle_board) with pink corner blocks
    /// capping the ring.
    pub fn player_board(&mut self) -> Result<Board, GeneratorError> {
        let mut board = self.bordered(
            Edge::Ring,
            Edge::Ring,
            DistanceMetric::Manhattan,
            Some(TileKind::CornerBlock),
        )?;
        self.scatter(&mut board, TileKind::Block);
        Ok(board)
    }

    pub fn checkerboard(&mut self) -> Result<Board, GeneratorError> {
        let mut grid = self.blank(TileKind::White)?;
        carve::paint_checkerboard(&mut grid);
        Ok(Board { grid, start: None, end: None })
    }

    fn bordered(
        &mut self,
        start_edge: Edge,
        end_edge: Edge,
        metric: DistanceMetric,
        corner_kind: Option<TileKind>,
    ) -> Result<Board, GeneratorError> {
        let mut grid = self.blank(TileKind::Empty)?;
        let thickness = self.config.border_thickness;
        let attempts = self.config.max_placement_attempts;
        placement::stamp_border(&mut grid, thickness, TileKind::Border, corner_kind);

        let (start, tries) =
            placement::place_start(&mut grid, &mut self.rng, start_edge, thickness, attempts)?;
        self.stats.start_attempts = tries;
        let (end, tries) = placement::place_end(
            &mut grid,
            &mut self.rng,
            end_edge,
            thickness,
            start,
            metric,
            self.config.min_distance,
            attempts,
        )?;
        self.stats.end_attempts = tries;
        info!("Placed start {} and end {}", start, end);

        Ok(Board { grid, start: Some(start), end: Some(end) })
    }

    fn scatter(&mut self, board: &mut Board, kind: TileKind) {
        if let (Some(start), Some(end)) = (board.start, board.end) {
            self.stats.block_count = placement::scatter_blocks(
                &mut board.grid,
                &mut self.rng,
                self.config.block_probability,
                self.config.border_thickness,
                start,
                end,
                kind,
            );
            debug!("Scattered {} blocks", self.stats.block_count);
        }
    }
}
