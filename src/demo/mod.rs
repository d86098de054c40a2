// src/demo/mod.rs

//! The six demo programs and the context object that runs one of them.
//!
//! A [`Demo`] owns everything mutable: the generator (and with it the random
//! source), the grid and the agent. The caller owns the event loop and calls
//! [`Demo::tick`] once per frame and [`Demo::draw`] to render.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::{Board, GeneratorConfig, GeneratorError, ProceduralGenerator};
use crate::grid::{Direction, Grid, Position};
use crate::player::Player;
use crate::render::{draw_agent, draw_grid, RenderSurface};
use crate::walker::{StepOutcome, Walker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Corridor,
    RandomWalk,
    #[default]
    Walker,
    Obstacles,
    Player,
    Checkerboard,
}

impl Variant {
    /// Command-line / config name.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Corridor => "corridor",
            Variant::RandomWalk => "random-walk",
            Variant::Walker => "walker",
            Variant::Obstacles => "obstacles",
            Variant::Player => "player",
            Variant::Checkerboard => "checkerboard",
        }
    }

    /// Window title.
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Corridor => "Maze Generator",
            Variant::RandomWalk => "Random Walk Maze",
            Variant::Walker => "Maze Walker",
            Variant::Obstacles => "Obstacle Board",
            Variant::Player => "Maze Player",
            Variant::Checkerboard => "Checkerboard",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[
            Variant::Corridor,
            Variant::RandomWalk,
            Variant::Walker,
            Variant::Obstacles,
            Variant::Player,
            Variant::Checkerboard,
        ]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown demo variant `{0}`")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::all()
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Whoever moves on the board, if anyone.
#[derive(Debug, Clone)]
pub enum Agent {
    None,
    Walker(Walker),
    Player(Player),
}

/// Picks at most one direction per frame: the first pressed key in the
/// order Up, Down, Left, Right.
pub fn pick_input<F: Fn(Direction) -> bool>(pressed: F) -> Option<Direction> {
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        .into_iter()
        .find(|d| pressed(*d))
}

pub struct Demo {
    variant: Variant,
    generator: ProceduralGenerator,
    grid: Grid,
    agent: Agent,
    start: Option<Position>,
    end: Option<Position>,
}

impl Demo {
    pub fn new(variant: Variant, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let mut generator = ProceduralGenerator::new(config)?;
        let board = Self::build(variant, &mut generator)?;
        let mut demo = Demo {
            variant,
            generator,
            grid: board.grid,
            agent: Agent::None,
            start: board.start,
            end: board.end,
        };
        demo.agent = demo.spawn_agent();
        info!("Started {} demo ({}x{})", variant, demo.grid.rows(), demo.grid.cols());
        Ok(demo)
    }

    fn build(
        variant: Variant,
        generator: &mut ProceduralGenerator,
    ) -> Result<Board, GeneratorError> {
        match variant {
            Variant::Corridor => generator.corridor_board(),
            Variant::RandomWalk => generator.random_walk_board(),
            Variant::Walker => generator.walker_board(),
            Variant::Obstacles => generator.obstacle_board(),
            Variant::Player => generator.player_board(),
            Variant::Checkerboard => generator.checkerboard(),
        }
    }

    fn spawn_agent(&self) -> Agent {
        let config = self.generator.config();
        match (self.variant, self.start, self.end) {
            (Variant::Walker, Some(start), Some(end)) => {
                Agent::Walker(Walker::new(start, end, config.max_path_length))
            }
            (Variant::Player, Some(start), _) => {
                Agent::Player(Player::at_tile(start, config.tile_size))
            }
            _ => Agent::None,
        }
    }

    /// Throws the board away and generates a new one with the same settings.
    pub fn regenerate(&mut self) -> Result<(), GeneratorError> {
        let board = Self::build(self.variant, &mut self.generator)?;
        self.grid = board.grid;
        self.start = board.start;
        self.end = board.end;
        self.agent = self.spawn_agent();
        Ok(())
    }

    /// One frame of simulation. Returns whether anything moved.
    pub fn tick(&mut self, input: Option<Direction>) -> bool {
        let config = self.generator.config();
        match &mut self.agent {
            Agent::Walker(walker) => matches!(walker.step(&mut self.grid), StepOutcome::Moved(_)),
            Agent::Player(player) => {
                let Some(direction) = input else {
                    return false;
                };
                let moved = player.try_move(
                    &self.grid,
                    direction,
                    config.tile_size,
                    config.surface_width,
                    config.surface_height,
                );
                if moved && Some(player.tile(config.tile_size)) == self.end {
                    info!("Player reached the end");
                }
                moved
            }
            Agent::None => false,
        }
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let tile_size = self.generator.config().tile_size;
        draw_grid(&self.grid, tile_size, surface);
        match &self.agent {
            Agent::Walker(walker) => {
                let pos = walker.position();
                let size = tile_size as f32;
                draw_agent(pos.col as f32 * size, pos.row as f32 * size, tile_size, surface);
            }
            Agent::Player(player) => draw_agent(player.x(), player.y(), tile_size, surface),
            Agent::None => {}
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }
}
