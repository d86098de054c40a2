#![warn(non_snake_case)]
//! # tile_walk Entry Point
//!
//! Opens a window and runs one of the tile-grid demos in it. Usage:
//!
//! ```text
//! tile_walk [variant] [config.json]
//! ```
//!
//! `variant` is one of `corridor`, `random-walk`, `walker`, `obstacles`,
//! `player` or `checkerboard` and overrides the variant named in the config.
//! Arrow keys move the player, `R` generates a fresh board.
//!
//! ## License
//! Licensed under the MIT License.

use std::env;
use std::error::Error;
use std::time::Duration;

use eframe::egui;
use log::{error, info};

use tile_walk::config::DemoConfig;
use tile_walk::demo::{pick_input, Demo, Variant};
use tile_walk::grid::Direction;
use tile_walk::render::egui_surface::PainterSurface;

/// Roughly 60 ticks per second.
const FRAME_TIME: Duration = Duration::from_micros(16_667);

fn key_for(direction: Direction) -> egui::Key {
    match direction {
        Direction::Up => egui::Key::ArrowUp,
        Direction::Down => egui::Key::ArrowDown,
        Direction::Left => egui::Key::ArrowLeft,
        Direction::Right => egui::Key::ArrowRight,
    }
}

struct TileWalkApp {
    demo: Demo,
}

impl eframe::App for TileWalkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (input, regenerate) = {
            let state = ctx.input();
            (
                pick_input(|d| state.key_pressed(key_for(d))),
                state.key_pressed(egui::Key::R),
            )
        };

        if regenerate {
            if let Err(err) = self.demo.regenerate() {
                error!("Failed to regenerate board: {}", err);
            }
        }
        self.demo.tick(input);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let mut surface = PainterSurface::new(ui.painter(), origin);
                self.demo.draw(&mut surface);
            });

        ctx.request_repaint_after(FRAME_TIME);
    }
}

fn load_config(args: &[String]) -> Result<DemoConfig, Box<dyn Error>> {
    let mut config = match args.get(2) {
        Some(path) => {
            info!("Loading config from {}", path);
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };
    if let Some(name) = args.get(1) {
        config.variant = name.parse::<Variant>()?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("tile_walk starting...");

    let args: Vec<String> = env::args().collect();
    let config = load_config(&args).map_err(|err| {
        error!("{}", err);
        err
    })?;

    let demo = Demo::new(config.variant, config.generator.clone())?;
    let title = config.title().to_string();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            config.generator.surface_width as f32,
            config.generator.surface_height as f32,
        )),
        resizable: false,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Box::new(TileWalkApp { demo })),
    );
    // run_native returns () so we simply return Ok.
    info!("tile_walk exiting.");
    Ok(())
}
