// src/lib.rs

pub mod config;
pub mod demo;
pub mod generator;
pub mod grid;
pub mod player;
pub mod render;
pub mod walker;
