//! Bar Hopper - Terminal Arcade Dodger Library
//!
//! This module exposes the game logic for testing and external use.

pub mod cli;
pub mod core;
pub mod game;
pub mod highscores;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use game::{
    check_collision, process_input, resolve_conflicts, step_frame, tick, update_obstacles,
    BarHopperGame, BarHopperInput, BarHopperResult, Direction, Obstacle, Player, Rect, Side,
    SpawnReport,
};
pub use highscores::{HighScoreEntry, HighScores};
