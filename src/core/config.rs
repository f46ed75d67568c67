//! Tunable game settings, persisted as `~/.barhopper/config.json`.
//!
//! Every field is optional in the file; missing fields take their defaults.
//! Geometry is fixed and lives in `constants`.

use super::constants::*;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;

/// Difficulty and pacing knobs for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one simulation frame in milliseconds.
    pub frame_ms: u64,
    /// Obstacle speed (pixels per frame) at the start of a run.
    pub initial_speed: i32,
    /// Frames between spawn cycles.
    pub spawn_interval: u64,
    /// Speed goes up by one every this many points.
    pub speed_up_every: u32,
    /// Obstacle direction reverses every this many points.
    pub reverse_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            initial_speed: DEFAULT_INITIAL_SPEED,
            spawn_interval: DEFAULT_SPAWN_INTERVAL_FRAMES,
            speed_up_every: DEFAULT_SPEED_UP_EVERY,
            reverse_every: DEFAULT_REVERSE_EVERY,
        }
    }
}

impl GameConfig {
    /// Clamp values into ranges the simulation can run with.
    pub fn sanitized(self) -> Self {
        Self {
            frame_ms: self.frame_ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
            initial_speed: self.initial_speed.clamp(1, OBSTACLE_SIZE),
            spawn_interval: self.spawn_interval.max(1),
            speed_up_every: self.speed_up_every.max(1),
            reverse_every: self.reverse_every.max(1),
        }
    }

    /// Load from `~/.barhopper/config.json`, falling back to defaults.
    pub fn load() -> Self {
        persistence::load_json_or_default::<Self>(CONFIG_FILENAME).sanitized()
    }

    /// Write the defaults out so the file can be edited by hand.
    /// Leaves an existing file untouched. Returns true if a file was written.
    pub fn save_default_if_missing() -> io::Result<bool> {
        if persistence::save_path(CONFIG_FILENAME)?.exists() {
            return Ok(false);
        }
        persistence::save_json(CONFIG_FILENAME, &Self::default())?;
        Ok(true)
    }
}
