//! Bar Hopper game logic: input processing, obstacle lifecycle, difficulty
//! ramp and collision detection.
//!
//! Everything here is UI-agnostic and takes its randomness as an injected
//! `Rng`, so a seeded generator reproduces a run exactly.

use super::types::*;
use crate::core::constants::MAX_TICK_DT_MS;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

/// UI-agnostic input actions for Bar Hopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHopperInput {
    Hop,   // Space, Up or Down
    Pause, // P
    Quit,  // Q or Esc
    Other, // Any other key
}

/// What happened during one spawn cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: usize,
    /// Obstacles dropped by conflict resolution.
    pub discarded: usize,
    pub sped_up: bool,
    pub reversed: bool,
}

/// Process player input.
pub fn process_input(game: &mut BarHopperGame, input: BarHopperInput) {
    if game.game_result.is_some() {
        return; // Game over -- restart/exit handled by input.rs
    }

    if input == BarHopperInput::Quit {
        game.game_result = Some(BarHopperResult::Quit);
        return;
    }

    // Waiting screen: Hop starts the game
    if game.waiting_to_start {
        if input == BarHopperInput::Hop {
            game.waiting_to_start = false;
        }
        return;
    }

    match input {
        BarHopperInput::Hop => {
            if !game.paused {
                game.player.hop();
            }
        }
        BarHopperInput::Pause => {
            game.paused = !game.paused;
        }
        BarHopperInput::Quit | BarHopperInput::Other => {}
    }
}

/// Advance the game by wall-clock time. Called from the main loop.
///
/// `dt_ms` is milliseconds since the last call. Frames are stepped in fixed
/// `frame_ms` increments. Returns true if the game state changed.
pub fn tick<R: Rng>(game: &mut BarHopperGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.is_running() {
        return false;
    }

    // Clamp dt so a stall doesn't replay a burst of frames at once
    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= game.frame_ms {
        game.accumulated_time_ms -= game.frame_ms;
        step_frame(game, rng);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single frame: move/cull/spawn obstacles, then check for a crash.
pub fn step_frame<R: Rng>(game: &mut BarHopperGame, rng: &mut R) -> Option<SpawnReport> {
    let report = update_obstacles(game, rng);

    if let Some(report) = report {
        if report.sped_up {
            log::info!("Score {}: speed up to {}", game.score, game.speed);
        }
        if report.reversed {
            log::info!(
                "Score {}: obstacles now moving {:?}",
                game.score,
                game.direction
            );
        }
    }

    if check_collision(&game.player.rect(), &game.obstacles) {
        game.game_result = Some(BarHopperResult::Crashed);
        log::info!(
            "Crashed at score {} (speed {}, frame {})",
            game.score,
            game.speed,
            game.frame_count
        );
    }

    game.frame_count += 1;
    report
}

/// Move, cull and spawn obstacles and ramp the difficulty.
///
/// Returns a report when this frame ran a spawn cycle.
pub fn update_obstacles<R: Rng>(game: &mut BarHopperGame, rng: &mut R) -> Option<SpawnReport> {
    // 1. Slide everything along the current direction
    let shift = game.speed * game.direction.sign();
    for obstacle in &mut game.obstacles {
        obstacle.x += shift;
    }

    // 2. Drop whatever has left through the trailing edge
    let direction = game.direction;
    game.obstacles.retain(|o| direction.keeps(o.x));

    if !game.frame_count.is_multiple_of(game.spawn_interval) {
        return None;
    }

    // 3. Spawn cycle
    let spawned = game.spawn_obstacles(rng);
    game.score += 1;
    let discarded = resolve_conflicts(&mut game.obstacles, rng);

    // 4. Difficulty ramp
    let reversed = game.score.is_multiple_of(game.reverse_every);
    if reversed {
        game.direction = game.direction.reversed();
    }
    let sped_up = game.score.is_multiple_of(game.speed_up_every);
    if sped_up {
        game.speed += 1;
    }

    Some(SpawnReport {
        spawned,
        discarded,
        sped_up,
        reversed,
    })
}

/// Make every column passable.
///
/// Obstacles sharing an x and a side collapse to one. Where an x has
/// obstacles on both sides, one side is discarded at random. Surviving
/// obstacles keep their order. Returns how many were removed.
pub fn resolve_conflicts<R: Rng>(obstacles: &mut Vec<Obstacle>, rng: &mut R) -> usize {
    let before = obstacles.len();

    // BTreeMap so the rng is consumed in x order, keeping seeded runs stable
    let mut sides_at: BTreeMap<i32, (bool, bool)> = BTreeMap::new();
    for obstacle in obstacles.iter() {
        let entry = sides_at.entry(obstacle.x).or_default();
        match obstacle.side {
            Side::Above => entry.0 = true,
            Side::Below => entry.1 = true,
        }
    }

    let mut discard: BTreeMap<i32, Side> = BTreeMap::new();
    for (x, (above, below)) in sides_at {
        if above && below {
            discard.insert(x, Side::random(rng));
        }
    }

    let mut kept: HashSet<(i32, Side)> = HashSet::with_capacity(before);
    obstacles.retain(|o| discard.get(&o.x) != Some(&o.side) && kept.insert((o.x, o.side)));

    before - obstacles.len()
}

/// True if any obstacle overlaps the player.
pub fn check_collision(player: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| o.rect().intersects(player))
}
