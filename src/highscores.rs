//! High score leaderboard.
//!
//! Persisted to `~/.barhopper/highscores.json`, keeps the top 10 runs.

use crate::core::constants::{HIGHSCORES_FILENAME, MAX_HIGH_SCORES};
use crate::game::BarHopperGame;
use crate::utils::persistence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;

/// A single finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Obstacle speed when the run ended
    pub speed: i32,
    /// Frames survived
    pub frames: u64,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: i64,
}

impl HighScoreEntry {
    pub fn from_game(game: &BarHopperGame, timestamp: i64) -> Self {
        Self {
            score: game.score,
            speed: game.speed,
            frames: game.frame_count,
            timestamp,
        }
    }
}

/// High score leaderboard, sorted best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a run if it qualifies. Returns the rank achieved (1-indexed).
    /// Ties rank below existing entries.
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self.potential_rank(entry.score)?;
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score so far, 0 if none.
    pub fn best(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Put a finished run on the board. Unfinished runs are ignored.
    pub fn record(&mut self, game: &BarHopperGame, timestamp: i64) -> Option<usize> {
        game.game_result?;
        log::info!(
            "Run over ({:?}): score {}, speed {}, {} frames",
            game.game_result,
            game.score,
            game.speed,
            game.frame_count
        );
        self.add_score(HighScoreEntry::from_game(game, timestamp))
    }

    pub fn load() -> Self {
        let scores: Self = persistence::load_json_or_default(HIGHSCORES_FILENAME);
        let scores = scores.normalized();
        log::debug!("Loaded {} high scores", scores.entries.len());
        scores
    }

    /// Hand-edited files may be out of order or too long.
    fn normalized(mut self) -> Self {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        self
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(HIGHSCORES_FILENAME, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Records the current run on the leaderboard at most once.
///
/// The main loop asks after every tick and again on exit; only the first
/// call for a finished run reaches the board. `reset` starts a new run.
#[derive(Debug, Default)]
pub struct RunRecorder {
    recorded: bool,
}

impl RunRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Returns the rank earned, `None` if the run is still going, was
    /// already recorded, or did not place.
    pub fn record(
        &mut self,
        game: &BarHopperGame,
        scores: &mut HighScores,
        timestamp: i64,
    ) -> Option<usize> {
        if self.recorded || game.game_result.is_none() {
            return None;
        }
        self.recorded = true;
        scores.record(game, timestamp)
    }

    pub fn reset(&mut self) {
        self.recorded = false;
    }
}

/// Format a timestamp relative to `now`: "Just now", "3 hours ago", or a date.
pub fn format_date(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return "N/A".to_string();
    };
    let diff = now.signed_duration_since(then);

    if diff.num_days() >= 7 {
        then.format("%Y-%m-%d").to_string()
    } else if diff.num_days() >= 2 {
        format!("{} days ago", diff.num_days())
    } else if diff.num_days() == 1 {
        "Yesterday".to_string()
    } else if diff.num_hours() >= 1 {
        match diff.num_hours() {
            1 => "1 hour ago".to_string(),
            h => format!("{} hours ago", h),
        }
    } else if diff.num_minutes() >= 1 {
        match diff.num_minutes() {
            1 => "1 min ago".to_string(),
            m => format!("{} mins ago", m),
        }
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BarHopperResult;

    fn entry(score: u32) -> HighScoreEntry {
        HighScoreEntry {
            score,
            speed: 3,
            frames: score as u64 * 30,
            timestamp: 0,
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry(10)), Some(1));
        assert_eq!(scores.add_score(entry(30)), Some(1));
        assert_eq!(scores.add_score(entry(20)), Some(2));

        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![30, 20, 10]);
        assert_eq!(scores.best(), 30);
    }

    #[test]
    fn test_tie_ranks_below_existing() {
        let mut scores = HighScores::new();
        scores.add_score(entry(10));
        assert_eq!(scores.add_score(entry(10)), Some(2));
    }

    #[test]
    fn test_full_board_trims_and_rejects() {
        let mut scores = HighScores::new();
        for score in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_score(entry(score));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Equal to the lowest doesn't make it
        assert!(!scores.qualifies(1));
        assert_eq!(scores.add_score(entry(1)), None);

        assert_eq!(scores.add_score(entry(100)), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 2);
    }

    #[test]
    fn test_best_empty() {
        let scores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_entry_from_game() {
        let mut game = BarHopperGame::default();
        game.score = 12;
        game.speed = 5;
        game.frame_count = 360;

        let entry = HighScoreEntry::from_game(&game, 1_700_000_000);
        assert_eq!(entry.score, 12);
        assert_eq!(entry.speed, 5);
        assert_eq!(entry.frames, 360);
        assert_eq!(entry.timestamp, 1_700_000_000);
    }

    fn finished_game(score: u32, result: BarHopperResult) -> BarHopperGame {
        let mut game = BarHopperGame::default();
        game.waiting_to_start = false;
        game.score = score;
        game.game_result = Some(result);
        game
    }

    #[test]
    fn test_record_skips_unfinished_run() {
        let mut scores = HighScores::new();
        let mut game = BarHopperGame::default();
        game.score = 9;
        assert_eq!(scores.record(&game, 0), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_recorder_crash_records_once() {
        let mut scores = HighScores::new();
        let mut recorder = RunRecorder::new();
        let game = finished_game(14, BarHopperResult::Crashed);

        assert_eq!(recorder.record(&game, &mut scores, 100), Some(1));
        assert!(recorder.is_recorded());
        // Later ticks and the exit key ask again
        assert_eq!(recorder.record(&game, &mut scores, 200), None);
        assert_eq!(recorder.record(&game, &mut scores, 300), None);

        assert_eq!(scores.entries.len(), 1);
        assert_eq!(scores.entries[0].score, 14);
        assert_eq!(scores.entries[0].timestamp, 100);
    }

    #[test]
    fn test_recorder_quit_records_once() {
        let mut scores = HighScores::new();
        let mut recorder = RunRecorder::new();
        let game = finished_game(6, BarHopperResult::Quit);

        assert_eq!(recorder.record(&game, &mut scores, 0), Some(1));
        assert_eq!(recorder.record(&game, &mut scores, 0), None);
        assert_eq!(scores.entries.len(), 1);
    }

    #[test]
    fn test_recorder_waits_for_game_over() {
        let mut scores = HighScores::new();
        let mut recorder = RunRecorder::new();
        let mut game = BarHopperGame::default();
        game.waiting_to_start = false;
        game.score = 3;

        assert_eq!(recorder.record(&game, &mut scores, 0), None);
        assert!(!recorder.is_recorded());

        game.game_result = Some(BarHopperResult::Crashed);
        assert_eq!(recorder.record(&game, &mut scores, 0), Some(1));
    }

    #[test]
    fn test_recorder_zero_score_not_kept() {
        let mut scores = HighScores::new();
        let mut recorder = RunRecorder::new();
        let game = finished_game(0, BarHopperResult::Crashed);

        assert_eq!(recorder.record(&game, &mut scores, 0), None);
        assert!(recorder.is_recorded());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_recorder_reset_for_restart() {
        let mut scores = HighScores::new();
        let mut recorder = RunRecorder::new();

        let first = finished_game(5, BarHopperResult::Crashed);
        assert_eq!(recorder.record(&first, &mut scores, 0), Some(1));

        recorder.reset();
        assert!(!recorder.is_recorded());

        let second = finished_game(8, BarHopperResult::Crashed);
        assert_eq!(recorder.record(&second, &mut scores, 0), Some(1));
        assert_eq!(recorder.record(&second, &mut scores, 0), None);

        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![8, 5]);
    }

    #[test]
    fn test_loaded_file_sorted_and_trimmed() {
        let unsorted: Vec<HighScoreEntry> = [4, 19, 1, 12, 7, 30, 2, 25, 9, 3, 16, 11]
            .into_iter()
            .map(entry)
            .collect();
        let json = serde_json::to_string(&HighScores { entries: unsorted }).unwrap();

        let parsed: HighScores = serde_json::from_str(&json).unwrap();
        let scores = parsed.normalized();

        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![30, 25, 19, 16, 12, 11, 9, 7, 4, 3]);
        assert_eq!(scores.best(), 30);
        assert!(!scores.qualifies(3));
    }

    #[test]
    fn test_format_date() {
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let ts = now.timestamp();

        assert_eq!(format_date(ts - 10, now), "Just now");
        assert_eq!(format_date(ts - 60, now), "1 min ago");
        assert_eq!(format_date(ts - 5 * 60, now), "5 mins ago");
        assert_eq!(format_date(ts - 3600, now), "1 hour ago");
        assert_eq!(format_date(ts - 3 * 3600, now), "3 hours ago");
        assert_eq!(format_date(ts - 86_400, now), "Yesterday");
        assert_eq!(format_date(ts - 3 * 86_400, now), "3 days ago");
        assert_eq!(format_date(ts - 30 * 86_400, now), "2023-10-15");
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let mut scores = HighScores::new();
        scores.add_score(entry(7));
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("\"score\":7"));
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, scores.entries);
    }
}
