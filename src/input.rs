//! Keyboard handling for the game screen.
//!
//! Maps crossterm key events onto game actions and decides what the main
//! loop should do next.

use crate::game::{process_input, BarHopperGame, BarHopperInput, BarHopperResult};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Start a fresh run.
    Restart,
    /// Leave the game.
    Exit,
}

/// Translate a key into a game action.
pub fn map_key(key: &KeyEvent) -> BarHopperInput {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down => BarHopperInput::Hop,
        KeyCode::Char('p') | KeyCode::Char('P') => BarHopperInput::Pause,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => BarHopperInput::Quit,
        _ => BarHopperInput::Other,
    }
}

/// Main dispatcher for game-screen input.
pub fn handle_game_input(key: KeyEvent, game: &mut BarHopperGame) -> InputResult {
    // Some terminals report releases and repeats too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // Ctrl-C counts as quitting; a run already over keeps its result
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        if game.game_result.is_none() {
            game.game_result = Some(BarHopperResult::Quit);
        }
        return InputResult::Exit;
    }

    // Game over screen: play again or leave
    if game.game_result.is_some() {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => InputResult::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Exit,
            _ => InputResult::Continue,
        };
    }

    process_input(game, map_key(&key));

    if game.game_result == Some(BarHopperResult::Quit) {
        InputResult::Exit
    } else {
        InputResult::Continue
    }
}
