//! Terminal setup and teardown for the game screen.

use crossterm::cursor;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// If any step after raw mode fails, the terminal is put back before the
/// error is returned.
pub fn setup_terminal() -> io::Result<GameTerminal> {
    enable_raw_mode()?;
    match enter_screen() {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            if let Err(restore_err) = restore_terminal() {
                log::warn!("Terminal restore after failed setup: {}", restore_err);
            }
            Err(e)
        }
    }
}

fn enter_screen() -> io::Result<GameTerminal> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen and show the cursor.
pub fn restore_terminal() -> io::Result<()> {
    restore_with(&mut io::stdout(), disable_raw_mode)
}

/// Every step runs even when an earlier one fails; the first error wins.
fn restore_with<W, F>(out: &mut W, disable_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let raw = disable_raw();
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    let shown = out.execute(cursor::Show).map(|_| ());
    raw.and(screen).and(shown)
}

/// Restore the terminal before the default panic message is printed, so
/// the message lands on a usable screen.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
