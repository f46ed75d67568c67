//! Command-line arguments.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the game, optionally with a fixed rng seed.
    Play { seed: Option<u64> },
    /// Print the high score table.
    Scores,
    Version,
    Help,
}

pub const USAGE: &str = "Bar Hopper - Terminal Arcade Dodger

Usage: barhopper [command] [options]

Commands:
  scores         Show the high score table

Options:
  --seed <n>     Play a reproducible run
  --version, -v  Show version information
  --help, -h     Show this help message

Controls:
  Space/Up/Down  Hop across the bar
  P              Pause
  Q/Esc          Quit";

/// Parse arguments (without the program name).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, String> {
    let mut seed = None;
    let mut iter = args.iter().map(|s| s.as_ref());

    while let Some(arg) = iter.next() {
        match arg {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "scores" => return Ok(Command::Scores),
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                seed = Some(parsed);
            }
            other => return Err(format!("Unknown command: {}", other)),
        }
    }

    Ok(Command::Play { seed })
}
