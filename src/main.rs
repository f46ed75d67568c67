use barhopper::cli::{self, Command};
use barhopper::core::config::GameConfig;
use barhopper::game::{tick, BarHopperGame};
use barhopper::highscores::{self, HighScores, RunRecorder};
use barhopper::input::{handle_game_input, InputResult};
use barhopper::ui::bar_hopper_scene::SceneInfo;
use barhopper::ui::draw_ui;
use barhopper::utils::{build_info, logging, terminal};
use barhopper::REALTIME_POLL_MS;
use chrono::Utc;
use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let seed = match cli::parse_args(&args) {
        Ok(Command::Play { seed }) => seed,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(Command::Scores) => {
            print_scores(&HighScores::load());
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'barhopper --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("Starting {}", build_info::version_line());

    if let Err(e) = GameConfig::save_default_if_missing() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = GameConfig::load();
    log::info!("Config: {:?}", config);

    let mut rng = match seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut scores = HighScores::load();

    terminal::install_panic_hook();
    let mut term = terminal::setup_terminal()?;

    let result = run_game(&mut term, &config, &mut rng, &mut scores);
    let restored = terminal::restore_terminal();

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    if let Err(e) = &restored {
        log::error!("Terminal restore failed: {}", e);
    }
    result.and(restored)?;

    println!("Thanks for playing! Best score: {}", scores.best());
    Ok(())
}

/// Run games until the player exits.
fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &GameConfig,
    rng: &mut StdRng,
    scores: &mut HighScores,
) -> io::Result<()> {
    let mut game = BarHopperGame::new(config);
    let mut info = SceneInfo {
        best_score: scores.best(),
        record_rank: None,
    };
    let mut recorder = RunRecorder::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &game, &info))?;

        if event::poll(Duration::from_millis(REALTIME_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match handle_game_input(key_event, &mut game) {
                    InputResult::Continue => {}
                    InputResult::Restart => {
                        log::info!("Restarting");
                        game = BarHopperGame::new(config);
                        info = SceneInfo {
                            best_score: scores.best(),
                            record_rank: None,
                        };
                        recorder.reset();
                    }
                    InputResult::Exit => {
                        record_run(&mut recorder, &game, scores);
                        return Ok(());
                    }
                }
            }
        }

        // Advance by whole elapsed milliseconds; the remainder carries over
        let elapsed_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(elapsed_ms);
        tick(&mut game, elapsed_ms, rng);

        if game.game_result.is_some() && !recorder.is_recorded() {
            info.record_rank = record_run(&mut recorder, &game, scores);
            info.best_score = scores.best();
        }
    }
}

/// Record a finished run once and persist the board if it placed.
fn record_run(
    recorder: &mut RunRecorder,
    game: &BarHopperGame,
    scores: &mut HighScores,
) -> Option<usize> {
    let rank = recorder.record(game, scores, Utc::now().timestamp())?;
    if let Err(e) = scores.save() {
        log::warn!("Could not save high scores: {}", e);
    }
    Some(rank)
}

fn print_scores(scores: &HighScores) {
    if scores.is_empty() {
        println!("No high scores yet. Go hop!");
        return;
    }

    let now = Utc::now();
    println!("{:>4}  {:>6}  {:>5}  {:>7}  When", "Rank", "Score", "Speed", "Frames");
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>4}  {:>6}  {:>5}  {:>7}  {}",
            i + 1,
            entry.score,
            entry.speed,
            entry.frames,
            highscores::format_date(entry.timestamp, now)
        );
    }
}
