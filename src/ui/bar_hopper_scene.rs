//! Bar Hopper game UI rendering.
//!
//! Uses a cell buffer: the 400×300 world is sampled onto the terminal
//! grid, each cell taking whatever world rectangle it covers, then stamped
//! row-by-row as a Paragraph.

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::core::constants::*;
use crate::game::{BarHopperGame, BarHopperResult, Rect as WorldRect};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BAR_CHAR: char = '─';
const BLOCK_CHAR: char = '█';

const CONTROLS: &[(&str, &str)] = &[("[Space]", "Hop"), ("[P]", "Pause"), ("[Q]", "Quit")];

/// Extra context the scene shows beside the game itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInfo {
    pub best_score: u32,
    /// Leaderboard rank earned by the finished run, if any.
    pub record_rank: Option<usize>,
}

/// Render the Bar Hopper game scene.
pub fn render_bar_hopper_scene(
    frame: &mut Frame,
    area: Rect,
    game: &BarHopperGame,
    info: &SceneInfo,
) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game, info);
        return;
    }

    let layout = create_game_layout(frame, area, " Bar Hopper ", Color::Cyan, 8, 22);

    render_play_field(frame, layout.content, game);

    if game.waiting_to_start {
        render_banner(frame, layout.content, "[ Press Space to Start ]", Color::White);
    } else if game.paused {
        render_banner(frame, layout.content, "[ Paused ]", Color::Yellow);
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, info);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// World interval `[start, end)` covered by cell `index` out of `cells`.
fn world_span(index: u16, cells: u16, world: i32) -> (i32, i32) {
    let cells = i64::from(cells.max(1));
    let start = (i64::from(index) * i64::from(world) / cells) as i32;
    let end = ((i64::from(index) + 1) * i64::from(world) / cells) as i32;
    (start, end.max(start + 1))
}

/// Stamp `ch` into every cell whose world rectangle overlaps `rect`.
fn paint(
    buffer: &mut [Vec<Cell>],
    cols: &[(i32, i32)],
    rows: &[(i32, i32)],
    rect: &WorldRect,
    cell: Cell,
) {
    for (row, &(y0, y1)) in rows.iter().enumerate() {
        for (col, &(x0, x1)) in cols.iter().enumerate() {
            if rect.intersects(&WorldRect::new(x0, y0, x1 - x0, y1 - y0)) {
                buffer[row][col] = cell;
            }
        }
    }
}

/// Render the playfield: bar, obstacles, player.
fn render_play_field(frame: &mut Frame, area: Rect, game: &BarHopperGame) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let cols: Vec<(i32, i32)> = (0..area.width)
        .map(|c| world_span(c, area.width, SCREEN_WIDTH))
        .collect();
    let rows: Vec<(i32, i32)> = (0..area.height)
        .map(|r| world_span(r, area.height, SCREEN_HEIGHT))
        .collect();

    let mut buffer = vec![vec![Cell::default(); area.width as usize]; area.height as usize];

    // ── Bar ──
    let bar = WorldRect::new(BAR_START_X, BAR_Y, BAR_END_X - BAR_START_X, 1);
    paint(
        &mut buffer,
        &cols,
        &rows,
        &bar,
        Cell {
            ch: BAR_CHAR,
            fg: Color::Gray,
        },
    );

    // ── Obstacles ──
    for obstacle in &game.obstacles {
        paint(
            &mut buffer,
            &cols,
            &rows,
            &obstacle.rect(),
            Cell {
                ch: BLOCK_CHAR,
                fg: Color::White,
            },
        );
    }

    // ── Player ──
    paint(
        &mut buffer,
        &cols,
        &rows,
        &game.player.rect(),
        Cell {
            ch: BLOCK_CHAR,
            fg: Color::Red,
        },
    );

    let lines: Vec<Line> = buffer
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| Span::styled(cell.ch.to_string(), Style::default().fg(cell.fg)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &BarHopperGame) {
    if game.waiting_to_start {
        render_status_bar(frame, area, "Press Space to start!", Color::Yellow, CONTROLS);
    } else if game.paused {
        render_status_bar(frame, area, "Paused - press P to resume", Color::Yellow, CONTROLS);
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            CONTROLS,
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &BarHopperGame, info: &SceneInfo) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                info.best_score.max(game.score).to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(game.speed.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Flow:  ", label),
            Span::styled(game.direction.arrow(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Flip in ", label),
            Span::styled(
                game.points_until_reversal().to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One bold line a quarter of the way down the playfield, over the bar.
fn render_banner(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let width = text.chars().count() as u16;
    if area.height < 3 || area.width < width {
        return;
    }
    let spot = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 4,
        width,
        1,
    );
    frame.render_widget(Clear, spot);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        spot,
    );
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &BarHopperGame, info: &SceneInfo) {
    let (title, message, mut accent) = match game.game_result {
        Some(BarHopperResult::Crashed) => (
            "CRASH!",
            format!("You hopped for {} points before crashing.", game.score),
            Color::Red,
        ),
        Some(BarHopperResult::Quit) => (
            "QUIT",
            format!("You left with {} points.", game.score),
            Color::Gray,
        ),
        None => return,
    };

    let standing = match info.record_rank {
        Some(1) => {
            accent = Color::Green;
            "New high score!".to_string()
        }
        Some(rank) => format!("Rank #{} on the leaderboard", rank),
        None => format!("Best: {}", info.best_score),
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(standing, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Play again  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let height = (lines.len() as u16).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(inner.x, top, inner.width, height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Obstacle, Side};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(game: &BarHopperGame, info: &SceneInfo) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_bar_hopper_scene(frame, area, game, info);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_world_span_covers_world() {
        assert_eq!(world_span(0, 40, 400), (0, 10));
        assert_eq!(world_span(39, 40, 400), (390, 400));
        // Cells never collapse to zero width
        let (start, end) = world_span(0, 1000, 400);
        assert!(end > start);
    }

    #[test]
    fn test_waiting_screen() {
        let game = BarHopperGame::default();
        let screen = render_to_string(&game, &SceneInfo::default());
        assert!(screen.contains("Press Space to Start"));
        assert!(screen.contains("Bar Hopper"));
        assert!(screen.contains(BAR_CHAR));
    }

    #[test]
    fn test_running_screen_shows_score() {
        let mut game = BarHopperGame::default();
        game.waiting_to_start = false;
        game.score = 17;
        game.obstacles.push(Obstacle::new(300, Side::Above));
        let screen = render_to_string(&game, &SceneInfo::default());
        assert!(screen.contains("Score: 17"));
        assert!(screen.contains(BLOCK_CHAR));
    }

    #[test]
    fn test_paused_banner() {
        let mut game = BarHopperGame::default();
        game.waiting_to_start = false;
        game.paused = true;
        let screen = render_to_string(&game, &SceneInfo::default());
        assert!(screen.contains("Paused"));
    }

    #[test]
    fn test_game_over_record() {
        let mut game = BarHopperGame::default();
        game.score = 40;
        game.game_result = Some(BarHopperResult::Crashed);
        let info = SceneInfo {
            best_score: 40,
            record_rank: Some(1),
        };
        let screen = render_to_string(&game, &info);
        assert!(screen.contains("CRASH!"));
        assert!(screen.contains("New high score!"));
    }

    #[test]
    fn test_game_over_quit_with_rank() {
        let mut game = BarHopperGame::default();
        game.score = 6;
        game.game_result = Some(BarHopperResult::Quit);
        let info = SceneInfo {
            best_score: 40,
            record_rank: Some(4),
        };
        let screen = render_to_string(&game, &info);
        assert!(screen.contains("QUIT"));
        assert!(screen.contains("You left with 6 points."));
        assert!(screen.contains("Rank #4 on the leaderboard"));
        assert!(screen.contains("[R] Play again"));
    }
}
