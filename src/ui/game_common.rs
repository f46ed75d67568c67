//! Frame pieces around the playfield: border, status lines, side panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the playfield for status and key hints.
const STATUS_ROWS: u16 = 2;

pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Draw the titled outer border and split what is inside it.
///
/// ```text
/// ┌─ Bar Hopper ───────────────────┬─ Info ─┐
/// │ playfield                      │        │
/// │ status / keys                  │        │
/// └────────────────────────────────┴────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, info_panel] = split(
        inner,
        Direction::Horizontal,
        [Constraint::Min(20), Constraint::Length(info_panel_width)],
    );
    let [content, status_bar] = split(
        left,
        Direction::Vertical,
        [
            Constraint::Min(content_min_height),
            Constraint::Length(STATUS_ROWS),
        ],
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// Status message on the first row, `[key] action` pairs on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let row = |offset: u16| Rect {
        y: area.y + offset,
        height: 1,
        ..area
    };

    frame.render_widget(
        Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center),
        row(0),
    );

    if area.height < STATUS_ROWS || controls.is_empty() {
        return;
    }
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        row(1),
    );
}

/// Bordered " Info " box; returns the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_layout_reserves_status_rows() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                let layout = create_game_layout(frame, area, " T ", Color::Cyan, 8, 22);
                assert_eq!(layout.status_bar.height, STATUS_ROWS);
                assert_eq!(layout.info_panel.width, 22);
                assert_eq!(
                    layout.content.bottom(),
                    layout.status_bar.y,
                    "status sits right under the playfield"
                );
            })
            .unwrap();
    }

    #[test]
    fn test_status_bar_lists_controls() {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                let controls = [("[A]", "Jump"), ("[B]", "Stop")];
                render_status_bar(frame, area, "Go", Color::Green, &controls);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Go"));
        assert!(text.contains("[A] Jump  [B] Stop"));
    }
}
