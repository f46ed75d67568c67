pub mod bar_hopper_scene;
pub mod game_common;

use crate::game::BarHopperGame;
use bar_hopper_scene::{render_bar_hopper_scene, SceneInfo};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the scene is drawn in.
const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 14;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &BarHopperGame, info: &SceneInfo) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let message = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        let y = size.height / 2;
        frame.render_widget(message, Rect::new(0, y, size.width, 1.min(size.height)));
        return;
    }

    render_bar_hopper_scene(frame, size, game, info);
}
