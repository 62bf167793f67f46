//! Paint layer: translate the model's grid, status text, and cursor position
//! into terminal output via ratatui.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::ui::status;

/// Draw one frame: status bar on the top row, the document grid below it,
/// and the terminal cursor at the renderer-computed position.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let width = model.geometry.cols() as u16;
    let bar_area = Rect::new(0, 0, width.min(area.width), 1.min(area.height));

    let bar = Paragraph::new(model.bar_text())
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, bar_area);

    let rows = model.grid.rows().min(area.height.saturating_sub(1) as usize);
    let lines: Vec<Line> = (0..rows).map(|r| Line::raw(model.grid.row_text(r))).collect();
    let text_area = Rect::new(
        0,
        1,
        width.min(area.width),
        u16::try_from(rows).unwrap_or(u16::MAX),
    );
    frame.render_widget(Paragraph::new(lines), text_area);

    frame.set_cursor_position(cursor_position(model));
}

/// Where the terminal cursor goes: the end of the entered name while the
/// filename prompt is active, the renderer-computed cell otherwise.
fn cursor_position(model: &Model) -> Position {
    if let Some(entered) = model.prompt.as_deref() {
        let x = status::PREFIX.len() + entered.len();
        return Position {
            x: u16::try_from(x).unwrap_or(u16::MAX),
            y: 0,
        };
    }
    Position {
        x: u16::try_from(model.cursor_pos.col).unwrap_or(u16::MAX),
        y: u16::try_from(model.cursor_pos.row + 1).unwrap_or(u16::MAX),
    }
}
