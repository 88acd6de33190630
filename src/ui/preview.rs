//! Live JSON panes mirroring the form values and error map

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde::Serialize;

/// Draw the values and errors panes
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let values_block = Block::default()
        .title(" Form Inputs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(pretty_json(&app.state.form.values))
            .wrap(Wrap { trim: false })
            .block(values_block),
        chunks[0],
    );

    let errors = &app.state.form.errors;
    let errors_border = if errors.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };
    let errors_block = Block::default()
        .title(" Form Errors ")
        .borders(Borders::ALL)
        .border_style(errors_border);
    frame.render_widget(
        Paragraph::new(pretty_json(errors))
            .wrap(Wrap { trim: false })
            .block(errors_block),
        chunks[1],
    );
}

fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
