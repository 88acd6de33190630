//! Layout components (content split, status bar)

use crate::app::App;
use crate::platform;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and the optional preview panel,
/// reserving the bottom line for the status bar
pub fn create_layout(area: Rect, show_preview: bool) -> (Rect, Option<Rect>) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    let content = vertical[0];

    if !show_preview {
        return (content, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(48),    // Form
            Constraint::Length(44), // Preview panel
        ])
        .split(content);

    (chunks[0], Some(chunks[1]))
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(
            " Tab: next field  Space: toggle  {}: submit  Esc: quit",
            platform::SUBMIT_SHORTCUT
        ),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
