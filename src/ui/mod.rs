//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, preview_area) = layout::create_layout(area, app.state.show_preview);

    forms::draw_signup(frame, form_area, app);
    if let Some(preview_area) = preview_area {
        preview::draw(frame, preview_area, app);
    }

    layout::draw_status_bar(frame, app);
}
