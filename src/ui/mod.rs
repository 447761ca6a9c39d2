//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod profile;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout::create_layout(area);

    layout::draw_header(frame, screen.header);
    profile::draw(frame, screen.profile, app);
    forms::draw_contact_form(frame, screen.form, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Notifications float above everything else
    let toasts = app.controller.notifier();
    if !toasts.is_empty() {
        components::render_toasts(frame, area, toasts.iter());
    }
}
