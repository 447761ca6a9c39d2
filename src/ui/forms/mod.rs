//! Form rendering module
//!
//! - `field_renderer`: single field with its inline error
//! - `draw_contact_form`: the three fields plus the submit button

mod field_renderer;

pub use field_renderer::draw_field;

use super::components::{render_button, spinner_glyph, BUTTON_HEIGHT};
use crate::app::App;
use crate::contact::SubmissionStatus;
use crate::state::{ContactField, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form panel
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Send me a message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(inner);

    let form = app.controller.form();
    let errors = app.controller.errors();
    for (idx, field) in ContactField::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            form.field(*field),
            errors.get(*field),
            app.state.focus == Focus::Field(*field),
        );
    }

    let status = app.controller.status();
    let label = submit_label(status, app.state.frame);
    render_button(
        frame,
        chunks[3],
        &label,
        app.state.focus == Focus::Submit,
        !status.is_busy(),
    );
}

/// Submit button text; busy while a send is in flight
fn submit_label(status: SubmissionStatus, frame: usize) -> String {
    match status {
        SubmissionStatus::Submitting => format!("{} Sending...", spinner_glyph(frame)),
        SubmissionStatus::Failed => "Retry".to_string(),
        SubmissionStatus::Idle | SubmissionStatus::Succeeded => "Send message".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_shows_spinner_while_busy() {
        let label = submit_label(SubmissionStatus::Submitting, 0);
        assert!(label.starts_with(spinner_glyph(0)));
        assert!(label.ends_with("Sending..."));
    }

    #[test]
    fn test_submit_label_after_failure() {
        assert_eq!(submit_label(SubmissionStatus::Failed, 0), "Retry");
    }

    #[test]
    fn test_submit_label_idle() {
        assert_eq!(submit_label(SubmissionStatus::Idle, 7), "Send message");
    }
}
