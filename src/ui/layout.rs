//! Layout components (header, body split, status bar)

use crate::app::App;
use crate::contact::SubmissionStatus;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactField, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the single contact screen
pub struct ScreenLayout {
    pub header: Rect,
    pub profile: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Split the terminal into header, profile column, form column and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Contact details
            Constraint::Percentage(65), // Form
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        profile: columns[0],
        form: columns[1],
        status: rows[2],
    }
}

/// Draw the section header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Let's Work ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "Together",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Have a project in mind? Tell me about it.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.controller.status();
    let (dot, color) = match status {
        SubmissionStatus::Idle => (" ○ ", Color::Gray),
        SubmissionStatus::Submitting => (" ● ", Color::Yellow),
        SubmissionStatus::Succeeded => (" ● ", Color::Green),
        SubmissionStatus::Failed => (" ● ", Color::Red),
    };

    let mut spans = vec![
        Span::styled(dot, Style::default().fg(color)),
        Span::styled(status.label(), Style::default().fg(color)),
        Span::raw(" | "),
        Span::styled(get_hints(app.state.focus), Style::default().fg(Color::Gray)),
    ];

    let errors = app.controller.errors();
    if !errors.is_empty() {
        let fields: Vec<String> = errors.iter().map(|(field, _)| field.to_string()).collect();
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("check: {}", fields.join(", ")),
            Style::default().fg(Color::Red),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused element
fn get_hints(focus: Focus) -> String {
    match focus {
        Focus::Field(ContactField::Message) => {
            format!("Tab:next  Enter:newline  {SUBMIT_SHORTCUT}:send  Esc:dismiss")
        }
        Focus::Field(_) => format!("Tab/Enter:next  {SUBMIT_SHORTCUT}:send  Esc:dismiss"),
        Focus::Submit => format!("Enter/{SUBMIT_SHORTCUT}:send  Tab:next  Esc:dismiss"),
        Focus::Social(_) => "Enter:open  Tab:next  Esc:dismiss".to_string(),
    }
}
