//! Contact details and social buttons

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Focus, SocialLink};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact information column
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),             // Details
            Constraint::Length(1),             // "Follow me"
            Constraint::Length(BUTTON_HEIGHT), // GitHub
            Constraint::Length(BUTTON_HEIGHT), // LinkedIn
            Constraint::Length(BUTTON_HEIGHT), // Twitter
            Constraint::Min(0),
        ])
        .split(inner);

    let profile = &app.state.profile;
    let icon = Style::default().fg(Color::Magenta);
    let details = vec![
        Line::from(vec![Span::styled("✉  ", icon), Span::raw(&profile.email)]),
        Line::from(""),
        Line::from(vec![Span::styled("☎  ", icon), Span::raw(&profile.phone)]),
        Line::from(""),
        Line::from(vec![Span::styled("⌖  ", icon), Span::raw(&profile.location)]),
    ];
    frame.render_widget(Paragraph::new(details), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Follow me",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    for (idx, link) in SocialLink::ALL.iter().enumerate() {
        render_button(
            frame,
            chunks[idx + 2],
            link.label(),
            app.state.focus == Focus::Social(*link),
            true,
        );
    }
}
