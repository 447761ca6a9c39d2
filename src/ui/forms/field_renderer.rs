//! Field rendering utilities for forms

use crate::state::{FieldError, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field, with its validation error (if any) in the border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<FieldError>,
    is_active: bool,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let value_style = if field.as_text().is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    };

    // Placeholder only while unfocused, so the cursor sits at the start
    let display_value = if field.as_text().is_empty() && is_active {
        ""
    } else {
        field.display_value()
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = display_value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    let content = Paragraph::new(lines).block(block);
    let content = if field.is_multiline {
        content.wrap(Wrap { trim: false })
    } else {
        content
    };
    frame.render_widget(content, area);
}
