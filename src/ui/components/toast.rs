//! Toast notifications stacked in the top-right corner

use crate::contact::Severity;
use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Render toasts newest-first from the top of `area`
pub fn render_toasts<'a>(frame: &mut Frame, area: Rect, toasts: impl Iterator<Item = &'a Toast>) {
    let width = TOAST_WIDTH.min(area.width);
    let padding = 4u16; // 1 char padding + border on each side
    let max_line_width = width.saturating_sub(padding) as usize;
    let mut y = area.y + 1;

    for toast in toasts {
        let notification = &toast.notification;
        let wrapped = wrap_text(&notification.message, max_line_width);
        let height = wrapped.len() as u16 + 3; // title + message lines + borders
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };
        frame.render_widget(Clear, toast_area);

        let color = severity_color(notification.severity);
        let mut content = vec![Line::from(Span::styled(
            notification.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        content.extend(wrapped.into_iter().map(Line::from));

        let widget = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            )
            .style(Style::default().bg(Color::Black));
        frame.render_widget(widget, toast_area);

        y += height;
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("Correct the highlighted fields", 40), vec![
            "Correct the highlighted fields".to_string()
        ]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Your message could not be sent", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "Your message could not be sent");
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\nb", 10).len(), 2);
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        let lines = wrap_text("hi supercalifragilistic", 5);
        assert_eq!(lines, vec!["hi".to_string(), "supercalifragilistic".to_string()]);
    }
}
