//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the inline error under each field
pub const ERROR_LINE_HEIGHT: u16 = 1;

fn border_color(field: &FormField, is_active: bool) -> Color {
    match (field.invalid, is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Draw a form field box with its inline error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(ERROR_LINE_HEIGHT)])
        .split(area);

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let display_value = field.display_value();
    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    let error = Paragraph::new(Span::styled(
        format!(" {}", field.error),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error, chunks[1]);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;

    #[test]
    fn test_invalid_field_is_red_even_when_active() {
        let mut field = FormField::text(FieldId::Email, false);
        field.set_error("Please enter a valid email address");
        assert_eq!(border_color(&field, true), Color::Red);
        assert_eq!(border_color(&field, false), Color::Red);
    }

    #[test]
    fn test_valid_field_follows_focus() {
        let field = FormField::text(FieldId::Email, false);
        assert_eq!(border_color(&field, true), Color::Cyan);
        assert_eq!(border_color(&field, false), Color::DarkGray);
    }
}
