//! Document sections (whitepaper, dev docs, policy)

use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the panel for a document section
pub fn draw(frame: &mut Frame, area: Rect, section: Section) {
    let link = section.link().unwrap_or_default();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Document: "),
            Span::styled(link, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc or F1 to return to the contact form.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", section.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
