//! Layout components (header, menu, status bar)

use super::components::{render_menu_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Section, SubmissionState, HEADER_HEIGHT, MENU_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title shown in the header
pub const TITLE: &str = "DegenVets";

/// Areas of the main layout
pub struct MainLayout {
    pub header: Rect,
    pub menu: Rect,
    pub content: Rect,
}

/// Split the screen into header, menu column, content and the status bar row
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(MENU_WIDTH), // Menu
            Constraint::Min(0),             // Main content
        ])
        .split(rows[1]);

    MainLayout {
        header: rows[0],
        menu: body[0],
        content: body[1],
    }
}

/// Draw the header with the wave-animated title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    render_header(frame, area, app.wave.row_offset());
}

/// Draw the header box with the title shifted `row_offset` rows from the middle
fn render_header(frame: &mut Frame, area: Rect, row_offset: i16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let title_area = Rect {
        y: inner.y + title_row(inner.height, row_offset),
        height: 1,
        ..inner
    };

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);
}

/// Row of the title inside a header of `inner_height` rows, clamped to the box
fn title_row(inner_height: u16, row_offset: i16) -> u16 {
    let middle = i32::from(inner_height / 2);
    let last = i32::from(inner_height.saturating_sub(1));
    (middle + i32::from(row_offset)).clamp(0, last) as u16
}

/// Draw the menu with boxed buttons
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = Section::ALL
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, section) in Section::ALL.iter().enumerate() {
        render_menu_button(
            frame,
            chunks[idx],
            section.key_hint(),
            section.label(),
            app.state.section == *section,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission status
    let submission = match app.state.submission {
        SubmissionState::Idle => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionState::Sending { .. } => {
            Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
        }
    };
    spans.push(submission);

    spans.push(Span::styled(
        get_section_hints(app.state.section),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current section
fn get_section_hints(section: Section) -> &'static str {
    match section {
        Section::Contact => "Tab:next field  F2-F4:documents",
        Section::Whitepaper | Section::DevDocs | Section::Policy => {
            "Esc:back to form  F1:contact"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WaveState;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_layout_reserves_header_menu_and_status() {
        let layout = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.menu.width, MENU_WIDTH);
        assert_eq!(layout.menu.y, HEADER_HEIGHT);
        assert_eq!(layout.content.x, MENU_WIDTH);
        assert_eq!(layout.content.height, 40 - HEADER_HEIGHT - 1);
    }

    fn rendered_title_row(row_offset: i16) -> Option<u16> {
        let width = 40;
        let backend = TestBackend::new(width, HEADER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_header(frame, frame.area(), row_offset))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..HEADER_HEIGHT).find(|&y| {
            let row: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
            row.contains(TITLE)
        })
    }

    #[test]
    fn test_title_rests_in_the_middle() {
        assert_eq!(rendered_title_row(0), Some(2));
    }

    #[test]
    fn test_wave_moves_title_up_then_down() {
        let rows: Vec<Option<u16>> = [500, 990, 2000]
            .into_iter()
            .map(|ms| rendered_title_row(WaveState::row_offset_at(Duration::from_millis(ms))))
            .collect();
        assert_eq!(rows, vec![Some(1), Some(3), Some(2)]);
    }

    #[test]
    fn test_title_row_is_clamped_to_the_box() {
        assert_eq!(title_row(3, -4), 0);
        assert_eq!(title_row(3, 4), 2);
        assert_eq!(title_row(1, 1), 0);
    }

    #[test]
    fn test_hints_differ_per_section() {
        assert_ne!(
            get_section_hints(Section::Contact),
            get_section_hints(Section::Policy)
        );
    }
}
