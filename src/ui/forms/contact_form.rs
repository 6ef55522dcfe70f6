//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, ERROR_LINE_HEIGHT};
use crate::app::App;
use crate::platform::{SEND_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactForm, FieldId};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3 + ERROR_LINE_HEIGHT;

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // First + last name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Country code + phone
            Constraint::Min(FIELD_HEIGHT + 1), // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
        ])
        .margin(1)
        .split(area);

    let names = split_columns(rows[0], Constraint::Percentage(50));
    draw_form_field(frame, names[0], form, FieldId::FirstName);
    draw_form_field(frame, names[1], form, FieldId::LastName);

    draw_form_field(frame, rows[1], form, FieldId::Email);

    let phone_row = split_columns(rows[2], Constraint::Length(16));
    draw_form_field(frame, phone_row[0], form, FieldId::CountryCode);
    draw_form_field(frame, phone_row[1], form, FieldId::Phone);

    draw_form_field(frame, rows[3], form, FieldId::Message);

    let button_area = Rect {
        width: rows[4].width.min(30),
        ..rows[4]
    };
    render_button(
        frame,
        button_area,
        submit_label(app),
        form.is_submit_row_active(),
        form.submit_enabled() && !app.state.submission.is_sending(),
    );

    draw_help_text(
        frame,
        rows[5],
        &format!("Tab:next  ^U:clear  {SUBMIT_SHORTCUT} or {SEND_SHORTCUT}:send"),
    );
}

fn draw_form_field(frame: &mut Frame, area: Rect, form: &ContactForm, id: FieldId) {
    let field = form.field(id);
    let is_active = form.active_field_id() == Some(field.id);
    draw_field(frame, area, field, is_active);
}

fn split_columns(area: Rect, first: Constraint) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([first, Constraint::Min(0)])
        .split(area)
        .to_vec()
}

fn submit_label(app: &App) -> &'static str {
    if app.state.submission.is_sending() {
        "Sending..."
    } else if app.state.form.submit_enabled() {
        "Send message"
    } else {
        "Send message (disabled)"
    }
}
