//! UI module for rendering the TUI

mod components;
mod document;
mod falling;
mod forms;
mod layout;

pub use components::BUTTON_HEIGHT;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main = layout::create_layout(area);

    layout::draw_header(frame, main.header, app);
    layout::draw_menu(frame, main.menu, app);

    // Draw main content based on current section
    match app.state.section {
        Section::Contact => forms::draw_contact_form(frame, main.content, app),
        section => document::draw(frame, main.content, section),
    }

    // Falling items sit above the content, below dialogs
    if let Some(ref seasonal) = app.seasonal {
        falling::draw(frame, area, seasonal, app.animation_elapsed());
    }

    layout::draw_status_bar(frame, area, app);

    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
