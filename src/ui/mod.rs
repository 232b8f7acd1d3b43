//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod panels;
mod widgets;

use crate::app::App;
use crate::state::Step;
use components::render_error_dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header, app);
    layout::draw_stepper(frame, regions.stepper, app);
    draw_step(frame, regions.main, app);
    layout::draw_nav_buttons(frame, regions.nav, app);
    layout::draw_status_bar(frame, app);

    // Error dialog on top of everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(
            frame,
            message,
            app.state.pending_error_count(),
            app.theme.accent,
        );
    }
}

/// Form on the left; steps with a side panel get one on the right
fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let panel: Option<fn(&mut Frame, Rect, &App)> = match app.state.current_step() {
        Step::Options => Some(panels::draw_option_cards),
        Step::Advisor => Some(panels::draw_attachments),
        Step::Review => Some(panels::draw_review),
        _ => None,
    };

    let Some(panel) = panel else {
        forms::draw_step_form(frame, area, app);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    forms::draw_step_form(frame, chunks[0], app);
    panel(frame, chunks[1], app);
}
