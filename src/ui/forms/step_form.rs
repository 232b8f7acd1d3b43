//! Field list of the current step

use super::field_renderer::field_item;
use crate::app::App;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw every field of the current step, scrolled to keep focus visible
pub fn draw_step_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let profile = &app.state.profile;
    let step = app.state.current_step();

    let items: Vec<ListItem> = form
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            field_item(
                field,
                form.display_value(idx, profile),
                idx,
                idx == form.active_field_index,
                &app.theme,
            )
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", step.heading()),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));

    render_scrollable_list(frame, area, List::new(items).block(block), form.active_field_index);
}
