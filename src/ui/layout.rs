//! Layout components (header, stepper, navigation, status bar)

use super::components::{render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::config::BRAND;
use crate::platform::{EXPORT_SHORTCUT, JUMP_SHORTCUT, REMOVE_ROW_SHORTCUT};
use crate::state::{FieldBinding, FieldKind, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions of the wizard, top to bottom
pub struct WizardLayout {
    pub header: Rect,
    pub stepper: Rect,
    pub main: Rect,
    pub nav: Rect,
}

/// Create the main layout; the last row is left for the status bar
pub fn create_layout(area: Rect) -> WizardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(3),             // Stepper
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Back / Next
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    WizardLayout {
        header: chunks[0],
        stepper: chunks[1],
        main: chunks[2],
        nav: chunks[3],
    }
}

/// Brand name with the wizard badge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let line = Line::from(vec![
        Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .fg(Color::White)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            " Presentation Wizard ",
            Style::default().fg(Color::Black).bg(theme.accent),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Numbered step indicator; the number is the Alt shortcut
pub fn draw_stepper(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_step();
    let mut spans = Vec::with_capacity(Step::COUNT * 2);
    for (idx, step) in Step::ALL.iter().enumerate() {
        let style = if *step == current {
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", idx + 1, step.label()), style));
        if idx + 1 < Step::COUNT {
            spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Back and Next controls, disabled at either end
pub fn draw_nav_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .split(area);

    let navigator = &app.state.navigator;
    render_nav_button(
        frame,
        chunks[0],
        "← Back  PgUp",
        !navigator.is_first(),
        app.theme.accent,
    );
    render_nav_button(
        frame,
        chunks[2],
        "Next →  PgDn",
        !navigator.is_last(),
        app.theme.accent,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}/{} ", app.state.navigator.current_index() + 1, Step::COUNT),
        Style::default().fg(app.theme.accent),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ));
    } else {
        let field_kind = app.state.form.active().map(|f| (f.binding, f.kind()));
        spans.push(Span::styled(
            field_hint(field_kind),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            format!(
                " │ Tab: field │ PgUp/PgDn: step │ {JUMP_SHORTCUT}: jump │ {REMOVE_ROW_SHORTCUT}: remove row │ {EXPORT_SHORTCUT}: export │ Ctrl+C: quit"
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

/// Input hint for the focused field
fn field_hint(field: Option<(FieldBinding, FieldKind)>) -> &'static str {
    match field {
        Some((FieldBinding::AttachmentPaths, _)) => "Enter: attach files",
        Some((_, FieldKind::Text { multiline: true })) => "Enter: new line",
        Some((_, FieldKind::Text { .. })) => "Type to edit",
        Some((_, FieldKind::Integer)) => "Digits only, empty = unset",
        Some((_, FieldKind::Decimal)) => "Amount, empty = unset",
        Some((_, FieldKind::Choice)) => "←/→: change",
        Some((_, FieldKind::Toggle)) => "Space: toggle",
        Some((_, FieldKind::Score)) => "←/→ or -/+: score",
        Some((_, FieldKind::Button)) => "Enter: activate",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormAction, TextField};

    #[test]
    fn test_layout_regions_stack() {
        let layout = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.stepper.y, 1);
        assert_eq!(layout.main.y, 4);
        assert_eq!(layout.nav.height, BUTTON_HEIGHT);
        assert_eq!(layout.nav.y + layout.nav.height, 39);
    }

    #[test]
    fn test_field_hint() {
        assert_eq!(
            field_hint(Some((FieldBinding::AttachmentPaths, FieldKind::Text { multiline: false }))),
            "Enter: attach files"
        );
        let notes = FieldBinding::Text(TextField::AdvisorNotes);
        assert_eq!(field_hint(Some((notes, notes.kind()))), "Enter: new line");
        let export = FieldBinding::Action(FormAction::Export);
        assert_eq!(field_hint(Some((export, export.kind()))), "Enter: activate");
        assert_eq!(field_hint(None), "");
    }
}
