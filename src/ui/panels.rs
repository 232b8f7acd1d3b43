//! Side panels: option cards, attachments and the review preview

use crate::app::App;
use crate::export::ReviewSummary;
use crate::state::{Attachment, PlanOption, Risk};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 6;

fn risk_color(risk: Risk) -> Color {
    match risk {
        Risk::Low => Color::Green,
        Risk::Medium => Color::Yellow,
        Risk::High => Color::Red,
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.replace('\n', " "),
        _ => "—".to_string(),
    }
}

/// Card body for one option
fn option_card_lines(option: &PlanOption) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw("Risk "),
            Span::styled(
                format!(" {} ", option.risk.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(risk_color(option.risk)),
            ),
            Span::raw(format!("   Score {}/10", option.score)),
        ]),
        Line::from(format!("Guarantees: {}", or_dash(option.guarantees.as_deref()))),
        Line::from(format!("Results: {}", or_dash(option.result_summary.as_deref()))),
    ]
}

/// Options at a glance: one card per option
pub fn draw_option_cards(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .title(" At a glance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let options = &app.state.profile.options;
    if options.is_empty() {
        frame.render_widget(
            Paragraph::new("No options yet").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let mut constraints: Vec<Constraint> = options
        .iter()
        .take(visible)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (option, chunk) in options.iter().take(visible).zip(chunks.iter()) {
        let card = Paragraph::new(option_card_lines(option))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", option.display_name()),
                        Style::default()
                            .fg(app.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(card, *chunk);
    }
}

fn attachment_lines(files: &[Attachment]) -> Vec<Line<'static>> {
    if files.is_empty() {
        return vec![Line::from(Span::styled(
            "No files attached",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    files
        .iter()
        .enumerate()
        .map(|(i, file)| Line::from(format!("{}. {}", i + 1, file.name)))
        .collect()
}

/// Attached illustration files by name
pub fn draw_attachments(frame: &mut Frame, area: Rect, app: &App) {
    let files = &app.state.profile.illustration_files;
    let block = Block::default()
        .title(format!(" Illustrations ({}) ", files.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));
    frame.render_widget(Paragraph::new(attachment_lines(files)).block(block), area);
}

/// What the export will contain, plus the attachment list
pub fn draw_review(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let summary = ReviewSummary::from_profile(&app.state.profile);
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(format!("Client: {}", summary.name)),
        Line::from(format!("Date: {}", summary.date)),
        Line::from(""),
        Line::from(Span::styled("Priorities:", heading)),
        Line::from(summary.priorities_line()),
        Line::from(""),
        Line::from(Span::styled("Options:", heading)),
    ];
    lines.extend(summary.option_lines().into_iter().map(Line::from));
    if let Some(path) = &app.state.last_export {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Last export: {}", path.display()),
            Style::default().fg(Color::Green),
        )));
    }

    let preview = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Export preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.primary)),
    );
    frame.render_widget(preview, chunks[0]);
    draw_attachments(frame, chunks[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Score;
    use pretty_assertions::assert_eq;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_option_card_falls_back_to_dashes() {
        let option = PlanOption {
            risk: Risk::High,
            score: Score::new(8),
            ..PlanOption::new()
        };
        assert_eq!(option.display_name(), "Unnamed Option");
        assert_eq!(
            text(&option_card_lines(&option)),
            vec![
                "Risk  High    Score 8/10",
                "Guarantees: —",
                "Results: —"
            ]
        );
    }

    #[test]
    fn test_option_card_flattens_multiline_notes() {
        let option = PlanOption {
            guarantees: Some("Floor\nof 3%".to_string()),
            result_summary: Some("   ".to_string()),
            ..PlanOption::new()
        };
        let lines = text(&option_card_lines(&option));
        assert_eq!(lines[1], "Guarantees: Floor of 3%");
        assert_eq!(lines[2], "Results: —");
    }

    #[test]
    fn test_attachment_lines() {
        assert_eq!(text(&attachment_lines(&[])), vec!["No files attached"]);
        let files = vec![
            Attachment {
                name: "a.pdf".to_string(),
                data: String::new(),
            },
            Attachment {
                name: "b.png".to_string(),
                data: String::new(),
            },
        ];
        assert_eq!(text(&attachment_lines(&files)), vec!["1. a.pdf", "2. b.png"]);
    }
}
