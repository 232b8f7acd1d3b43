//! Field rendering utilities for forms

use crate::config::Theme;
use crate::state::{FieldKind, FormField};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::ListItem,
};

const CURSOR: &str = "▌";

/// Build the list row for one field, with its section heading when it starts a group
pub fn field_item(
    field: &FormField,
    value: String,
    index: usize,
    is_active: bool,
    theme: &Theme,
) -> ListItem<'static> {
    ListItem::new(Text::from(field_lines(field, value, index, is_active, theme)))
}

fn field_lines(
    field: &FormField,
    value: String,
    index: usize,
    is_active: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(section) = &field.section {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            section.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let marker = if is_active { "▸ " } else { "  " };
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let empty_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(if is_active { CURSOR } else { "" }, value_style);

    match field.kind() {
        FieldKind::Button => {
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.accent)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[ {} ]", field.label), style),
            ]));
        }
        FieldKind::Toggle => {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(value, value_style),
                Span::raw(" "),
                Span::styled(field.label.clone(), label_style),
            ]));
        }
        FieldKind::Text { multiline: true } => {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}:", field.label), label_style),
            ]));
            if value.is_empty() && !is_active {
                lines.push(Line::from(Span::styled("    (empty)", empty_style)));
            } else {
                let mut body: Vec<Line<'static>> = value
                    .split('\n')
                    .map(|l| Line::from(Span::styled(format!("    {l}"), value_style)))
                    .collect();
                if let Some(last) = body.last_mut() {
                    last.spans.push(cursor);
                }
                lines.extend(body);
            }
        }
        kind => {
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label), label_style),
            ];
            match kind {
                FieldKind::Choice if is_active => {
                    spans.push(Span::styled(format!("‹ {value} ›"), value_style));
                }
                FieldKind::Choice => spans.push(Span::styled(value, value_style)),
                FieldKind::Score => {
                    spans.push(Span::styled(score_bar(&value), Style::default().fg(theme.accent)));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(value, value_style));
                }
                _ if value.is_empty() && !is_active => {
                    spans.push(Span::styled("(empty)", empty_style));
                }
                _ => {
                    spans.push(Span::styled(value, value_style));
                    spans.push(cursor);
                }
            }
            lines.push(Line::from(spans));
        }
    }

    lines
}

/// Ten-cell gauge for a `n/10` score
fn score_bar(value: &str) -> String {
    let filled = value
        .split('/')
        .next()
        .and_then(|n| n.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(10);
    format!("{}{}", "■".repeat(filled), "□".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Checklist, FieldBinding, FormAction, TextField};

    fn rendered(field: &FormField, value: &str, index: usize, active: bool) -> Vec<String> {
        field_lines(field, value.to_string(), index, active, &Theme::brand())
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar("3/10"), "■■■□□□□□□□");
        assert_eq!(score_bar("10/10"), "■■■■■■■■■■");
        assert_eq!(score_bar("junk"), "□□□□□□□□□□");
    }

    #[test]
    fn test_item_height_includes_section_gap() {
        let theme = Theme::brand();
        let field = FormField::new("Name", FieldBinding::Text(TextField::SpouseName)).in_section("Spouse");
        assert_eq!(field_item(&field, String::new(), 0, false, &theme).height(), 2);
        assert_eq!(field_item(&field, String::new(), 5, false, &theme).height(), 3);
        assert_eq!(
            rendered(&field, "", 5, false),
            vec!["", "Spouse", "  Name: (empty)"]
        );
    }

    #[test]
    fn test_multiline_item_height_follows_value() {
        let theme = Theme::brand();
        let field = FormField::new("Notes", FieldBinding::Text(TextField::AdvisorNotes));
        assert_eq!(field_item(&field, "a\nb\nc".to_string(), 0, true, &theme).height(), 4);
        assert_eq!(field_item(&field, String::new(), 0, false, &theme).height(), 2);
    }

    #[test]
    fn test_button_is_single_line() {
        let field = FormField::button("Export PDF", FormAction::Export);
        assert_eq!(rendered(&field, "", 0, true), vec!["▸ [ Export PDF ]"]);
    }

    #[test]
    fn test_active_text_shows_cursor() {
        let field = FormField::new("Name", FieldBinding::Text(TextField::Name));
        assert_eq!(rendered(&field, "Jane", 0, true), vec!["▸ Name: Jane▌"]);
    }

    #[test]
    fn test_toggle_puts_box_before_label() {
        let field = FormField::new(
            "Buy/Sell",
            FieldBinding::Checklist(Checklist::BusinessInterests, "Buy/Sell"),
        );
        assert_eq!(rendered(&field, "[x]", 1, false), vec!["  [x] Buy/Sell"]);
    }
}
