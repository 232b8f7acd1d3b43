//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: String,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint line at the bottom, e.g. how to dismiss
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog".to_string(),
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Size of a dialog holding `lines` of wrapped text, clamped to `area`
fn dialog_rect(area: Rect, content_width: u16, line_count: u16, has_hint: bool, max_width: u16) -> Rect {
    let padding = 4u16;
    let width = (content_width + padding + 2).min(max_width).min(area.width);
    // title + blank + message + (blank + hint) + borders
    let hint_lines = if has_hint { 2 } else { 0 };
    let height = (2 + line_count + hint_lines + 2).max(5).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let max_line_width = config.max_width.saturating_sub(4) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_area = dialog_rect(
        area,
        content_width,
        wrapped_lines.len() as u16,
        config.hint.is_some(),
        config.max_width,
    );

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text on word boundaries to at most `max_width` characters per line
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("failed to read /tmp/quote.pdf: missing", 20);
        assert_eq!(lines, vec!["failed to read", "/tmp/quote.pdf:", "missing"]);
    }

    #[test]
    fn test_wrap_text_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_counts_characters() {
        let lines = wrap_text("ééééé ééééé", 11);
        assert_eq!(lines, vec!["ééééé ééééé"]);
    }

    #[test]
    fn test_dialog_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = dialog_rect(area, 20, 2, true, 60);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 8);
        assert_eq!(rect.x, 27);
        assert_eq!(rect.y, 8);

        let tiny = dialog_rect(Rect::new(0, 0, 10, 4), 50, 10, true, 60);
        assert_eq!(tiny.width, 10);
        assert_eq!(tiny.height, 4);
    }
}
