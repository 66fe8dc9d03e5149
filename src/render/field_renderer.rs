//! Field rendering utilities for forms

use crate::forms::{FormData, FormField, Widget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn option_line<'a>(marker: &'a str, label: &'a str, selected: bool) -> Line<'a> {
    let style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![Span::styled(marker, style), Span::raw(" "), Span::styled(label, style)])
}

/// Lines showing the field's options or submitted text
pub fn value_lines<'a>(field: &'a FormField, values: &'a [String]) -> Vec<Line<'a>> {
    let is_selected = |key: &str| values.iter().any(|v| v.trim() == key);

    match field.widget {
        Widget::RadioSelect => field
            .choices
            .iter()
            .map(|c| {
                let selected = is_selected(&c.key);
                option_line(if selected { "(•)" } else { "( )" }, &c.label, selected)
            })
            .collect(),
        Widget::CheckboxSelectMultiple => field
            .choices
            .iter()
            .map(|c| {
                let selected = is_selected(&c.key);
                option_line(if selected { "[x]" } else { "[ ]" }, &c.label, selected)
            })
            .collect(),
        Widget::Select => {
            let current = values
                .last()
                .and_then(|key| field.choice_label(key.trim()))
                .unwrap_or("(none)");
            vec![Line::from(vec![
                Span::styled("▾ ", Style::default().fg(Color::Cyan)),
                Span::raw(current),
                Span::styled(
                    format!("  ({} options)", field.choices.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])]
        }
        Widget::TextInput | Widget::Textarea | Widget::Hidden => {
            let text = values.last().map(String::as_str).unwrap_or("");
            if text.is_empty() {
                vec![Line::from(Span::styled(
                    "(empty)",
                    Style::default().fg(Color::DarkGray),
                ))]
            } else {
                text.lines().map(Line::from).collect()
            }
        }
    }
}

fn error_lines(errors: &[String]) -> Vec<Line<'_>> {
    errors
        .iter()
        .map(|e| Line::from(Span::styled(format!("! {e}"), Style::default().fg(Color::Red))))
        .collect()
}

/// Rows needed to draw a field, borders included
pub fn field_height(field: &FormField, values: &[String], errors: &[String]) -> u16 {
    let content = value_lines(field, values).len().max(1) + errors.len();
    u16::try_from(content + 2).unwrap_or(u16::MAX)
}

/// Draw a visible form field with its current value and errors
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    values: &[String],
    errors: &[String],
) {
    let border_style = if errors.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };

    let mut lines = value_lines(field, values);
    lines.extend(error_lines(errors));

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Summarize hidden fields in a single line
pub fn draw_hidden_summary(frame: &mut Frame, area: Rect, fields: &[&FormField], data: &FormData) {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{}={}", f.name, data.get(f.name).unwrap_or("-")))
        .collect();
    let paragraph = Paragraph::new(format!("hidden: {}", parts.join(", ")))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Choice, PartOfSpeech};

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_radio_marks_selected() {
        let field = FormField::yes_no("pro", "Pro?");
        let values = ["False".to_string()];
        let lines = value_lines(&field, &values);
        assert_eq!(text_of(&lines), vec!["( ) Yes", "(•) No"]);
    }

    #[test]
    fn test_checkboxes_mark_each_selected() {
        let field = FormField::multiple_choice("pos", "POS", PartOfSpeech::options());
        let values = ["N".to_string(), "O".to_string()];
        let lines = value_lines(&field, &values);
        let text = text_of(&lines);
        assert_eq!(text.len(), 6);
        assert_eq!(text[0], "[x] Nouns");
        assert_eq!(text[1], "[ ] Adjectives");
        assert_eq!(text[5], "[x] Other");
    }

    #[test]
    fn test_empty_text_placeholder() {
        let field = FormField::text("txt", "Text", true);
        assert_eq!(text_of(&value_lines(&field, &[])), vec!["(empty)"]);
    }

    #[test]
    fn test_multiline_text() {
        let field = FormField::text("txt", "Text", true);
        let values = ["one\ntwo".to_string()];
        let lines = value_lines(&field, &values);
        assert_eq!(text_of(&lines), vec!["one", "two"]);
    }

    #[test]
    fn test_field_height() {
        let field = FormField::multiple_choice("pos", "POS", PartOfSpeech::options());
        assert_eq!(field_height(&field, &[], &[]), 8);
        assert_eq!(field_height(&field, &[], &["bad".to_string()]), 9);
        let text = FormField::text("txt", "Text", false);
        assert_eq!(field_height(&text, &[], &[]), 3);
    }
}
