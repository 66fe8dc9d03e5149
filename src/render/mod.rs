//! Terminal preview of forms
//!
//! - `field_renderer`: per-field drawing

mod field_renderer;

pub use field_renderer::{draw_field, draw_hidden_summary, field_height, value_lines};

use crate::forms::{FormData, FormErrors, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a whole form: visible fields stacked top to bottom, hidden fields
/// summarized on one line, help text at the bottom
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FormField],
    data: &FormData,
    errors: &FormErrors,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (hidden, visible): (Vec<&FormField>, Vec<&FormField>) =
        fields.iter().partition(|f| f.is_hidden());

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|f| {
            Constraint::Length(field_height(
                f,
                data.get_list(f.name),
                errors.get(f.name),
            ))
        })
        .collect();
    if !hidden.is_empty() {
        constraints.push(Constraint::Length(1)); // Hidden summary
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in visible.iter().enumerate() {
        draw_field(
            frame,
            chunks[i],
            field,
            data.get_list(field.name),
            errors.get(field.name),
        );
    }

    if !hidden.is_empty() {
        draw_hidden_summary(frame, chunks[visible.len()], &hidden, data);
    }

    // Hidden-field errors have no box of their own
    let hidden_errors: Vec<String> = hidden
        .iter()
        .flat_map(|f| errors.get(f.name).iter().map(move |e| format!("{}: {e}", f.name)))
        .collect();
    let help = if hidden_errors.is_empty() {
        Paragraph::new("Press any key to exit").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(hidden_errors.join("  ")).style(Style::default().fg(Color::Red))
    };
    if let Some(last) = chunks.last() {
        frame.render_widget(help, *last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Form, SurveyForm, TranslationInputForm};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(fields: &[FormField], data: &FormData, errors: &FormErrors) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal
            .draw(|frame| draw_form(frame, frame.area(), "Preview", fields, data, errors))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_survey_labels_and_options() {
        let form = SurveyForm::new();
        let fields: Vec<FormField> = form.fields().into_iter().cloned().collect();
        let data = FormData::from_pairs([("ui_select", "tr")]);
        let text = render(&fields, &data, &FormErrors::new());

        assert!(text.contains("Preview"));
        assert!(text.contains("Which translation interface/method was most efficient?"));
        assert!(text.contains("(•) Blank textbox (Interface A)"));
        assert!(text.contains("( ) Editing suggested translation (Interface B)"));
        assert!(text.contains("[ ] Prepositions"));
        assert!(!text.contains("hidden:"));
    }

    #[test]
    fn test_errors_drawn_under_field() {
        let form = SurveyForm::new();
        let fields: Vec<FormField> = form.fields().into_iter().cloned().collect();
        let data = FormData::new();
        let errors = form.validate(&data).unwrap_err();
        let text = render(&fields, &data, &errors);

        assert!(text.contains("! You must enter at least one word!"));
        assert!(text.contains("! This field is required."));
    }

    #[test]
    fn test_hidden_fields_summarized() {
        let form = TranslationInputForm::new(&[]);
        let fields: Vec<FormField> = form.fields().into_iter().cloned().collect();
        let data = FormData::from_pairs([("src_id", "7"), ("txt", "hola")]);
        let errors = form.validate(&data).unwrap_err();
        let text = render(&fields, &data, &errors);

        assert!(text.contains("hidden: src_id=7, ui_id=-"));
        assert!(text.contains("hola"));
        assert!(text.contains("ui_id: This field is required."));
    }
}
