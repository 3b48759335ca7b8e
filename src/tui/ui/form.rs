//! Physiological readings input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{Field, RawInputSet, RANGE_TABLE, PLACEHOLDER};
use crate::tui::styles::PredictorTheme;

/// Height of one input box, borders included.
const FIELD_HEIGHT: u16 = 3;

/// Rows needed to render the form (four inputs per column plus margins).
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * (Field::COUNT as u16 / 2) + 2;

/// One text input bound to a reading.
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub value: String,
}

/// Readings form state
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: Field::ALL
                .iter()
                .map(|&field| FormField {
                    field,
                    value: PLACEHOLDER.to_string(),
                })
                .collect(),
            selected_field: 0,
        }
    }
}

impl FormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Append a typed character to the current field.
    ///
    /// Any printable character is accepted; numbers are checked on submit.
    pub fn input_char(&mut self, c: char) {
        if !c.is_control() {
            self.fields[self.selected_field].value.push(c);
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.zeroize();
    }

    /// Wipe every buffer and restore the placeholder values.
    pub fn reset(&mut self) {
        self.wipe();
        *self = Self::default();
    }

    /// Wipe every buffer from memory.
    pub fn wipe(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
    }

    /// Current text of one reading.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.fields[field.index()].value
    }

    /// Snapshot the inputs into a request for validation.
    #[must_use]
    pub fn to_raw_input(&self) -> RawInputSet {
        RawInputSet::from_fn(|field| self.value(field).to_string())
    }
}

/// Render the two-column readings form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, input) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let (border_style, title_style) = if is_selected {
            (PredictorTheme::border_focused(), PredictorTheme::focused())
        } else {
            (PredictorTheme::border(), PredictorTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", input.field.label()), title_style))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", RANGE_TABLE.bound(input.field)),
                    PredictorTheme::text_muted(),
                ))
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(input.value.as_str(), PredictorTheme::text()),
            if is_selected {
                Span::styled("▌", PredictorTheme::cursor())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_holds_placeholders_in_column_order() {
        let form = FormState::default();
        let fields: Vec<Field> = form.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert!(form.fields.iter().all(|f| f.value == PLACEHOLDER));
        assert_eq!(form.to_raw_input(), RawInputSet::default());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = FormState::default();
        form.prev_field();
        assert_eq!(form.selected_field, Field::COUNT - 1);
        form.next_field();
        assert_eq!(form.selected_field, 0);
    }

    #[test]
    fn test_editing_current_field() {
        let mut form = FormState::default();
        form.next_field();
        form.clear_field();
        for c in "18\t".chars() {
            form.input_char(c);
        }
        assert_eq!(form.value(Field::RespirationRate), "18");

        form.delete_char();
        assert_eq!(form.value(Field::RespirationRate), "1");

        // Non-numeric text is allowed while typing.
        form.input_char('x');
        assert_eq!(form.to_raw_input().respiration_rate, "1x");
    }

    #[test]
    fn test_reset_restores_placeholders() {
        let mut form = FormState::default();
        form.selected_field = 7;
        form.clear_field();
        form.input_char('9');
        form.reset();
        assert_eq!(form.selected_field, 0);
        assert_eq!(form.value(Field::HeartRate), PLACEHOLDER);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut form = FormState::default();
        let raw = form.to_raw_input();
        form.input_char('5');
        assert_eq!(raw.snoring_range, PLACEHOLDER);
        assert_eq!(form.value(Field::SnoringRange), "0.05");
    }
}
