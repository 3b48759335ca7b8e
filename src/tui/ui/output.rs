//! Output region: range warnings, errors and the predicted stress level.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::SubmitError;
use crate::domain::PredictionLabel;
use crate::tui::styles::PredictorTheme;

/// What the output region currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutputState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Submission refused: per-field warnings plus one error line
    Rejected {
        warnings: Vec<String>,
        error: String,
    },
    /// The model produced a label
    Predicted { label: PredictionLabel },
}

impl OutputState {
    /// Output for a failed submit.
    #[must_use]
    pub fn from_error(err: &SubmitError) -> Self {
        Self::Rejected {
            warnings: err.warnings().iter().map(ToString::to_string).collect(),
            error: err.to_string(),
        }
    }

    /// Banner text for a predicted label.
    #[must_use]
    pub fn banner_text(label: &PredictionLabel) -> String {
        format!("Predicted Stress Level: {label}")
    }
}

/// Render the output region
pub fn render_output(f: &mut Frame, area: Rect, state: &OutputState) {
    match state {
        OutputState::Idle => render_idle(f, area),
        OutputState::Rejected { warnings, error } => render_rejected(f, area, warnings, error),
        OutputState::Predicted { label } => render_banner(f, area, label),
    }
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Press [Enter] to predict your stress level",
            PredictorTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(PredictorTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_rejected(f: &mut Frame, area: Rect, warnings: &[String], error: &str) {
    let mut lines: Vec<Line> = warnings
        .iter()
        .map(|w| {
            Line::from(vec![
                Span::styled("⚠ ", PredictorTheme::warning()),
                Span::styled(w.as_str(), PredictorTheme::warning()),
            ])
        })
        .collect();
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("! ", PredictorTheme::danger()),
        Span::styled(error, PredictorTheme::danger()),
    ]));

    let content = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Invalid Inputs ", PredictorTheme::danger()))
            .borders(Borders::ALL)
            .border_style(PredictorTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_banner(f: &mut Frame, area: Rect, label: &PredictionLabel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3), // Banner
            Constraint::Min(0),
        ])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(OutputState::banner_text(label)),
        Line::from(""),
    ])
    .style(PredictorTheme::banner())
    .alignment(Alignment::Center);

    f.render_widget(banner, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ValidationError;
    use crate::domain::Field;
    use crate::ports::ModelError;

    #[test]
    fn test_parse_error_has_no_warnings() {
        let err = SubmitError::from(ValidationError::Parse {
            field: Field::HeartRate,
            input: "fast".into(),
        });
        match OutputState::from_error(&err) {
            OutputState::Rejected { warnings, error } => {
                assert!(warnings.is_empty());
                assert!(error.contains("'fast'"));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_model_error_is_single_error_line() {
        let err = SubmitError::from(ModelError::EmptyPrediction);
        let state = OutputState::from_error(&err);
        assert_eq!(
            state,
            OutputState::Rejected {
                warnings: Vec::new(),
                error: "Prediction failed: Model returned no prediction. Please try again."
                    .into(),
            }
        );
    }

    #[test]
    fn test_banner_text_shows_label_verbatim() {
        assert_eq!(
            OutputState::banner_text(&PredictionLabel::Integer(3)),
            "Predicted Stress Level: 3"
        );
    }
}
