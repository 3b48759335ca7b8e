//! UI module: View components for the TUI.

pub mod form;
pub mod output;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::RANGE_TABLE;
use crate::tui::styles::PredictorTheme;

pub fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled("Stress Predictor", PredictorTheme::title())),
        Line::from(Span::styled(
            "Enter your physiological details to predict stress levels",
            PredictorTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(PredictorTheme::border()),
    );

    f.render_widget(header, area);
}

/// Side panel: what the app does and the accepted ranges.
pub fn render_about(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "This app predicts stress levels based on physiological parameters using a trained ML model.",
            PredictorTheme::info(),
        )),
        Line::from(""),
        Line::from(Span::styled("Valid ranges", PredictorTheme::subtitle())),
    ];
    lines.extend(RANGE_TABLE.iter().map(|(field, bound)| {
        Line::from(vec![
            Span::styled(format!("{:<17}", field.display_name()), PredictorTheme::text_secondary()),
            Span::styled(bound.to_string(), PredictorTheme::text()),
        ])
    }));

    let block = Block::default()
        .title(Span::styled(" About This App ", PredictorTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(PredictorTheme::border());

    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

pub fn render_key_hints(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", PredictorTheme::key_hint()),
        Span::styled("Navigate ", PredictorTheme::key_desc()),
        Span::styled("[Enter] ", PredictorTheme::key_hint()),
        Span::styled("Predict Stress Level ", PredictorTheme::key_desc()),
        Span::styled("[Del] ", PredictorTheme::key_hint()),
        Span::styled("Clear Field ", PredictorTheme::key_desc()),
        Span::styled("[Ctrl+R] ", PredictorTheme::key_hint()),
        Span::styled("Reset ", PredictorTheme::key_desc()),
        Span::styled("[Esc] ", PredictorTheme::key_hint()),
        Span::styled("Quit", PredictorTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(PredictorTheme::border()),
    );

    f.render_widget(footer, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: Predictions are indicative only and do not replace professional medical evaluation.",
        PredictorTheme::text_muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(PredictorTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
