//! Main TUI application state machine.
//!
//! Handles:
//! - Input event handling
//! - Submitting the form to the prediction service
//! - Rendering the single-page layout

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::svm::LinearSvmModel;
use crate::application::PredictionService;
use crate::config::AppConfig;
use crate::ports::StressModel;

use super::ui::{
    form::{render_form, FormState, FORM_HEIGHT},
    output::{render_output, OutputState},
    render_about, render_disclaimer, render_header, render_key_hints,
};

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    /// Prediction service around the model loaded at startup
    service: PredictionService<dyn StressModel>,

    /// Text inputs
    form: FormState,

    /// Warnings, errors or the last prediction
    output: OutputState,
}

impl App {
    /// Create a new application, loading the model named in `config`.
    ///
    /// Refuses to start if the model cannot be loaded.
    ///
    /// # Errors
    /// Returns `StressError::Model` if the artifact is missing or invalid.
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        let model = LinearSvmModel::load(&config.model_path)?;
        Ok(Self::with_model(Arc::new(model)))
    }

    /// Create the application around an already-loaded model.
    #[must_use]
    pub fn with_model(model: Arc<dyn StressModel>) -> Self {
        Self {
            should_quit: false,
            service: PredictionService::new(model),
            form: FormState::default(),
            output: OutputState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> crate::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        self.form.wipe();
        result
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> crate::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too.
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(2), // Key hints
                Constraint::Length(2), // Disclaimer
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
            .split(body[1]);

        render_header(f, chunks[0]);
        render_about(f, body[0]);
        render_form(f, main[0], &self.form);
        render_output(f, main[1], &self.output);
        render_key_hints(f, chunks[2]);
        render_disclaimer(f, chunks[3]);
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => {
                    self.form.reset();
                    self.output = OutputState::Idle;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form.next_field(),
            KeyCode::Char(c) => self.form.input_char(c),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Delete => self.form.clear_field(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Validate the current inputs and, if acceptable, predict.
    pub fn submit(&mut self) {
        let raw = self.form.to_raw_input();
        self.output = match self.service.submit(raw) {
            Ok(label) => OutputState::Predicted { label },
            Err(e) => OutputState::from_error(&e),
        };
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn output(&self) -> &OutputState {
        &self.output
    }
}
