//! Stress Predictor: terminal stress-level prediction form.
//!
//! Main entry point for the terminal application.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stress_predictor::adapters::sanitize::SanitizingMakeWriter;
use stress_predictor::config::AppConfig;
use stress_predictor::tui::App;

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Logs written to the terminal would corrupt the TUI (alternate screen):
    // interactive sessions log to a file unless told otherwise.
    let interactive = std::io::stdout().is_terminal();
    let (writer, _guard) = if config.log_mode.uses_file(interactive) {
        if let Some(parent) = config.log_file.parent() {
            // Best-effort: a missing directory surfaces when opening the file.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(SanitizingMakeWriter::new(writer)))
        .init();

    tracing::info!("Starting Stress Predictor...");

    // Refuse to start without a usable model.
    let mut app = App::new(&config).map_err(|e| {
        tracing::error!("{}", e);
        e
    })
    .with_context(|| {
        format!(
            "Model file not found or unusable at {:?}. Please ensure the model is present in the correct path (set {} to override).",
            config.model_path,
            stress_predictor::config::MODEL_PATH_ENV
        )
    })?;

    app.run()?;

    tracing::info!("Stress Predictor shutdown complete.");
    Ok(())
}
