//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single page holding:
//! - The eight readings, in two columns
//! - An output region for warnings and errors
//! - The predicted stress level banner

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::PredictorTheme;
pub use ui::form::FormState;
pub use ui::output::OutputState;
