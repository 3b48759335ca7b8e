//! Color palette and styles for the predictor form.

use ratatui::style::{Color, Modifier, Style};

/// Predictor theme color palette.
pub struct PredictorTheme;

impl PredictorTheme {
    // === Brand ===

    /// Green used for the title and the result banner
    pub const BRAND: Color = Color::Rgb(76, 175, 80); // #4CAF50

    /// Lighter green for focus highlights
    pub const BRAND_LIGHT: Color = Color::Rgb(129, 199, 132); // #81C784

    // === Semantic Colors ===

    /// Amber - range warnings
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Rose - errors
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    /// Blue - informational panels
    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    // === Text Colors ===

    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    /// Light slate for borders
    pub const BORDER: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Preset Styles ===

    /// Style for the page title
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::BRAND)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for the focused input's title
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::BRAND_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::BRAND)
    }

    /// Text cursor in the focused input
    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::BRAND_LIGHT)
    }

    /// White bold text on the green result banner
    #[must_use]
    pub fn banner() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::BRAND)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::BRAND_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }
}
