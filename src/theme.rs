//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes; the
//! initial variant comes from the persisted config preference and can be
//! cycled at runtime.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette - semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Form --
    pub form_label: Style,
    pub form_value: Style,
    pub form_placeholder: Style,
    pub field_border: Style,
    pub field_border_focused: Style,

    // -- Category pills --
    pub pill_normal: Style,
    pub pill_selected: Style,
    pub pill_disabled: Style,

    // -- Featured checkbox --
    pub featured_on: Style,

    // -- Image picker overlay --
    pub picker_border: Style,
    pub picker_item: Style,
    pub picker_selected: Style,

    // -- Home view --
    pub home_title: Style,
    pub home_hint: Style,
    pub home_session_ok: Style,
    pub home_session_missing: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub status_success: Style,
    pub status_error: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            // Form
            form_label: Style::default().fg(Color::Cyan),
            form_value: Style::default(),
            form_placeholder: Style::default().fg(Color::DarkGray),
            field_border: Style::default(),
            field_border_focused: Style::default().fg(Color::Cyan),

            // Category pills
            pill_normal: Style::default(),
            pill_selected: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            pill_disabled: Style::default().fg(Color::DarkGray),

            featured_on: Style::default().fg(Color::Magenta),

            // Picker overlay
            picker_border: Style::default().fg(Color::Cyan),
            picker_item: Style::default(),
            picker_selected: Style::default().bg(Color::DarkGray).fg(Color::White),

            // Home
            home_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            home_hint: Style::default().fg(Color::Gray),
            home_session_ok: Style::default().fg(Color::Green),
            home_session_missing: Style::default().fg(Color::Yellow),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_success: Style::default().bg(Color::DarkGray).fg(Color::Green),
            status_error: Style::default().bg(Color::DarkGray).fg(Color::Red),
        }
    }

    /// Light palette - adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Form
            form_label: Style::default().fg(Color::Blue),
            form_value: Style::default().fg(Color::Black),
            form_placeholder: Style::default().fg(Color::Gray),
            field_border: Style::default().fg(Color::Gray),
            field_border_focused: Style::default().fg(Color::Blue),

            // Category pills
            pill_normal: Style::default().fg(Color::Black),
            pill_selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            pill_disabled: Style::default().fg(Color::Gray),

            featured_on: Style::default().fg(Color::Blue),

            // Picker overlay
            picker_border: Style::default().fg(Color::Blue),
            picker_item: Style::default().fg(Color::Black),
            picker_selected: Style::default().bg(Color::Blue).fg(Color::White),

            // Home
            home_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            home_hint: Style::default().fg(Color::DarkGray),
            home_session_ok: Style::default().fg(Color::Green),
            home_session_missing: Style::default().fg(Color::Magenta),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_success: Style::default().bg(Color::White).fg(Color::Green),
            status_error: Style::default().bg(Color::White).fg(Color::Red),
        }
    }
}
