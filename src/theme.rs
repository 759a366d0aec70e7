//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI
//! components, define component-specific constants instead of hardcoding
//! `Color::*` values in render files.
//!
//! Theme: Slate - warm amber accents on a deep slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(229, 229, 234);
    pub const TEXT_DIM: Color = Color::Rgb(100, 105, 120);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 145, 160);

    // Background colors
    pub const BG_SURFACE: Color = Color::Rgb(33, 36, 46);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(112, 192, 126);
    pub const WARNING: Color = Color::Rgb(240, 198, 80);

    // Accent colors
    pub const AMBER: Color = Color::Rgb(240, 198, 80);
    pub const TEAL: Color = Color::Rgb(86, 182, 194);
    pub const GREEN: Color = Color::Rgb(112, 192, 126);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    // Shared cursor style for textarea widgets (topic input, history search)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Topic input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::TEAL;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Lesson pane styles
pub mod lesson {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::TEAL;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const GENERATING: Color = palette::AMBER;
    pub const KIND_BADGE: Color = palette::AMBER;
}

/// Toast styles per severity
pub mod notification {
    use super::*;

    pub const SUCCESS_FG: Color = Color::Rgb(16, 24, 16);
    pub const SUCCESS_BG: Color = palette::SUCCESS;
    pub const SUCCESS_BORDER: Color = palette::GREEN;

    pub const WARNING_FG: Color = Color::Rgb(30, 26, 10);
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::AMBER;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = Color::Rgb(120, 48, 54);
    pub const ERROR_BORDER: Color = palette::RED;
}

/// History popup styles
pub mod history {
    use super::*;

    pub const BORDER: Color = palette::AMBER;
    pub const ENTRY: Color = palette::TEXT;
    pub const ENTRY_TIME: Color = palette::TEXT_MUTED;
    pub const SELECTED_BG: Color = Color::Rgb(54, 58, 74);
    pub const SEARCH_CURSOR: Style = palette::CURSOR;
}

/// Bottom help line styles
pub mod help {
    use super::*;

    pub const KEY: Color = palette::AMBER;
    pub const LABEL: Color = palette::TEXT_MUTED;
}
