//! Color palettes for the chat page.

use parrot_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub muted: Color,

    // Header
    pub header_bg: Color,
    pub header_text: Color,
    pub header_subtext: Color,

    // Bubbles
    pub user_bubble: Color,
    pub user_text: Color,
    pub bot_bubble: Color,
    pub bot_text: Color,

    // Send button
    pub button: Color,
    pub button_disabled: Color,
    pub button_text: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// White card with blue accents (default).
    pub fn light() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(255, 255, 255),    // #ffffff
            surface: Color::Rgb(249, 250, 251), // #f9fafb

            // Foregrounds
            text: Color::Rgb(31, 41, 55),     // #1f2937
            muted: Color::Rgb(156, 163, 175), // #9ca3af

            // Header
            header_bg: Color::Rgb(37, 99, 235),        // #2563eb
            header_text: Color::Rgb(255, 255, 255),    // #ffffff
            header_subtext: Color::Rgb(191, 219, 254), // #bfdbfe

            // Bubbles
            user_bubble: Color::Rgb(37, 99, 235), // #2563eb
            user_text: Color::Rgb(255, 255, 255),
            bot_bubble: Color::Rgb(255, 255, 255),
            bot_text: Color::Rgb(31, 41, 55), // #1f2937

            // Send button
            button: Color::Rgb(37, 99, 235),           // #2563eb
            button_disabled: Color::Rgb(147, 197, 253), // #93c5fd
            button_text: Color::Rgb(255, 255, 255),

            // Borders
            border: Color::Rgb(209, 213, 219),        // #d1d5db
            border_focused: Color::Rgb(37, 99, 235), // #2563eb
        }
    }

    /// Catppuccin Mocha based dark variant.
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(24, 24, 37), // #181825

            // Foregrounds
            text: Color::Rgb(205, 214, 244),  // #cdd6f4
            muted: Color::Rgb(108, 112, 134), // #6c7086

            // Header
            header_bg: Color::Rgb(137, 180, 250),   // #89b4fa
            header_text: Color::Rgb(17, 17, 27),    // #11111b
            header_subtext: Color::Rgb(49, 50, 68), // #313244

            // Bubbles
            user_bubble: Color::Rgb(137, 180, 250), // #89b4fa
            user_text: Color::Rgb(17, 17, 27),
            bot_bubble: Color::Rgb(49, 50, 68), // #313244
            bot_text: Color::Rgb(205, 214, 244),

            // Send button
            button: Color::Rgb(137, 180, 250),        // #89b4fa
            button_disabled: Color::Rgb(69, 71, 90), // #45475a
            button_text: Color::Rgb(17, 17, 27),

            // Borders
            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}
