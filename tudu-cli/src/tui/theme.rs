//! Catppuccin Mocha theme for the tudu TUI
//!
//! Centralized color palette and style helpers, so the views never name
//! raw colors.
//!
//! Palette reference: https://catppuccin.com/palette/

use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // UI semantic colors
    pub focus_border: Color,
    pub unfocus_border: Color,
    pub selection_fg: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha - soothing pastel colors
    pub fn mocha() -> Self {
        Self {
            focus_border: Color::Rgb(180, 190, 254),  // Lavender #b4befe
            unfocus_border: Color::Rgb(88, 91, 112),  // Surface 2 #585b70
            selection_fg: Color::Rgb(205, 214, 244),  // Text #cdd6f4
            accent: Color::Rgb(249, 226, 175),        // Yellow #f9e2af
            success: Color::Rgb(166, 227, 161),       // Green #a6e3a1
            error: Color::Rgb(243, 139, 168),         // Red #f38ba8
            text_primary: Color::Rgb(205, 214, 244),  // Text #cdd6f4
            text_secondary: Color::Rgb(186, 194, 222), // Subtext 1 #bac2de
            text_disabled: Color::Rgb(108, 112, 134), // Overlay 0 #6c7086
        }
    }

    // ========== Style Helpers ==========

    /// Style for the focused panel border
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(self.focus_border)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused panel borders
    pub fn unfocused_border_style(&self) -> Style {
        Style::default().fg(self.unfocus_border)
    }

    /// Style for the row under the cursor
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal (non-selected) rows
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the row whose edit session is active
    pub fn editing_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text (empty form, empty list)
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.text_disabled)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for the help bar
    pub fn help_style(&self) -> Style {
        Style::default().fg(self.text_disabled)
    }

    /// Style for error messages in the status bar
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_mocha() {
        let theme = Theme::default();
        // Catppuccin Mocha Lavender #b4befe
        assert_eq!(theme.focus_border, Color::Rgb(180, 190, 254));
    }
}
