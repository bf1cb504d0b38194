//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::sort::Highlight;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Bars not involved in the current step.
    pub neutral: Color,
    /// Bars being compared or moved.
    pub active: Color,
    /// Bars settled by the current step.
    pub committed: Color,
    /// Color for failures and warnings.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headings.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            neutral: Color::Blue,
            active: Color::Red,
            committed: Color::Green,
            error: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            neutral: Color::Blue,
            active: Color::Red,
            committed: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a bar with the given highlight
    pub fn bar_style(&self, tag: Highlight) -> Style {
        match tag {
            Highlight::Neutral => Style::default().fg(self.neutral),
            Highlight::Active => Style::default().fg(self.active),
            Highlight::Committed => Style::default().fg(self.committed).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_styles_are_distinct() {
        let theme = Theme::dark();
        let neutral = theme.bar_style(Highlight::Neutral).fg;
        let active = theme.bar_style(Highlight::Active).fg;
        let committed = theme.bar_style(Highlight::Committed).fg;
        assert_ne!(neutral, active);
        assert_ne!(active, committed);
        assert_ne!(neutral, committed);
    }
}
