//! Theme system for TUI colors and styles
//!
//! One color per priority level, matching the severity palette used on the
//! card borders and priority column headers.

use iocraft::prelude::Color;

use crate::types::Priority;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Priority colors, urgent first
    pub priority_urgent: Color,
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,
    pub priority_none: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            priority_urgent: Color::Red,
            priority_high: Color::Rgb { r: 255, g: 165, b: 0 },
            priority_medium: Color::Yellow,
            priority_low: Color::Green,
            priority_none: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.priority_urgent,
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
            Priority::NoPriority => self.priority_none,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
