//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "g/G")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Group By")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the loaded board
pub fn board_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Up/Down"),
        Shortcut::new("h/l", "Column"),
        Shortcut::new("g/G", "Group By"),
        Shortcut::new("s/S", "Sort By"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts shown while loading or after a failed fetch
pub fn empty_shortcuts() -> Vec<Shortcut> {
    vec![Shortcut::new("q", "Quit")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_shortcuts_include_quit() {
        let shortcuts = board_shortcuts();
        assert!(shortcuts.iter().any(|s| s.key == "q"));
        assert!(shortcuts.iter().any(|s| s.action == "Group By"));
    }
}
