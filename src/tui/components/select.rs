//! Compact inline selector component for enum fields
//!
//! Displays the active grouping or sort key as: Label: ◀ value ▶
//! Cycling happens through the board keybindings, so the component itself
//! is display-only.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{GroupKey, SortKey};

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps {
    /// Label to display before the selector
    pub label: String,
    /// Display string of the current value
    pub value: String,
}

/// Compact inline selector with arrow indicators
///
/// Renders as: Label: ◀ value ▶
/// Arrows indicate the value can be cycled with the bound keys.
#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            Text(
                content: format!("{}:", props.label),
                color: theme.text_dimmed,
            )
            Text(
                content: "◀",
                color: theme.text_dimmed,
            )
            Text(
                content: props.value.clone(),
                color: theme.highlight,
                weight: Weight::Bold,
            )
            Text(
                content: "▶",
                color: theme.text_dimmed,
            )
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    /// Get all possible values for this type
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize;
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        let next_idx = (self.index() + 1) % values.len();
        values[next_idx]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for GroupKey {
    fn all_values() -> Vec<Self> {
        vec![GroupKey::Status, GroupKey::UserId, GroupKey::Priority]
    }

    fn display(&self) -> String {
        match self {
            GroupKey::Status => "Status".to_string(),
            GroupKey::UserId => "User".to_string(),
            GroupKey::Priority => "Priority".to_string(),
        }
    }

    fn index(&self) -> usize {
        match self {
            GroupKey::Status => 0,
            GroupKey::UserId => 1,
            GroupKey::Priority => 2,
        }
    }
}

impl Selectable for SortKey {
    fn all_values() -> Vec<Self> {
        vec![SortKey::Priority, SortKey::Title]
    }

    fn display(&self) -> String {
        match self {
            SortKey::Priority => "Priority".to_string(),
            SortKey::Title => "Title".to_string(),
        }
    }

    fn index(&self) -> usize {
        match self {
            SortKey::Priority => 0,
            SortKey::Title => 1,
        }
    }
}
