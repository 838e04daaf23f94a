//! Ticket card component for the board columns
//!
//! A compact card view showing ticket id, assignee badge, title (wrapped),
//! and tags, with the border colored by priority.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;
use crate::utils::wrap_text_lines;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Ticket,
    /// Initials badge for the assignee, when one resolves
    pub avatar: Option<String>,
    /// Whether this card is selected
    pub is_selected: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact ticket card for board columns
///
/// Layout:
/// ```text
/// +-------------------+
/// | CAM-4          AS |
/// | Add multi-lang    |
/// | support           |
/// | ● Feature Request |
/// +-------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket;

    // Border carries the priority color; selection switches to the focus
    // color so the cursor stays visible on same-priority columns.
    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.priority_color(ticket.priority)
    };
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };

    // Card has padding_left: 1, padding_right: 1, and border chars
    // (2 total for round border), so text width = card_width - 4
    let default_width = 24u32;
    let card_width = props.width.unwrap_or(default_width);
    let title_width = (card_width.saturating_sub(4) as usize).max(8);

    // Wrap title to up to 3 lines
    let title_lines = wrap_text_lines(&ticket.title, title_width, 3);

    let tags = if ticket.tag.is_empty() {
        None
    } else {
        Some(format!("● {}", ticket.tag.join(", ")))
    };

    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            // ID row with selection indicator and assignee badge
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row) {
                    Text(
                        content: indicator,
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                    Text(
                        content: ticket.id.clone(),
                        color: theme.id_color,
                        weight: Weight::Bold,
                    )
                }
                #(props.avatar.clone().map(|badge| element! {
                    Text(
                        content: badge,
                        color: theme.text_dimmed,
                        weight: Weight::Bold,
                    )
                }))
            }
            // Title rows (up to 3 lines)
            #(title_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: theme.text,
                    )
                }
            }))
            // Tag row
            #(tags.map(|row| element! {
                Text(
                    content: row,
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
