//! Shared TUI components
//!
//! This module contains reusable UI components for the board view.

pub mod empty_state;
pub mod footer;
pub mod select;
pub mod ticket_card;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut, board_shortcuts, empty_shortcuts};
pub use select::{Select, SelectProps, Selectable};
pub use ticket_card::{TicketCard, TicketCardProps};
