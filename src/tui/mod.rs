//! TUI module for the interactive board
//!
//! The `board` module holds the view and its state machine; `components`
//! holds the reusable pieces it is assembled from.

pub mod board;
pub mod components;
pub mod hooks;
pub mod theme;

pub use board::{Board, BoardProps};
pub use theme::Theme;
