//! Board command (`plank board`)
//!
//! Provides an interactive TUI for viewing tickets grouped by status,
//! assignee, or priority.

use iocraft::prelude::*;

use crate::error::{PlankError, Result};
use crate::prefs::PrefStore;
use crate::remote::{DEFAULT_BOARD_URL, QuicksellClient};
use crate::tui::Board;

/// Resolve the board endpoint: flag, then environment, then the default.
fn resolve_url(url: Option<String>) -> String {
    url.or_else(|| std::env::var("PLANK_BOARD_URL").ok())
        .unwrap_or_else(|| DEFAULT_BOARD_URL.to_string())
}

/// Launch the board TUI
pub async fn cmd_board(url: Option<String>) -> Result<()> {
    let url = resolve_url(url);
    let source = QuicksellClient::new(&url)?;
    let store = PrefStore::open_default()?;
    tracing::debug!(%url, prefs = %store.path().display(), "starting board");

    element!(Board(store: Some(store), source: Some(source)))
        .fullscreen()
        .await
        .map_err(|e| PlankError::Other(format!("TUI error: {e}")))
}
