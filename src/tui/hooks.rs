//! Reusable hooks for TUI components

use iocraft::prelude::*;

use crate::remote::BoardSource;
use crate::tui::board::model::{BoardAction, BoardState, reduce_board_state};

/// Create an async handler for the one startup fetch.
///
/// This hook creates a handler that:
/// - Fetches the board payload from the given source
/// - Dispatches `DataLoaded` on success, `FetchFailed` on error
/// - Ensures minimum 100ms loading indicator display to prevent UI flicker
///
/// A failed fetch is logged and left alone; no retry is scheduled for the
/// rest of the session.
///
/// # Returns
///
/// A handler that can be called with `()` to trigger the load operation.
pub fn use_board_loader<S>(
    state_setter: State<BoardState>,
    source: S,
) -> impl Fn(()) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> + Clone
where
    S: BoardSource + Clone + 'static,
{
    move |()| {
        let mut state_setter = state_setter;
        let source = source.clone();

        Box::pin(async move {
            let start = std::time::Instant::now();

            let result = source.fetch_board().await;

            // Ensure minimum 100ms display time to prevent flicker
            let elapsed = start.elapsed();
            if elapsed < std::time::Duration::from_millis(100) {
                tokio::time::sleep(std::time::Duration::from_millis(100) - elapsed).await;
            }

            let action = match result {
                Ok(data) => BoardAction::DataLoaded(data),
                Err(e) => {
                    tracing::error!("board fetch failed: {e}");
                    BoardAction::FetchFailed
                }
            };
            let next = reduce_board_state(state_setter.read().clone(), action);
            state_setter.set(next);
        })
    }
}
