//! Remote data source for the board.
//!
//! The board reads its entire data set from a single fixed endpoint in one
//! GET at startup. There are no retries, no refresh, and no write-back.

pub mod quicksell;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Ticket, User};

pub use quicksell::QuicksellClient;

/// The fixed board endpoint. No query parameters, no auth headers.
pub const DEFAULT_BOARD_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Full payload delivered by the board endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardData {
    /// Display name for a user id, when the id is known.
    pub fn user_name(&self, user_id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.name.as_str())
    }
}

/// Common interface for board data providers.
pub trait BoardSource: Send + Sync {
    /// Fetch the full board payload.
    fn fetch_board(&self) -> impl std::future::Future<Output = Result<BoardData>> + Send;
}
