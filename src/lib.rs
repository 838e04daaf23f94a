pub mod commands;
pub mod error;
pub mod prefs;
pub mod remote;
pub mod tui;
pub mod types;
pub mod utils;

pub use error::{PlankError, Result};
pub use prefs::{PrefKey, PrefStore, Preferences};
pub use remote::{BoardData, BoardSource, DEFAULT_BOARD_URL, QuicksellClient};
pub use types::{
    GroupKey, Priority, SortKey, Ticket, User, VALID_GROUP_KEYS, VALID_SORT_KEYS, avatar_url,
};
