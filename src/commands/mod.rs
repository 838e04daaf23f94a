mod board;
mod prefs;

pub use board::cmd_board;
pub use prefs::{cmd_prefs_get, cmd_prefs_set, cmd_prefs_show};
