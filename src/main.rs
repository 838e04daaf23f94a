use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use plank::commands::{cmd_board, cmd_prefs_get, cmd_prefs_set, cmd_prefs_show};
use plank::prefs::PrefStore;

#[derive(Parser)]
#[command(name = "plank")]
#[command(about = "Interactive ticket board for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board (default)
    #[command(visible_alias = "b")]
    Board {
        /// Board endpoint (overrides PLANK_BOARD_URL and the default)
        #[arg(long)]
        url: Option<String>,
    },

    /// Inspect or edit the stored view preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Display current preferences
    Show,

    /// Print one preference value
    Get {
        /// Preference key: group or sort
        key: String,
    },

    /// Set a preference value
    Set {
        /// Preference key: group or sort
        key: String,

        /// New value (group: status, userId, priority; sort: priority, title)
        value: String,
    },
}

/// Initialize tracing from PLANK_LOG, defaulting to warnings only.
/// Log output goes to stderr so it never corrupts the TUI frame.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("PLANK_LOG").unwrap_or_else(|_| EnvFilter::new("plank=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Board { url }) => cmd_board(url).await,
        None => cmd_board(None).await,

        Some(Commands::Prefs { action }) => {
            PrefStore::open_default().and_then(|store| match action {
                PrefsAction::Show => cmd_prefs_show(&store),
                PrefsAction::Get { key } => cmd_prefs_get(&store, &key),
                PrefsAction::Set { key, value } => cmd_prefs_set(&store, &key, &value),
            })
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
