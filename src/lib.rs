//! Relay monthly community release wiki pages into rolling Spotify playlists.
//!
//! The crate is built to be driven by an external scheduler (e.g. cron every
//! 15 minutes). Each run pulls the markdown wiki page for the month, extracts
//! the Spotify release links from its table, and pushes every release that
//! has not been seen before into three playlists: the month's playlist, the
//! year's playlist, and a perpetually "Current" playlist that is emptied at
//! month boundaries.
//!
//! # Modules
//!
//! - `config` - Persisted key/value configuration store
//! - `error` - Error taxonomy shared by all modules
//! - `http` - Narrow request-execution seam over reqwest
//! - `management` - Credential, playlist-registry, and routing logic
//! - `reddit` - Wiki content endpoint and Reddit token grant
//! - `run` - Wall-clock run planning and orchestration
//! - `spotify` - Spotify Web API calls
//! - `store` - Durable dedup set and playlist registry tables
//! - `types` - Data structures and type definitions
//! - `wiki` - Markdown release-table parser

pub mod config;
pub mod error;
pub mod http;
pub mod management;
pub mod reddit;
pub mod run;
pub mod spotify;
pub mod store;
pub mod types;
pub mod wiki;

/// Crate-wide result alias over [`error::SyncError`].
pub type Res<T> = std::result::Result<T, error::SyncError>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program. Only meant for the binary entry point; library code propagates
/// errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
