use chrono::Local;
use clap::{
    Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use relaylist::{error, info, run, store::Store};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Execute one sync run
    Run,

    /// Show what a run starting now would do, without touching anything
    Plan,

    /// Show known playlists and the processed-release count
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run => {
            if let Err(e) = run::run().await {
                error!("Sync run failed: {}", e);
            }
        }
        Command::Plan => plan(),
        Command::Status => status().await,
    }
}

fn plan() {
    let plan = run::decide_actions(Local::now().naive_local());

    if plan.clear_current {
        info!("Would empty the Current playlist (first run of the month)");
    }
    for pass in &plan.passes {
        info!(
            "Would process the {} {} wiki page ({})",
            pass.month,
            pass.year,
            if pass.include_current {
                "month, year and Current playlists"
            } else {
                "month and year playlists only"
            }
        );
    }
}

async fn status() {
    let store = match Store::open().await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open store: {}", e);
        }
    };

    for playlist in store.playlists() {
        info!(
            "{} / {} -> {} ({})",
            playlist.label, playlist.year, playlist.spotify_id, playlist.name
        );
    }
    info!("{} release(s) processed so far", store.processed_count());
}
