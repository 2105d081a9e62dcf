//! Command-line interface definition.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;

/// Query a movie card dataset, or serve it over HTTP
#[derive(Parser, Debug)]
#[command(name = "movie-cards", version, about)]
pub struct Cli {
    /// Path to a config file (overrides MOVIE_CARDS_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Movie data file (overrides data.path)
    #[arg(long, global = true, env = "MOVIE_CARDS_DATA_PATH")]
    pub data: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON logs on stderr and JSON error objects on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Default `EnvFilter` directives for a `-v` count; `RUST_LOG` replaces them.
///
/// Dependencies stay at `warn` until `-vv`, so one `-v` shows request and
/// catalog events without hyper noise.
#[must_use]
pub const fn log_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,movie_cards=info",
        1 => "warn,movie_cards=debug",
        _ => "info,movie_cards=trace",
    }
}
