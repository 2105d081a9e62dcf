//! movie-cards - query a movie card dataset, or serve it over HTTP.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use movie_cards::Result;
use movie_cards::app::AppContext;
use movie_cards::cli::{Cli, log_directives};
use movie_cards::cli::output::ErrorReport;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let report = ErrorReport::from(&e);
                println!("{}", serde_json::to_string(&report).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    movie_cards::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(cli.verbose)));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(env_filter);

    if cli.json {
        registry.with(stderr_layer.json().flatten_event(true)).init();
    } else {
        registry.with(stderr_layer.with_target(cli.verbose > 0)).init();
    }
}
