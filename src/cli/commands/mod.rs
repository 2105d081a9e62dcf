//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod filter;
pub mod random;
pub mod serve;
pub mod show;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Serve(args) => serve::run(ctx, args),
        Commands::Random(args) => random::run(ctx, args),
        Commands::Filter(args) => filter::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalog over HTTP
    Serve(serve::ServeArgs),

    /// Print a random sample of movies as JSON
    Random(random::RandomArgs),

    /// Print movies matching every given criterion as JSON
    Filter(filter::FilterArgs),

    /// Print one movie by id as JSON
    Show(show::ShowArgs),
}
