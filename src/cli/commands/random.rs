//! movie-cards random - Print a random sample

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::query::sample_random;

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Sample size (defaults to sampling.size)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &RandomArgs) -> Result<()> {
    let records = ctx.catalog.load();
    let amount = args.count.unwrap_or(ctx.config.sampling.size);
    emit_json(&sample_random(&records, amount))
}
