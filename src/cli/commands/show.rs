//! movie-cards show - Print one movie by id

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{MovieError, Result};
use crate::query::find_by_id;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// The movie_id to look up
    pub movie_id: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let record = find_by_id(ctx.catalog.load(), &args.movie_id)
        .ok_or_else(|| MovieError::NotFound(args.movie_id.clone()))?;
    emit_json(&record)
}
