//! movie-cards filter - Print matching movies

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::query::{FilterCriteria, filter_records};

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Director name contains this text (case-insensitive)
    #[arg(long)]
    pub director: Option<String>,

    /// Movie name contains this text (case-insensitive)
    #[arg(long)]
    pub movie_name: Option<String>,

    /// Minimum IMDb score, inclusive
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Song that must appear in the movie (repeatable)
    #[arg(long = "song")]
    pub songs: Vec<String>,

    /// Actor who must appear in the movie (repeatable)
    #[arg(long = "actor")]
    pub actors: Vec<String>,
}

impl FilterArgs {
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            director: self.director.clone(),
            movie_name: self.movie_name.clone(),
            min_rating: self.min_rating,
            song_names: non_empty(&self.songs),
            actors: non_empty(&self.actors),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

pub fn run(ctx: &AppContext, args: &FilterArgs) -> Result<()> {
    let criteria = args.criteria();
    debug!(?criteria, unconstrained = criteria.is_empty(), "filter");
    emit_json(&filter_records(ctx.catalog.load(), &criteria))
}
