//! Read-only queries over a loaded catalog: filtering, random sampling
//! and lookup by id.

pub mod criteria;
pub mod filter;
pub mod sample;

pub use criteria::{CompiledCriteria, FilterCriteria};
pub use filter::filter_records;
pub use sample::{DEFAULT_SAMPLE_SIZE, sample_random, sample_random_with};

use crate::catalog::MovieRecord;

/// First record whose `movie_id` equals `id`.
pub fn find_by_id<I>(records: I, id: &str) -> Option<MovieRecord>
where
    I: IntoIterator<Item = MovieRecord>,
{
    records
        .into_iter()
        .find(|record| record.movie_id() == Some(id))
}
