//! Linear filter scan over a loaded catalog.

use tracing::debug;

use crate::catalog::MovieRecord;

use super::criteria::FilterCriteria;

/// Keep the records that satisfy every supplied criterion.
///
/// Input order is preserved; nothing is deduplicated or truncated.
pub fn filter_records<I>(records: I, criteria: &FilterCriteria) -> Vec<MovieRecord>
where
    I: IntoIterator<Item = MovieRecord>,
{
    let compiled = criteria.compile();
    if compiled.is_empty() {
        let all: Vec<MovieRecord> = records.into_iter().collect();
        debug!(scanned = all.len(), "no criteria, returning every record");
        return all;
    }
    let mut scanned = 0usize;
    let matched: Vec<MovieRecord> = records
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|record| compiled.matches(record))
        .collect();
    debug!(scanned, matched = matched.len(), "filtered movie records");
    matched
}
