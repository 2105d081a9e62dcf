//! Property tests for filtering and sampling.

mod filter_properties;
mod sample_properties;
