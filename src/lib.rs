//! movie-cards: a read-only query service over a static collection of
//! movie cards.
//!
//! The data file is reloaded on every query. Queries are a conjunctive
//! filter ([`query::FilterCriteria`]), a random sample and a lookup by id;
//! [`server`] exposes them over HTTP and [`cli`] runs them offline.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod server;
pub mod test_utils;

pub use error::{MovieError, Result};
