//! Ingestion of raw tracker exports into the flat issue pool.

pub mod combine;
pub mod rows;

pub use combine::{combine_sources, NamedSource};
pub use rows::{parse_rows, ParseOutcome};
