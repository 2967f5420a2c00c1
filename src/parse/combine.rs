//! Combines several uploaded exports into one flat issue pool.

use crate::core::Result;
use crate::parse::rows::{parse_rows, ParseOutcome};
use chrono::NaiveDate;

/// One uploaded file: its (project-bearing) name and decoded text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSource {
    pub name: String,
    pub content: String,
}

impl NamedSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Parse every source strictly in order and concatenate the results.
///
/// Sequential on purpose: file order decides project-name attribution when
/// names collide, and all of file 1's rows precede file 2's. All-or-nothing:
/// the first failing file aborts the whole combine so mixed valid/invalid
/// data can never feed the rollups.
pub fn combine_sources(sources: &[NamedSource], today: NaiveDate) -> Result<ParseOutcome> {
    let mut combined = ParseOutcome::default();
    for source in sources {
        let outcome = parse_rows(&source.name, &source.content, today)?;
        combined.issues.extend(outcome.issues);
        combined.warnings.extend(outcome.warnings);
    }
    Ok(combined)
}
