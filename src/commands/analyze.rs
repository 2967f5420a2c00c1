use crate::aggregate::build_snapshot;
use crate::config::Roster;
use crate::io::output::OutputFormat;
use crate::io::{create_writer, read_sources};
use crate::parse::combine_sources;
use anyhow::Result;
use chrono::{Local, Utc};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub tag: Option<String>,
    pub member: Option<String>,
}

/// Read → combine → aggregate → write. All-or-nothing over the file batch.
pub fn analyze(config: AnalyzeConfig) -> Result<()> {
    let roster = match &config.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::default(),
    };

    let sources = read_sources(&config.files)?;
    let today = Local::now().date_naive();
    let outcome = combine_sources(&sources, today)?;
    for warning in &outcome.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "combined {} issues from {} files",
        outcome.issues.len(),
        sources.len()
    );

    let mut snapshot = build_snapshot(outcome, &roster, Utc::now());
    if let Some(tag) = &config.tag {
        snapshot.solutions.retain(|s| &s.name == tag);
        if snapshot.solutions.is_empty() {
            anyhow::bail!("no solution tagged {tag:?} in the data");
        }
    }
    if let Some(member) = &config.member {
        snapshot.members.retain(|m| &m.name == member);
        if snapshot.members.is_empty() {
            anyhow::bail!("no member named {member:?} in the data");
        }
    }

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_snapshot(&snapshot)?;
    Ok(())
}
