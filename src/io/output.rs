use crate::core::{DashboardSnapshot, Project};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_snapshot(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_snapshot(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_snapshot(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        self.write_header(snapshot)?;
        self.write_summary(snapshot)?;
        self.write_rollups("Projects", &snapshot.projects)?;
        self.write_rollups("Solutions", &snapshot.solutions)?;
        self.write_members(snapshot)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        writeln!(self.writer, "# Trackmap Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Issues | {} |", snapshot.issues.len())?;
        writeln!(self.writer, "| Projects | {} |", snapshot.projects.len())?;
        writeln!(self.writer, "| Solutions | {} |", snapshot.solutions.len())?;
        writeln!(self.writer, "| Members | {} |", snapshot.members.len())?;
        writeln!(
            self.writer,
            "| Coercion warnings | {} |",
            snapshot.warnings.len()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rollups(&mut self, title: &str, rollups: &[Project]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for rollup in rollups {
            writeln!(self.writer, "### {}", rollup.name)?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} items, {} members ({} developers)",
                rollup.total_items, rollup.total_members, rollup.total_devs
            )?;
            writeln!(self.writer)?;
            if rollup.features.is_empty() {
                continue;
            }
            writeln!(
                self.writer,
                "| Feature | Due | Stories | Critical | High | Post-Release |"
            )?;
            writeln!(
                self.writer,
                "|---------|-----|---------|----------|------|--------------|"
            )?;
            for feature in &rollup.features {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} | {} | {} |",
                    feature.subject,
                    feature.due_status.display_name(),
                    feature.stories.len(),
                    feature.critical_bugs,
                    feature.high_bugs,
                    feature.post_release_bugs
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_members(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        writeln!(self.writer, "## Members")?;
        writeln!(self.writer)?;
        if snapshot.members.is_empty() {
            writeln!(self.writer, "No roster members found in the data.")?;
            return Ok(());
        }
        writeln!(self.writer, "| Member | Role | Issues | Projects |")?;
        writeln!(self.writer, "|--------|------|--------|----------|")?;
        for member in &snapshot.members {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                member.name,
                member.role.display_name(),
                member.issues.len(),
                member.projects.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn rollup_table(rollups: &[Project]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Name", "Items", "Members", "Devs", "Features", "Critical", "High", "Post-Release",
        ]);
        for rollup in rollups {
            let critical: usize = rollup.features.iter().map(|f| f.critical_bugs).sum();
            let high: usize = rollup.features.iter().map(|f| f.high_bugs).sum();
            let post: usize = rollup.features.iter().map(|f| f.post_release_bugs).sum();
            table.add_row(vec![
                rollup.name.clone(),
                rollup.total_items.to_string(),
                rollup.total_members.to_string(),
                rollup.total_devs.to_string(),
                rollup.features.len().to_string(),
                critical.to_string(),
                high.to_string(),
                post.to_string(),
            ]);
        }
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_snapshot(&mut self, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Trackmap Report".bold().cyan())?;
        writeln!(
            self.writer,
            "{} issues across {} projects",
            snapshot.issues.len(),
            snapshot.projects.len()
        )?;
        if !snapshot.warnings.is_empty() {
            writeln!(
                self.writer,
                "{}",
                format!("{} coercion warnings", snapshot.warnings.len()).yellow()
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Projects".bold())?;
        writeln!(self.writer, "{}", Self::rollup_table(&snapshot.projects))?;
        if !snapshot.solutions.is_empty() {
            writeln!(self.writer, "{}", "Solutions".bold())?;
            writeln!(self.writer, "{}", Self::rollup_table(&snapshot.solutions))?;
        }

        if !snapshot.members.is_empty() {
            writeln!(self.writer, "{}", "Members".bold())?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Member", "Role", "Issues", "Projects"]);
            for member in &snapshot.members {
                table.add_row(vec![
                    member.name.clone(),
                    member.role.display_name().to_string(),
                    member.issues.len().to_string(),
                    member.projects.join(", "),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }
}

/// Pick the writer for a format, targeting stdout or a file.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    })
}
