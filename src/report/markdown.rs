//! Markdown report implementation.
//!
//! Renders schedule analysis results in Markdown format for
//! documentation and reporting.

use super::{ReportData, Reporter};
use std::io::{self, Write};

/// Markdown reporter implementation.
pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn render<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Schedule Analysis Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Project:** {}", data.project_name)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Tasks | {} |", data.tasks.len())?;
        writeln!(writer, "| Critical Tasks | {} |", data.critical_count())?;
        writeln!(
            writer,
            "| Total Duration (days) | {} |",
            data.total_duration
        )?;
        writeln!(writer)?;

        // Task table
        if !data.tasks.is_empty() {
            writeln!(writer, "## Tasks")?;
            writeln!(writer)?;
            writeln!(writer, "| Task | Duration (days) | Depends On | Critical |")?;
            writeln!(writer, "|------|-----------------|------------|----------|")?;
            for row in &data.tasks {
                let deps = if row.depends_on.is_empty() {
                    "-".to_string()
                } else {
                    row.depends_on.join(", ")
                };
                writeln!(
                    writer,
                    "| {} | {} | {} | {} |",
                    row.name,
                    row.duration,
                    deps,
                    if row.on_critical_path { "yes" } else { "" }
                )?;
            }
            writeln!(writer)?;
        }

        // Critical path
        if !data.critical_path.is_empty() {
            writeln!(writer, "## Critical Path")?;
            writeln!(writer)?;
            for (i, task) in data.critical_path.iter().enumerate() {
                writeln!(writer, "{}. `{}`", i + 1, task)?;
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by TaskScope*")?;

        Ok(())
    }
}
