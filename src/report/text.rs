//! Text report implementation.
//!
//! Renders the schedule as a bordered grid table followed by the
//! critical path listing. This is the `analyze` subcommand's stdout
//! output.

use super::{ReportData, Reporter, TaskRow};
use std::io::{self, Write};

/// Text reporter implementation.
pub struct TextReporter;

const HEADERS: [&str; 3] = ["Task", "Duration (days)", "Depends On"];

impl TextReporter {
    fn dependency_cell(row: &TaskRow) -> String {
        if row.depends_on.is_empty() {
            "-".to_string()
        } else {
            row.depends_on.join(", ")
        }
    }

    /// Column widths sized to the widest cell, headers included.
    fn column_widths(data: &ReportData) -> [usize; 3] {
        let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
        for row in &data.tasks {
            widths[0] = widths[0].max(row.name.len());
            widths[1] = widths[1].max(row.duration.to_string().len());
            widths[2] = widths[2].max(Self::dependency_cell(row).len());
        }
        widths
    }

    fn rule(widths: &[usize; 3]) -> String {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    }
}

impl Reporter for TextReporter {
    fn render<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Project: {}", data.project_name)?;
        writeln!(writer)?;

        let widths = Self::column_widths(data);
        let rule = Self::rule(&widths);

        writeln!(writer, "{}", rule)?;
        writeln!(
            writer,
            "| {:<w0$} | {:<w1$} | {:<w2$} |",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )?;
        writeln!(writer, "{}", rule)?;

        for row in &data.tasks {
            writeln!(
                writer,
                "| {:<w0$} | {:>w1$} | {:<w2$} |",
                row.name,
                row.duration,
                Self::dependency_cell(row),
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )?;
        }
        writeln!(writer, "{}", rule)?;

        writeln!(writer)?;
        writeln!(writer, "Critical Path:")?;
        for task in &data.critical_path {
            writeln!(writer, " - {}", task)?;
        }
        writeln!(writer)?;
        writeln!(writer, "Total duration: {} days", data.total_duration)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::find_critical_path;
    use crate::graph::ScheduleGraph;
    use crate::schedule::Schedule;

    fn sample_report() -> String {
        let schedule = Schedule::sample();
        let graph = ScheduleGraph::from_schedule(&schedule).unwrap();
        let path = find_critical_path(&graph);
        let data = ReportData::new(&schedule, &path);

        let mut output = Vec::new();
        TextReporter.render(&data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_report_header_and_borders() {
        let report = sample_report();

        assert!(report.contains("Project: House Construction"));
        assert!(report.contains("| Task"));
        assert!(report.contains("| Duration (days)"));
        assert!(report.contains("| Depends On"));

        // Four border rules: above header, below header, below body...
        // plus the header row itself uses the same pipe layout.
        let rules = report.lines().filter(|l| l.starts_with("+-")).count();
        assert_eq!(rules, 3);
    }

    #[test]
    fn test_text_report_rows() {
        let report = sample_report();

        // Tasks without dependencies get a placeholder.
        let permits_row = report
            .lines()
            .find(|l| l.contains("Obtain Permits"))
            .unwrap();
        assert!(permits_row.contains("| -"));

        // Multi-dependency cell joins with commas.
        assert!(report.contains("Framing, Plumbing"));
    }

    #[test]
    fn test_text_report_critical_path_listing() {
        let report = sample_report();

        assert!(report.contains("Critical Path:"));
        assert!(report.contains(" - Obtain Permits"));
        assert!(report.contains(" - Final Inspection"));
        assert!(!report.contains(" - Plumbing"));
        assert!(report.contains("Total duration: 110 days"));
    }

    #[test]
    fn test_text_report_alignment() {
        let report = sample_report();

        // All table lines share the same width.
        let table_lines: Vec<&str> = report
            .lines()
            .filter(|l| l.starts_with('|') || l.starts_with('+'))
            .collect();
        let width = table_lines[0].len();
        assert!(table_lines.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_text_report_empty_schedule() {
        let schedule = Schedule::default();
        let graph = ScheduleGraph::from_schedule(&schedule).unwrap();
        let path = find_critical_path(&graph);
        let data = ReportData::new(&schedule, &path);

        let mut output = Vec::new();
        TextReporter.render(&data, &mut output).unwrap();
        let report = String::from_utf8(output).unwrap();

        assert!(report.contains("Critical Path:"));
        assert!(report.contains("Total duration: 0 days"));
    }
}
