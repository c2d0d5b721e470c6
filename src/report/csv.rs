//! CSV report implementation.
//!
//! Renders schedule analysis results in CSV format for spreadsheet use.

use super::{ReportData, Reporter};
use std::io::{self, Write};

/// CSV reporter implementation.
pub struct CsvReporter;

impl CsvReporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or
    /// newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Reporter for CsvReporter {
    fn render<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        // Write header
        writeln!(writer, "name,duration_days,depends_on,on_critical_path")?;

        // Write each task as a row
        for row in &data.tasks {
            writeln!(
                writer,
                "{},{},{},{}",
                Self::escape_field(&row.name),
                row.duration,
                Self::escape_field(&row.depends_on.join("; ")),
                row.on_critical_path
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::find_critical_path;
    use crate::graph::ScheduleGraph;
    use crate::schedule::{Schedule, Task};

    fn render_csv(schedule: &Schedule) -> String {
        let graph = ScheduleGraph::from_schedule(schedule).unwrap();
        let path = find_critical_path(&graph);
        let data = ReportData::new(schedule, &path);

        let mut output = Vec::new();
        CsvReporter.render(&data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_report_basic() {
        let csv = render_csv(&Schedule::sample());
        let lines: Vec<&str> = csv.lines().collect();

        // Header + 11 tasks
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "name,duration_days,depends_on,on_critical_path");
        assert_eq!(lines[1], "Obtain Permits,10,,true");
    }

    #[test]
    fn test_csv_report_multi_dependency_row() {
        let csv = render_csv(&Schedule::sample());
        assert!(csv.contains("Electrical Wiring,15,Framing; Plumbing,true"));
        assert!(csv.contains("Plumbing,15,Foundation Laying,false"));
    }

    #[test]
    fn test_csv_escaping() {
        let schedule = Schedule::new(
            None,
            vec![
                Task::new("Dig, carefully", 2, &[]),
                Task::new("Pour \"the\" slab", 3, &["Dig, carefully"]),
            ],
        );
        let csv = render_csv(&schedule);

        assert!(csv.contains("\"Dig, carefully\",2,,true"));
        assert!(csv.contains("\"Pour \"\"the\"\" slab\",3,\"Dig, carefully\",true"));
    }

    #[test]
    fn test_csv_report_empty_schedule() {
        let csv = render_csv(&Schedule::default());
        assert_eq!(csv.lines().count(), 1);
    }
}
