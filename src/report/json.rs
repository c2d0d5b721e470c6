//! JSON report implementation.
//!
//! Renders schedule analysis results in JSON format for machine-readable
//! output.

use super::{ReportData, Reporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

/// Serializable task row for JSON output.
#[derive(Serialize)]
struct JsonTask {
    name: String,
    duration_days: u64,
    depends_on: Vec<String>,
    on_critical_path: bool,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    task_count: usize,
    critical_task_count: usize,
    total_duration_days: u64,
}

/// Root JSON report structure.
#[derive(Serialize)]
struct JsonReport {
    project: String,
    summary: JsonSummary,
    tasks: Vec<JsonTask>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    critical_path: Vec<String>,
}

impl Reporter for JsonReporter {
    fn render<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        let tasks: Vec<JsonTask> = data
            .tasks
            .iter()
            .map(|t| JsonTask {
                name: t.name.clone(),
                duration_days: t.duration,
                depends_on: t.depends_on.clone(),
                on_critical_path: t.on_critical_path,
            })
            .collect();

        let report = JsonReport {
            project: data.project_name.clone(),
            summary: JsonSummary {
                task_count: data.tasks.len(),
                critical_task_count: data.critical_count(),
                total_duration_days: data.total_duration,
            },
            tasks,
            critical_path: data.critical_path.clone(),
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::find_critical_path;
    use crate::graph::ScheduleGraph;
    use crate::schedule::Schedule;

    fn render_json(schedule: &Schedule) -> serde_json::Value {
        let graph = ScheduleGraph::from_schedule(schedule).unwrap();
        let path = find_critical_path(&graph);
        let data = ReportData::new(schedule, &path);

        let mut output = Vec::new();
        JsonReporter.render(&data, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_report_structure() {
        let value = render_json(&Schedule::sample());

        assert_eq!(value["project"], "House Construction");
        assert_eq!(value["summary"]["task_count"], 11);
        assert_eq!(value["summary"]["critical_task_count"], 9);
        assert_eq!(value["summary"]["total_duration_days"], 110);
        assert_eq!(value["tasks"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_json_report_critical_path_order() {
        let value = render_json(&Schedule::sample());
        let path = value["critical_path"].as_array().unwrap();

        assert_eq!(path.first().unwrap(), "Obtain Permits");
        assert_eq!(path.last().unwrap(), "Final Inspection");
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_json_report_task_fields() {
        let value = render_json(&Schedule::sample());
        let tasks = value["tasks"].as_array().unwrap();

        let wiring = tasks
            .iter()
            .find(|t| t["name"] == "Electrical Wiring")
            .unwrap();
        assert_eq!(wiring["duration_days"], 15);
        assert_eq!(wiring["on_critical_path"], true);
        assert_eq!(
            wiring["depends_on"].as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_json_report_empty_schedule_omits_path() {
        let value = render_json(&Schedule::default());

        assert_eq!(value["summary"]["task_count"], 0);
        // skip_serializing_if drops the empty critical_path key.
        assert!(value.get("critical_path").is_none());
    }
}
