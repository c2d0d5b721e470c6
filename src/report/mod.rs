//! Report generation for schedule analysis results.
//!
//! This module assembles analysis results into report data and renders
//! them in several formats: a bordered text table for the terminal,
//! plus Markdown, CSV and JSON.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::CriticalPath;
use crate::schedule::Schedule;
use std::io::{self, Write};

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Bordered text table - terminal output
    Text,
    /// Markdown format - documentation/reporting
    Markdown,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, markdown, csv, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// One task row of a report, in schedule display order.
#[derive(Debug, Clone)]
pub struct TaskRow {
    /// Task name.
    pub name: String,
    /// Duration in days.
    pub duration: u64,
    /// Dependency names as declared in the schedule.
    pub depends_on: Vec<String>,
    /// Whether the task lies on the critical path.
    pub on_critical_path: bool,
}

/// Data container for report rendering.
///
/// Holds the schedule rows and the critical path result.
#[derive(Debug, Clone)]
pub struct ReportData {
    /// Project name.
    pub project_name: String,
    /// Task rows in schedule display order.
    pub tasks: Vec<TaskRow>,
    /// Critical path task names, source first.
    pub critical_path: Vec<String>,
    /// Critical path total duration in days.
    pub total_duration: u64,
}

impl ReportData {
    /// Assembles report data from a schedule and its critical path.
    pub fn new(schedule: &Schedule, path: &CriticalPath) -> Self {
        let tasks = schedule
            .tasks
            .iter()
            .map(|t| TaskRow {
                name: t.name.clone(),
                duration: t.duration,
                depends_on: t.depends_on.clone(),
                on_critical_path: path.contains(&t.name),
            })
            .collect();

        Self {
            project_name: schedule.display_name().to_string(),
            tasks,
            critical_path: path.tasks.clone(),
            total_duration: path.total_duration,
        }
    }

    /// Number of tasks on the critical path.
    pub fn critical_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.on_critical_path).count()
    }
}

/// Trait for report renderers.
pub trait Reporter {
    /// Render the report to the given writer.
    fn render<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()>;
}

/// Render report data in the specified format.
pub fn render<W: Write>(
    format: ReportFormat,
    data: &ReportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextReporter.render(data, writer),
        ReportFormat::Markdown => markdown::MarkdownReporter.render(data, writer),
        ReportFormat::Csv => csv::CsvReporter.render(data, writer),
        ReportFormat::Json => json::JsonReporter.render(data, writer),
    }
}

/// Render report data to a string.
pub fn render_to_string(format: ReportFormat, data: &ReportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
