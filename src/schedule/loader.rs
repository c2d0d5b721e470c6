//! Loader for JSON schedule files.
//!
//! This module provides functionality to parse schedule files and
//! validate their shape before graph construction.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::types::Schedule;

/// Errors that can occur while loading a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The schedule structure is invalid.
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),
}

/// Result type alias for loader operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Loads and validates a schedule from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the schedule file
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use taskscope::schedule::load_file;
///
/// let schedule = load_file(Path::new("schedule.json")).unwrap();
/// println!("Loaded {} tasks", schedule.task_count());
/// ```
pub fn load_file(path: &Path) -> ScheduleResult<Schedule> {
    debug!(path = %path.display(), "reading schedule file");
    let content = fs::read_to_string(path)?;
    let schedule = load_str(&content)?;
    info!(
        tasks = schedule.task_count(),
        project = schedule.display_name(),
        "loaded schedule"
    );
    Ok(schedule)
}

/// Loads and validates a schedule from a JSON string.
///
/// # Example
///
/// ```
/// use taskscope::schedule::load_str;
///
/// let json = r#"{
///     "name": "Demo",
///     "tasks": [{"name": "Kickoff", "duration": 1}]
/// }"#;
/// let schedule = load_str(json).unwrap();
/// assert_eq!(schedule.task_count(), 1);
/// ```
pub fn load_str(content: &str) -> ScheduleResult<Schedule> {
    let schedule: Schedule = serde_json::from_str(content)?;
    validate(&schedule)?;
    Ok(schedule)
}

/// Validates the shape of a parsed schedule.
///
/// Checks that task names are non-empty and unique. Dependency
/// resolution and acyclicity are checked later, when the dependency
/// graph is built.
pub fn validate(schedule: &Schedule) -> ScheduleResult<()> {
    let mut seen = std::collections::HashSet::new();

    for task in &schedule.tasks {
        if task.name.trim().is_empty() {
            return Err(ScheduleError::InvalidSchedule(
                "task with empty name".to_string(),
            ));
        }
        if !seen.insert(task.name.as_str()) {
            return Err(ScheduleError::InvalidSchedule(format!(
                "duplicate task name '{}'",
                task.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_JSON: &str = r#"{
        "name": "Garden Shed",
        "tasks": [
            {"name": "Plans", "duration": 2},
            {"name": "Materials", "duration": 3, "depends_on": ["Plans"]},
            {"name": "Assembly", "duration": 5, "depends_on": ["Materials"]}
        ]
    }"#;

    #[test]
    fn test_load_str_valid() {
        let schedule = load_str(SAMPLE_JSON).unwrap();

        assert_eq!(schedule.name, Some("Garden Shed".to_string()));
        assert_eq!(schedule.task_count(), 3);
        assert_eq!(schedule.duration_of("Assembly"), Some(5));
    }

    #[test]
    fn test_load_str_missing_depends_on_defaults_empty() {
        let schedule = load_str(SAMPLE_JSON).unwrap();
        assert!(schedule.get("Plans").unwrap().depends_on.is_empty());
    }

    #[test]
    fn test_load_str_empty_tasks() {
        let schedule = load_str(r#"{"name": "Empty"}"#).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_load_str_invalid_json() {
        let result = load_str("{ not json }");
        assert!(matches!(result.unwrap_err(), ScheduleError::JsonError(_)));
    }

    #[test]
    fn test_load_str_negative_duration_rejected() {
        let json = r#"{"tasks": [{"name": "Dig", "duration": -4}]}"#;
        let result = load_str(json);
        // u64 deserialization rejects negatives at the JSON layer.
        assert!(matches!(result.unwrap_err(), ScheduleError::JsonError(_)));
    }

    #[test]
    fn test_validate_duplicate_name() {
        let json = r#"{"tasks": [
            {"name": "Dig", "duration": 1},
            {"name": "Dig", "duration": 2}
        ]}"#;
        let err = load_str(json).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSchedule(_)));
        assert!(err.to_string().contains("duplicate task name 'Dig'"));
    }

    #[test]
    fn test_validate_empty_name() {
        let json = r#"{"tasks": [{"name": "  ", "duration": 1}]}"#;
        let err = load_str(json).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

        let schedule = load_file(file.path()).unwrap();
        assert_eq!(schedule.task_count(), 3);
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file(Path::new("/nonexistent/schedule.json"));
        assert!(matches!(result.unwrap_err(), ScheduleError::IoError(_)));
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let schedule = Schedule::sample();
        let json = serde_json::to_string(&schedule).unwrap();
        let reloaded = load_str(&json).unwrap();

        assert_eq!(reloaded.task_count(), schedule.task_count());
        assert_eq!(reloaded.task_names(), schedule.task_names());
    }
}
