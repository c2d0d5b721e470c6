//! Shared types for schedule data.
//!
//! This module defines the core data structures used to represent
//! a project schedule: named tasks with durations and dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task in a project schedule.
///
/// Tasks are identified by a unique name. `depends_on` lists the names of
/// tasks that must complete before this one can start; duplicates are
/// tolerated here and collapse to a single edge when the dependency graph
/// is built.
///
/// # Example
///
/// ```
/// use taskscope::schedule::Task;
///
/// let task = Task::new("Framing", 20, &["Foundation Laying"]);
/// assert_eq!(task.duration, 20);
/// assert_eq!(task.depends_on, vec!["Foundation Laying"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    pub name: String,

    /// Duration in whole days.
    pub duration: u64,

    /// Names of tasks that must complete before this one starts.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl Task {
    /// Creates a new task.
    pub fn new(name: impl Into<String>, duration: u64, depends_on: &[&str]) -> Self {
        Self {
            name: name.into(),
            duration,
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Returns true if this task has no dependencies.
    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}d)", self.name, self.duration)
    }
}

/// A project schedule: an ordered list of tasks plus an optional project
/// name.
///
/// Task order defines the default display order only; it has no
/// computational significance. The schedule is immutable once loaded —
/// graph construction and analysis always recompute from it.
///
/// # Example
///
/// ```
/// use taskscope::schedule::Schedule;
///
/// let schedule = Schedule::sample();
/// assert_eq!(schedule.task_count(), 11);
/// assert!(schedule.get("Framing").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Schedule {
    /// Project name, if any.
    pub name: Option<String>,

    /// Tasks in display order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Schedule {
    /// Creates a schedule from a list of tasks.
    pub fn new(name: Option<String>, tasks: Vec<Task>) -> Self {
        Self { name, tasks }
    }

    /// Returns the number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the schedule has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Returns true if a task with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the duration of a task, if it exists.
    pub fn duration_of(&self, name: &str) -> Option<u64> {
        self.get(name).map(|t| t.duration)
    }

    /// Task names in display order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// The display name used in reports and the TUI header.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Project Schedule")
    }

    /// The built-in sample schedule: an 11-task house construction
    /// project. Used as the default CLI input and as a test fixture.
    pub fn sample() -> Self {
        Self {
            name: Some("House Construction".to_string()),
            tasks: vec![
                Task::new("Obtain Permits", 10, &[]),
                Task::new("Site Excavation", 5, &["Obtain Permits"]),
                Task::new("Foundation Laying", 15, &["Site Excavation"]),
                Task::new("Framing", 20, &["Foundation Laying"]),
                Task::new("Roofing", 10, &["Framing"]),
                Task::new("Plumbing", 15, &["Foundation Laying"]),
                Task::new("Electrical Wiring", 15, &["Framing", "Plumbing"]),
                Task::new("Interior Finishing", 20, &["Electrical Wiring"]),
                Task::new("Painting", 10, &["Interior Finishing"]),
                Task::new("Landscaping", 15, &["Roofing", "Painting"]),
                Task::new("Final Inspection", 0, &["Landscaping"]),
            ],
        }
    }
}
