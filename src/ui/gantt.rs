//! Gantt row model for schedule visualization.
//!
//! Provides `GanttRow` for per-task display data and the bar scaling
//! used to place each task on the time axis of the TUI.

use crate::analysis::{CriticalPath, ScheduleTiming};
use crate::schedule::Schedule;

/// A single renderable row of the Gantt view.
#[derive(Debug, Clone)]
pub struct GanttRow {
    /// Task name
    pub name: String,
    /// Duration in days
    pub duration: u64,
    /// Earliest start day
    pub early_start: u64,
    /// Earliest finish day
    pub early_finish: u64,
    /// Days the task can slip without delaying the project
    pub slack: u64,
    /// Whether the task lies on the critical path
    pub critical: bool,
    /// Dependency names as declared in the schedule
    pub depends_on: Vec<String>,
}

impl GanttRow {
    /// Short textual window description, e.g. `"day 30-50"`.
    pub fn window_label(&self) -> String {
        format!("day {}-{}", self.early_start, self.early_finish)
    }
}

/// Builds Gantt rows in schedule display order.
pub fn build_rows(
    schedule: &Schedule,
    timing: &ScheduleTiming,
    path: &CriticalPath,
) -> Vec<GanttRow> {
    schedule
        .tasks
        .iter()
        .filter_map(|task| {
            let t = timing.get(&task.name)?;
            Some(GanttRow {
                name: task.name.clone(),
                duration: task.duration,
                early_start: t.early_start,
                early_finish: t.early_finish,
                slack: t.slack(),
                critical: path.contains(&task.name),
                depends_on: task.depends_on.clone(),
            })
        })
        .collect()
}

/// Scales a task's day window into character columns.
///
/// Returns `(offset, length)` within a bar area `width` columns wide.
/// Zero-duration tasks get a single marker column so milestones stay
/// visible; non-empty bars are never shorter than one column.
pub fn bar_span(early_start: u64, duration: u64, makespan: u64, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    if makespan == 0 {
        return (0, 1);
    }

    let width = u64::from(width);
    let offset = early_start * width / makespan;
    let len = if duration == 0 {
        1
    } else {
        (duration * width / makespan).max(1)
    };

    // Clamp so the bar never runs past the area.
    let offset = offset.min(width.saturating_sub(1));
    let len = len.min(width - offset);

    (offset as u16, len as u16)
}
