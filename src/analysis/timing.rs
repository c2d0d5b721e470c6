//! Schedule timing: the critical path method forward/backward pass.
//!
//! Computes, for every task, the earliest and latest start/finish
//! consistent with the dependency graph, plus the schedule makespan.
//! Slack (latest start minus earliest start) is zero exactly for tasks
//! that cannot slip without delaying the whole project. The Gantt view
//! uses earliest starts for bar placement.

use std::collections::HashMap;

use petgraph::Direction;

use crate::graph::ScheduleGraph;

/// Timing window for a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest day the task can start.
    pub early_start: u64,
    /// Earliest day the task can finish.
    pub early_finish: u64,
    /// Latest day the task can start without delaying the project.
    pub late_start: u64,
    /// Latest day the task can finish without delaying the project.
    pub late_finish: u64,
}

impl TaskTiming {
    /// Days this task can slip without delaying the project.
    pub fn slack(&self) -> u64 {
        self.late_start - self.early_start
    }

    /// Returns true if the task has no slack.
    pub fn is_critical(&self) -> bool {
        self.slack() == 0
    }
}

/// Per-task timing windows plus the overall makespan.
///
/// The makespan always equals the critical path's total duration.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTiming {
    timings: HashMap<String, TaskTiming>,
    /// Total project duration when every task starts as early as
    /// possible.
    pub makespan: u64,
}

impl ScheduleTiming {
    /// Timing window for a task, if it exists.
    pub fn get(&self, name: &str) -> Option<&TaskTiming> {
        self.timings.get(name)
    }

    /// Number of tasks with timing information.
    pub fn len(&self) -> usize {
        self.timings.len()
    }

    /// Returns true if no timing information is present.
    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

/// Computes timing windows for every task in the graph.
pub fn compute_timing(graph: &ScheduleGraph) -> ScheduleTiming {
    let inner = graph.inner();
    let n = inner.node_count();
    if n == 0 {
        return ScheduleTiming::default();
    }

    // Forward pass: earliest start is the latest early finish among
    // dependencies.
    let mut early_start = vec![0u64; n];
    let mut early_finish = vec![0u64; n];
    for &idx in graph.topo() {
        let start = inner
            .neighbors_directed(idx, Direction::Incoming)
            .map(|p| early_finish[p.index()])
            .max()
            .unwrap_or(0);
        early_start[idx.index()] = start;
        early_finish[idx.index()] = start + inner[idx].duration;
    }

    let makespan = early_finish.iter().copied().max().unwrap_or(0);

    // Backward pass: latest finish is the earliest late start among
    // dependents; sinks finish at the makespan.
    let mut late_start = vec![0u64; n];
    let mut late_finish = vec![0u64; n];
    for &idx in graph.topo().iter().rev() {
        let finish = inner
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|s| late_start[s.index()])
            .min()
            .unwrap_or(makespan);
        late_finish[idx.index()] = finish;
        late_start[idx.index()] = finish - inner[idx].duration;
    }

    let timings = inner
        .node_indices()
        .map(|idx| {
            (
                inner[idx].name.clone(),
                TaskTiming {
                    early_start: early_start[idx.index()],
                    early_finish: early_finish[idx.index()],
                    late_start: late_start[idx.index()],
                    late_finish: late_finish[idx.index()],
                },
            )
        })
        .collect();

    ScheduleTiming { timings, makespan }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::find_critical_path;
    use crate::schedule::Schedule;

    fn sample_timing() -> ScheduleTiming {
        let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
        compute_timing(&graph)
    }

    #[test]
    fn test_empty_graph() {
        let graph = ScheduleGraph::from_schedule(&Schedule::default()).unwrap();
        let timing = compute_timing(&graph);
        assert!(timing.is_empty());
        assert_eq!(timing.makespan, 0);
    }

    #[test]
    fn test_sample_makespan() {
        assert_eq!(sample_timing().makespan, 110);
    }

    #[test]
    fn test_sample_early_windows() {
        let timing = sample_timing();

        let permits = timing.get("Obtain Permits").unwrap();
        assert_eq!(permits.early_start, 0);
        assert_eq!(permits.early_finish, 10);

        let framing = timing.get("Framing").unwrap();
        assert_eq!(framing.early_start, 30);
        assert_eq!(framing.early_finish, 50);

        // Electrical Wiring waits for the later of Framing (50) and
        // Plumbing (45).
        let wiring = timing.get("Electrical Wiring").unwrap();
        assert_eq!(wiring.early_start, 50);
        assert_eq!(wiring.early_finish, 65);

        let inspection = timing.get("Final Inspection").unwrap();
        assert_eq!(inspection.early_start, 110);
        assert_eq!(inspection.early_finish, 110);
    }

    #[test]
    fn test_sample_slack() {
        let timing = sample_timing();

        // The off-path branches have room to slip.
        assert_eq!(timing.get("Plumbing").unwrap().slack(), 5);
        assert_eq!(timing.get("Roofing").unwrap().slack(), 35);

        // Critical tasks have none.
        assert!(timing.get("Framing").unwrap().is_critical());
        assert!(timing.get("Landscaping").unwrap().is_critical());
    }

    #[test]
    fn test_critical_path_tasks_have_zero_slack() {
        let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
        let timing = compute_timing(&graph);
        let path = find_critical_path(&graph);

        for task in &path.tasks {
            assert!(
                timing.get(task).unwrap().is_critical(),
                "{task} should have zero slack"
            );
        }
    }

    #[test]
    fn test_makespan_equals_critical_path_total() {
        let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
        let timing = compute_timing(&graph);
        let path = find_critical_path(&graph);
        assert_eq!(timing.makespan, path.total_duration);
    }

    #[test]
    fn test_unknown_task() {
        assert!(sample_timing().get("Nonexistent").is_none());
    }
}
