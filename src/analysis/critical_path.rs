//! Critical path search.
//!
//! Finds the maximum-duration path from any source task (no
//! dependencies) to any sink task (no dependents) with a single
//! dynamic-programming pass in topological order, tracking the best
//! predecessor per node and backtracking from the best-scoring sink.
//! This is linear in tasks + edges, unlike the naive approach of
//! enumerating every simple source-to-sink path.

use petgraph::graph::NodeIndex;
use petgraph::Direction;
use tracing::debug;

use crate::graph::ScheduleGraph;

/// The longest-duration chain of dependent tasks in a schedule.
///
/// Determines the minimum possible completion time of the whole project
/// when all independent tasks run in parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriticalPath {
    /// Task names in dependency order, source first.
    pub tasks: Vec<String>,
    /// Sum of the durations of the tasks on the path.
    pub total_duration: u64,
}

impl CriticalPath {
    /// Returns true if the path has no tasks (empty schedule).
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks on the path.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the named task lies on the path.
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t == name)
    }

    /// Consecutive (from, to) pairs along the path, for edge
    /// highlighting.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.tasks
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
            .collect()
    }
}

/// Finds the critical path of a schedule graph.
///
/// Returns an empty path only for an empty graph; any non-empty DAG has
/// at least one source-to-sink path. When several paths tie on total
/// duration, the result is deterministic: the lexicographically smaller
/// task name wins, first when selecting the ending sink and then at
/// each predecessor choice walking back from it.
///
/// # Example
///
/// ```rust
/// use taskscope::analysis::find_critical_path;
/// use taskscope::graph::ScheduleGraph;
/// use taskscope::schedule::Schedule;
///
/// let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
/// let path = find_critical_path(&graph);
///
/// assert_eq!(path.total_duration, 110);
/// assert_eq!(path.tasks.first().map(String::as_str), Some("Obtain Permits"));
/// ```
pub fn find_critical_path(graph: &ScheduleGraph) -> CriticalPath {
    let inner = graph.inner();
    if inner.node_count() == 0 {
        return CriticalPath::default();
    }

    // dist[i] = maximum total duration of any dependency chain ending
    // at node i, inclusive of i itself.
    let n = inner.node_count();
    let mut dist = vec![0u64; n];
    let mut best_pred: Vec<Option<NodeIndex>> = vec![None; n];

    for &idx in graph.topo() {
        let mut best: Option<NodeIndex> = None;
        for pred in inner.neighbors_directed(idx, Direction::Incoming) {
            best = Some(match best {
                None => pred,
                Some(current) => {
                    let (d_pred, d_cur) = (dist[pred.index()], dist[current.index()]);
                    if d_pred > d_cur
                        || (d_pred == d_cur && inner[pred].name < inner[current].name)
                    {
                        pred
                    } else {
                        current
                    }
                }
            });
        }
        let upstream = best.map(|p| dist[p.index()]).unwrap_or(0);
        dist[idx.index()] = upstream + inner[idx].duration;
        best_pred[idx.index()] = best;
    }

    // Pick the best-scoring sink, ties toward the smaller name.
    let mut end: Option<NodeIndex> = None;
    for idx in inner.node_indices() {
        if inner
            .neighbors_directed(idx, Direction::Outgoing)
            .next()
            .is_some()
        {
            continue;
        }
        end = Some(match end {
            None => idx,
            Some(current) => {
                let (d_idx, d_cur) = (dist[idx.index()], dist[current.index()]);
                if d_idx > d_cur || (d_idx == d_cur && inner[idx].name < inner[current].name) {
                    idx
                } else {
                    current
                }
            }
        });
    }
    let Some(end) = end else {
        return CriticalPath::default();
    };

    let mut tasks = Vec::new();
    let mut cursor = Some(end);
    while let Some(idx) = cursor {
        tasks.push(inner[idx].name.clone());
        cursor = best_pred[idx.index()];
    }
    tasks.reverse();

    let path = CriticalPath {
        tasks,
        total_duration: dist[end.index()],
    };
    debug!(
        tasks = path.len(),
        total = path.total_duration,
        "critical path computed"
    );
    path
}
