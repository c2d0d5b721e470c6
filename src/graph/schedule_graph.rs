//! Dependency graph implementation using petgraph.
//!
//! Provides the directed graph derived from a schedule: one node per
//! task, one edge per (dependency -> dependent) pair. Construction
//! validates the schedule's dependency references and acyclicity so
//! that downstream analysis can assume a well-formed DAG.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

use crate::schedule::Schedule;

/// Errors raised while building a [`ScheduleGraph`].
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A task lists a dependency that is not defined in the schedule.
    #[error("task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    /// A task lists itself as a dependency.
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(String),

    /// The dependency relation contains a cycle.
    #[error("dependency cycle detected involving task '{0}'")]
    Cycle(String),
}

/// A node in the schedule graph: the task name and its duration.
#[derive(Debug, Clone)]
pub struct TaskNode {
    /// Task name (unique within the graph).
    pub name: String,
    /// Task duration in days.
    pub duration: u64,
}

/// A directed acyclic graph of schedule tasks.
///
/// The graph uses petgraph's `DiGraph` internally, with nodes carrying
/// task name and duration. Edges point from a dependency to the task
/// that depends on it, so every directed path is a chain of tasks that
/// must run in sequence.
///
/// Construction fails with a [`GraphError`] if a dependency names an
/// undefined task, a task depends on itself, or the dependency relation
/// is cyclic. Duplicate dependency entries collapse to a single edge.
///
/// # Example
///
/// ```rust
/// use taskscope::graph::ScheduleGraph;
/// use taskscope::schedule::Schedule;
///
/// let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
///
/// assert_eq!(graph.node_count(), 11);
/// assert_eq!(graph.sources(), vec!["Obtain Permits"]);
/// assert_eq!(graph.sinks(), vec!["Final Inspection"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGraph {
    /// The underlying directed graph.
    graph: DiGraph<TaskNode, ()>,
    /// Maps task names to their node indices for O(1) lookup.
    node_indices: HashMap<String, NodeIndex>,
    /// Topological order, fixed at construction.
    topo: Vec<NodeIndex>,
}

impl ScheduleGraph {
    /// Builds a graph from a schedule, validating dependency references
    /// and acyclicity.
    ///
    /// Nodes are added in schedule order; for every task T with
    /// dependency D an edge D -> T is added, with duplicates collapsed.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, GraphError> {
        let mut graph = DiGraph::with_capacity(schedule.task_count(), schedule.task_count());
        let mut node_indices = HashMap::with_capacity(schedule.task_count());

        for task in &schedule.tasks {
            let idx = graph.add_node(TaskNode {
                name: task.name.clone(),
                duration: task.duration,
            });
            node_indices.insert(task.name.clone(), idx);
        }

        for task in &schedule.tasks {
            let task_idx = node_indices[task.name.as_str()];
            for dep in &task.depends_on {
                if dep == &task.name {
                    return Err(GraphError::SelfDependency(task.name.clone()));
                }
                let dep_idx = *node_indices.get(dep.as_str()).ok_or_else(|| {
                    GraphError::UnknownDependency {
                        task: task.name.clone(),
                        dependency: dep.clone(),
                    }
                })?;
                // update_edge collapses duplicate dependency entries.
                graph.update_edge(dep_idx, task_idx, ());
            }
        }

        let topo = toposort(&graph, None).map_err(|cycle| {
            GraphError::Cycle(graph[cycle.node_id()].name.clone())
        })?;

        Ok(Self {
            graph,
            node_indices,
            topo,
        })
    }

    /// Returns the number of tasks in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of dependency edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns true if a task with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Returns the duration of a task, if it exists.
    pub fn duration_of(&self, name: &str) -> Option<u64> {
        self.node_indices
            .get(name)
            .map(|&idx| self.graph[idx].duration)
    }

    /// Names of the tasks this task depends on (incoming edges).
    ///
    /// Returns an empty vector for unknown tasks.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.neighbor_names(name, Direction::Incoming)
    }

    /// Names of the tasks that depend on this task (outgoing edges).
    ///
    /// Returns an empty vector for unknown tasks.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.neighbor_names(name, Direction::Outgoing)
    }

    fn neighbor_names(&self, name: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].name.as_str())
            .collect()
    }

    /// Number of dependencies of a task (in-degree). Zero for unknown
    /// tasks.
    pub fn in_degree(&self, name: &str) -> usize {
        self.node_indices
            .get(name)
            .map(|&idx| self.graph.neighbors_directed(idx, Direction::Incoming).count())
            .unwrap_or(0)
    }

    /// Number of dependents of a task (out-degree). Zero for unknown
    /// tasks.
    pub fn out_degree(&self, name: &str) -> usize {
        self.node_indices
            .get(name)
            .map(|&idx| self.graph.neighbors_directed(idx, Direction::Outgoing).count())
            .unwrap_or(0)
    }

    /// Source tasks (no dependencies), in schedule order.
    pub fn sources(&self) -> Vec<&str> {
        self.degree_zero_names(Direction::Incoming)
    }

    /// Sink tasks (nothing depends on them), in schedule order.
    pub fn sinks(&self) -> Vec<&str> {
        self.degree_zero_names(Direction::Outgoing)
    }

    fn degree_zero_names(&self, dir: Direction) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors_directed(idx, dir).next().is_none())
            .map(|idx| self.graph[idx].name.as_str())
            .collect()
    }

    /// The full edge set as (dependency, dependent) name pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].name.as_str(), self.graph[b].name.as_str()))
            .collect()
    }

    /// Task names in topological order.
    pub fn topological_names(&self) -> Vec<&str> {
        self.topo
            .iter()
            .map(|&idx| self.graph[idx].name.as_str())
            .collect()
    }

    pub(crate) fn inner(&self) -> &DiGraph<TaskNode, ()> {
        &self.graph
    }

    pub(crate) fn topo(&self) -> &[NodeIndex] {
        &self.topo
    }
}
