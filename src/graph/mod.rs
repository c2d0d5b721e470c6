//! Graph module for schedule dependency modeling.
//!
//! This module provides the [`ScheduleGraph`] struct: the directed
//! acyclic graph derived from a schedule, validated at construction.
//!
//! # Example
//!
//! ```rust
//! use taskscope::graph::ScheduleGraph;
//! use taskscope::schedule::Schedule;
//!
//! let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
//! assert_eq!(graph.node_count(), 11);
//! assert_eq!(graph.edge_count(), 12);
//! ```

mod schedule_graph;

pub use schedule_graph::{GraphError, ScheduleGraph, TaskNode};
