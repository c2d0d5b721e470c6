//! Schedule analysis for TaskScope.
//!
//! This module provides the critical path search and the timing
//! (earliest/latest start and finish) computation over a
//! [`ScheduleGraph`](crate::graph::ScheduleGraph).
//!
//! # Example
//!
//! ```rust
//! use taskscope::analysis::{compute_timing, find_critical_path};
//! use taskscope::graph::ScheduleGraph;
//! use taskscope::schedule::Schedule;
//!
//! let graph = ScheduleGraph::from_schedule(&Schedule::sample()).unwrap();
//!
//! let path = find_critical_path(&graph);
//! let timing = compute_timing(&graph);
//!
//! assert_eq!(path.total_duration, 110);
//! assert_eq!(timing.makespan, path.total_duration);
//! ```

mod critical_path;
mod timing;

pub use critical_path::{find_critical_path, CriticalPath};
pub use timing::{compute_timing, ScheduleTiming, TaskTiming};
