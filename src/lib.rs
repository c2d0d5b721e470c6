//! TaskScope - Terminal UI project schedule analyzer with critical path
//! visualization
//!
//! This crate builds a dependency graph from a project schedule, finds
//! the critical path, and renders the result as a terminal table or an
//! interactive Gantt view.

pub mod analysis;
pub mod graph;
pub mod logging;
pub mod report;
pub mod schedule;
pub mod ui;
