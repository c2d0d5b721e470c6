//! Schedule module for TaskScope.
//!
//! This module provides the schedule data model and the JSON loader
//! used to bring schedules in from disk.
//!
//! # Example
//!
//! ```
//! use taskscope::schedule::{load_str, Schedule};
//!
//! let json = r#"{
//!     "name": "Demo",
//!     "tasks": [
//!         {"name": "Plan", "duration": 2},
//!         {"name": "Build", "duration": 5, "depends_on": ["Plan"]}
//!     ]
//! }"#;
//!
//! let schedule = load_str(json).unwrap();
//! assert_eq!(schedule.task_count(), 2);
//!
//! // The built-in sample is always available as a fallback input.
//! let sample = Schedule::sample();
//! assert_eq!(sample.task_count(), 11);
//! ```

pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::{load_file, load_str, validate, ScheduleError, ScheduleResult};
pub use types::{Schedule, Task};
