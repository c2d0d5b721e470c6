//! UI module for the TaskScope TUI
//!
//! This module provides the terminal user interface for displaying the
//! schedule as a Gantt chart with the critical path highlighted.

mod app;
pub mod gantt;

pub use app::{run_app, App};
pub use gantt::{build_rows, GanttRow};

use std::io;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::analysis::{CriticalPath, ScheduleTiming};
use crate::schedule::Schedule;

/// Run the interactive schedule view until the user quits.
///
/// Enters the alternate screen in raw mode, blocks on the event loop,
/// and restores the terminal before returning.
pub fn run(schedule: &Schedule, timing: &ScheduleTiming, path: &CriticalPath) -> io::Result<()> {
    let rows = build_rows(schedule, timing, path);
    let mut app = App::new(schedule.display_name().to_string(), rows, timing.makespan);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Always restore the terminal, even if the event loop failed.
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
