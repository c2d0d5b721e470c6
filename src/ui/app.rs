//! Application state and TUI event loop
//!
//! Manages the application state and handles user input for the
//! schedule Gantt visualization.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use super::gantt::{bar_span, GanttRow};

/// Application state
pub struct App {
    /// Project name shown in the header
    pub project_name: String,
    /// All Gantt rows in schedule display order
    pub rows: Vec<GanttRow>,
    /// Schedule makespan in days (bar scale)
    pub makespan: u64,
    /// Currently selected index into the visible rows
    pub selected_index: usize,
    /// Whether only critical-path tasks are shown
    pub critical_only: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// List state for ratatui
    list_state: ListState,
}

impl App {
    /// Create a new application.
    pub fn new(project_name: String, rows: Vec<GanttRow>, makespan: u64) -> Self {
        let mut app = Self {
            project_name,
            rows,
            makespan,
            selected_index: 0,
            critical_only: false,
            should_quit: false,
            list_state: ListState::default(),
        };
        app.list_state.select(Some(0));
        app
    }

    /// The rows currently visible, honoring the critical-only filter.
    pub fn visible_rows(&self) -> Vec<&GanttRow> {
        self.rows
            .iter()
            .filter(|r| !self.critical_only || r.critical)
            .collect()
    }

    fn visible_len(&self) -> usize {
        self.visible_rows().len()
    }

    /// The currently selected row, if any.
    pub fn selected_row(&self) -> Option<&GanttRow> {
        self.visible_rows().get(self.selected_index).copied()
    }

    /// Move selection to the next row
    pub fn select_next(&mut self) {
        let total = self.visible_len();
        if total > 0 {
            self.selected_index = (self.selected_index + 1).min(total - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Move selection to the previous row
    pub fn select_previous(&mut self) {
        if self.visible_len() > 0 && self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Jump to the first row
    pub fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.selected_index = 0;
            self.list_state.select(Some(0));
        }
    }

    /// Jump to the last row
    pub fn select_last(&mut self) {
        let total = self.visible_len();
        if total > 0 {
            self.selected_index = total - 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Toggle the critical-only filter, resetting the selection
    pub fn toggle_critical_only(&mut self) {
        self.critical_only = !self.critical_only;
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// Signal that the application should quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Run the TUI application
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('j') | KeyCode::Down => app.select_next(),
                    KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
                    KeyCode::Home | KeyCode::Char('g') => app.select_first(),
                    KeyCode::End | KeyCode::Char('G') => app.select_last(),
                    KeyCode::Char('c') => app.toggle_critical_only(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render the application UI
fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Gantt chart
            Constraint::Length(3), // Detail
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_detail(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Render the header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("TaskScope - {}", app.project_name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Width reserved for the task name column.
const NAME_COLUMN_WIDTH: usize = 20;

/// Render the Gantt chart: one bar per task, placed at its earliest
/// start and scaled by duration. Critical tasks draw in red.
fn render_chart(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible: Vec<GanttRow> = app.visible_rows().into_iter().cloned().collect();
    let makespan = app.makespan;

    // Columns available for bars after name column, borders and
    // highlight symbol.
    let bar_width = (area.width as usize)
        .saturating_sub(NAME_COLUMN_WIDTH + 6)
        .min(u16::MAX as usize) as u16;

    let items: Vec<ListItem> = visible
        .iter()
        .map(|row| {
            let color = if row.critical { Color::Red } else { Color::Cyan };
            let name_style = if row.critical {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };

            let mut name = row.name.clone();
            if name.chars().count() > NAME_COLUMN_WIDTH {
                name = name.chars().take(NAME_COLUMN_WIDTH - 1).collect();
                name.push('…');
            }

            let (offset, len) = bar_span(row.early_start, row.duration, makespan, bar_width);
            let bar = if row.duration == 0 {
                "▏".repeat(len as usize)
            } else {
                "█".repeat(len as usize)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<NAME_COLUMN_WIDTH$}", name), name_style),
                Span::raw(" ".repeat(offset as usize)),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {}d", row.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = if app.critical_only {
        format!("Schedule (critical only: {} tasks)", visible.len())
    } else {
        format!("Schedule ({} tasks, {} days)", visible.len(), makespan)
    };

    let chart = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(chart, area, &mut app.list_state);
}

/// Render the detail line for the selected task
fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_row() {
        Some(row) => {
            let deps = if row.depends_on.is_empty() {
                "none".to_string()
            } else {
                row.depends_on.join(", ")
            };
            Line::from(vec![
                Span::styled(
                    row.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    ": {}d, {}, slack {}d",
                    row.duration,
                    row.window_label(),
                    row.slack
                )),
                Span::styled("  after: ", Style::default().fg(Color::DarkGray)),
                Span::raw(deps),
            ])
        }
        None => Line::from("no tasks"),
    };

    let detail = Paragraph::new(content).block(
        Block::default()
            .title("Selected")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(detail, area);
}

/// Render the footer with help text and legend
fn render_footer(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![
        Span::styled("j/k", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav  "),
        Span::styled("g/G", Style::default().fg(Color::Yellow)),
        Span::raw(" Top/Bot  "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(" Critical only  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  │  "),
        Span::styled("██", Style::default().fg(Color::Red)),
        Span::raw(" Critical  "),
        Span::styled("██", Style::default().fg(Color::Cyan)),
        Span::raw(" Slack"),
    ]);

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_row(name: &str, critical: bool) -> GanttRow {
        GanttRow {
            name: name.to_string(),
            duration: 5,
            early_start: 0,
            early_finish: 5,
            slack: if critical { 0 } else { 3 },
            critical,
            depends_on: Vec::new(),
        }
    }

    fn create_test_app() -> App {
        App::new(
            "Test Project".to_string(),
            vec![
                test_row("alpha", true),
                test_row("bravo", false),
                test_row("charlie", true),
            ],
            10,
        )
    }

    #[test]
    fn test_app_creation() {
        let app = create_test_app();
        assert_eq!(app.selected_index, 0);
        assert!(!app.should_quit);
        assert!(!app.critical_only);
        assert_eq!(app.visible_rows().len(), 3);
    }

    #[test]
    fn test_select_next() {
        let mut app = create_test_app();

        app.select_next();
        assert_eq!(app.selected_index, 1);

        app.select_next();
        assert_eq!(app.selected_index, 2);

        // Should not go past the last row
        app.select_next();
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_select_previous() {
        let mut app = create_test_app();
        app.select_last();
        assert_eq!(app.selected_index, 2);

        app.select_previous();
        assert_eq!(app.selected_index, 1);

        app.select_previous();
        assert_eq!(app.selected_index, 0);

        // Should not go below 0
        app.select_previous();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_select_first_last() {
        let mut app = create_test_app();

        app.select_last();
        assert_eq!(app.selected_index, 2);

        app.select_first();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_critical_only_filter() {
        let mut app = create_test_app();
        app.select_last();

        app.toggle_critical_only();
        assert!(app.critical_only);
        assert_eq!(app.visible_rows().len(), 2);
        // Selection resets when the filter changes.
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_row().unwrap().name, "alpha");

        app.toggle_critical_only();
        assert_eq!(app.visible_rows().len(), 3);
    }

    #[test]
    fn test_selection_stays_within_filtered_rows() {
        let mut app = create_test_app();
        app.toggle_critical_only();

        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_row().unwrap().name, "charlie");
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(!app.should_quit);

        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_empty_app() {
        let mut app = App::new("Empty".to_string(), Vec::new(), 0);
        assert!(app.selected_row().is_none());

        // Navigation on an empty app must not panic.
        app.select_next();
        app.select_previous();
        app.select_first();
        app.select_last();
        assert_eq!(app.selected_index, 0);
    }
}
