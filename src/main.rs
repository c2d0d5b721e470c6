use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use taskscope::analysis::{compute_timing, find_critical_path};
use taskscope::graph::ScheduleGraph;
use taskscope::logging::{init_logging, LogLevel};
use taskscope::report::{self, ReportData, ReportFormat};
use taskscope::schedule::{self, Schedule};
use taskscope::ui;

#[derive(Parser)]
#[command(name = "taskscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Terminal UI project schedule analyzer with critical path visualization", long_about = None)]
struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, value_enum, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schedule table and critical path
    Analyze {
        /// Schedule JSON file (defaults to the built-in sample)
        schedule: Option<PathBuf>,
    },
    /// Open the interactive Gantt view
    Tui {
        /// Schedule JSON file (defaults to the built-in sample)
        schedule: Option<PathBuf>,
    },
    /// Write the analysis in a structured format to stdout
    Export {
        /// Schedule JSON file (defaults to the built-in sample)
        schedule: Option<PathBuf>,

        /// Output format (text, markdown, csv, json)
        #[arg(short, long, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("taskscope error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Some(Commands::Analyze { schedule }) => print_report(schedule.as_deref(), ReportFormat::Text),
        Some(Commands::Export { schedule, format }) => print_report(schedule.as_deref(), format),
        Some(Commands::Tui { schedule }) => tui(schedule.as_deref()),
        None => {
            println!("TaskScope - Project Schedule Analyzer");
            println!("Run 'taskscope analyze' to print the schedule and critical path");
            println!("Run 'taskscope tui' to open the interactive Gantt view");
            println!("Run 'taskscope --help' for more information");
            Ok(())
        }
    }
}

/// Load the schedule from a file, or fall back to the built-in sample.
fn load(path: Option<&Path>) -> anyhow::Result<Schedule> {
    match path {
        Some(p) => schedule::load_file(p)
            .with_context(|| format!("failed to load schedule from {}", p.display())),
        None => Ok(Schedule::sample()),
    }
}

fn print_report(path: Option<&Path>, format: ReportFormat) -> anyhow::Result<()> {
    let schedule = load(path)?;
    let graph = ScheduleGraph::from_schedule(&schedule)?;
    let critical = find_critical_path(&graph);

    let data = ReportData::new(&schedule, &critical);
    report::render(format, &data, &mut std::io::stdout().lock())?;
    Ok(())
}

fn tui(path: Option<&Path>) -> anyhow::Result<()> {
    let schedule = load(path)?;
    let graph = ScheduleGraph::from_schedule(&schedule)?;
    let critical = find_critical_path(&graph);
    let timing = compute_timing(&graph);

    ui::run(&schedule, &timing, &critical)?;
    Ok(())
}
