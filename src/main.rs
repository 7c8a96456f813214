use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{self, TerminalView};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::export::CsvExporter;
use expense_tracker::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Record expenses, filter them and export them to CSV",
    long_about = "Starts a command shell on stdin. Add expenses, narrow the view \
                  with filters and export what is shown to a CSV file. \
                  Transactions are kept for the session only."
)]
struct Cli {
    /// Directory holding config.json (overrides EXPENSE_TRACKER_DIR)
    #[arg(long, env = "EXPENSE_TRACKER_DIR")]
    data_dir: Option<PathBuf>,

    /// Replace export files atomically
    #[arg(long)]
    atomic: bool,

    /// Write the current settings to config.json and exit
    #[arg(long)]
    save_config: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let paths = match args.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)
        .with_context(|| format!("loading settings from {}", paths.settings_file().display()))?;
    if args.atomic {
        settings.atomic_export = true;
    }
    tracing::debug!(base_dir = %paths.base_dir().display(), ?settings, "configuration loaded");

    if args.save_config {
        settings.save(&paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let view = TerminalView::new(io::stdout(), &settings);
    let mut tracker = ExpenseTracker::with_exporter(view, CsvExporter::from_settings(&settings));

    cli::run(stdin.lock(), &mut tracker, interactive)?;

    Ok(())
}
