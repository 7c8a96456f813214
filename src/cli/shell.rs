//! Line-oriented command shell
//!
//! Reads one command per line, runs it against an [`ExpenseTracker`] and
//! prints the result through a [`TerminalView`]. Transactions live only for
//! the duration of the session.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use super::view::TerminalView;
use crate::constants::HELP_TEXT_EXPORT;
use crate::error::{TrackerError, TrackerResult};
use crate::filter::{AmountFilter, CategoryFilter, DateRangeFilter, TransactionFilter};
use crate::tracker::ExpenseTracker;
use crate::validation::parse_amount;

const HELP: &str = "\
Commands:
  add <amount> <category>        Record an expense (0 < amount <= 1000)
  list                           Show the current view
  filter category <name>         Show one category
  filter amount <min> [max]      Show amounts in a range (or exactly <min>)
  filter date <from> <to>        Show a date range (YYYY-MM-DD)
  filter clear                   Show everything
  export <file.csv>              Export the current view to CSV
  preview                        Print the CSV for the current view
  help                           Show this help
  quit                           Leave the shell

Categories: food, travel, bills, entertainment, other";

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// A single shell command
#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Record an expense
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
    },
    /// Show the current view
    #[command(alias = "ls")]
    List,
    /// Change the active filter
    #[command(subcommand)]
    Filter(FilterCommand),
    /// Export the current view to CSV
    ///
    /// After parsing, `file` holds at most one element: the rest of the line
    /// exactly as typed.
    Export {
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        file: Vec<String>,
    },
    /// Print the CSV for the current view
    Preview,
    Help,
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Filter selection
#[derive(Subcommand, Debug, PartialEq)]
pub enum FilterCommand {
    Category {
        name: String,
    },
    Amount {
        #[arg(allow_hyphen_values = true)]
        min: String,
        #[arg(allow_hyphen_values = true)]
        max: Option<String>,
    },
    Date {
        from: String,
        to: String,
    },
    Clear,
}

/// Parse a line of input; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let command = ShellLine::try_parse_from(line.split_whitespace())?.command;

    // File names keep their inner whitespace as typed
    Ok(Some(match command {
        ShellCommand::Export { .. } => ShellCommand::Export {
            file: remainder(line).map(str::to_string).into_iter().collect(),
        },
        other => other,
    }))
}

/// Everything after the first word, or `None` if nothing follows it
fn remainder(line: &str) -> Option<&str> {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
}

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the tracker
pub fn execute<W: Write>(
    tracker: &mut ExpenseTracker<TerminalView<W>>,
    command: ShellCommand,
) -> Flow {
    match command {
        ShellCommand::Add { amount, category } => {
            let result = parse_amount(&amount)
                .map_err(TrackerError::from)
                .and_then(|amount| tracker.add_transaction(amount, &category));
            if let Err(e) = result {
                tracker.view_mut().println(&e.user_message());
            }
        }
        ShellCommand::List => tracker.refresh(),
        ShellCommand::Filter(filter) => apply_filter_command(tracker, filter),
        ShellCommand::Export { file } => {
            if file.is_empty() {
                tracker.view_mut().println(HELP_TEXT_EXPORT);
            }
            // The tracker reports the outcome through the view
            let _ = tracker.export_to_csv(file.first().map_or("", String::as_str));
        }
        ShellCommand::Preview => match tracker.preview_csv() {
            Ok(csv) => tracker.view_mut().print(&csv),
            Err(e) => tracker.view_mut().println(&e.user_message()),
        },
        ShellCommand::Help => tracker.view_mut().println(HELP),
        ShellCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn apply_filter_command<W: Write>(
    tracker: &mut ExpenseTracker<TerminalView<W>>,
    command: FilterCommand,
) {
    let filter: TrackerResult<Option<Box<dyn TransactionFilter>>> = match command {
        FilterCommand::Category { name } => CategoryFilter::parse(&name)
            .map(|f| Some(Box::new(f) as Box<dyn TransactionFilter>))
            .map_err(TrackerError::from),
        FilterCommand::Amount { min, max } => build_amount_filter(&min, max.as_deref())
            .map(|f| Some(Box::new(f) as Box<dyn TransactionFilter>)),
        FilterCommand::Date { from, to } => DateRangeFilter::parse(&from, &to)
            .map(|f| Some(Box::new(f) as Box<dyn TransactionFilter>)),
        FilterCommand::Clear => Ok(None),
    };

    match filter {
        Ok(Some(filter)) => {
            let description = filter.describe();
            tracker.set_filter(filter);
            tracker.apply_filter();
            let shown = tracker.displayed_transactions().len();
            let total = tracker.transactions().len();
            tracker.view_mut().println(&format!(
                "Filter: {} ({} of {} shown)",
                description, shown, total
            ));
        }
        Ok(None) => {
            tracker.clear_filter();
            tracker.apply_filter();
        }
        Err(e) => tracker.view_mut().println(&e.user_message()),
    }
}

fn build_amount_filter(min: &str, max: Option<&str>) -> TrackerResult<AmountFilter> {
    let min = parse_amount(min)?;
    match max {
        Some(max) => AmountFilter::new(min, parse_amount(max)?),
        None => AmountFilter::exactly(min),
    }
}

/// Read commands from `input` until it ends or `quit` is entered
///
/// With `interactive` set, a prompt is printed before each line.
pub fn run<R: BufRead, W: Write>(
    input: R,
    tracker: &mut ExpenseTracker<TerminalView<W>>,
    interactive: bool,
) -> TrackerResult<()> {
    if interactive {
        tracker
            .view_mut()
            .println("Expense tracker. Type 'help' for commands.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            tracker.view_mut().print("> ");
        }

        let Some(line) = lines.next() else { break };
        let line = line?;

        let flow = match parse_line(&line) {
            Ok(Some(command)) => execute(tracker, command),
            Ok(None) => Flow::Continue,
            Err(e) => {
                tracing::debug!(line = %line, "unparsable shell input");
                let message = e.render().to_string();
                let first = message.lines().next().unwrap_or_default().to_string();
                tracker
                    .view_mut()
                    .println(&format!("{} (type 'help' for commands)", first));
                Flow::Continue
            }
        };

        if let Some(e) = tracker.view_mut().take_error() {
            return Err(e.into());
        }
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
