//! Terminal front end
//!
//! Bridges stdin/stdout with the tracker: command parsing lives in
//! `shell`, rendering in `view`.

pub mod shell;
pub mod view;

pub use shell::{execute, parse_line, run, FilterCommand, Flow, ShellCommand};
pub use view::TerminalView;
