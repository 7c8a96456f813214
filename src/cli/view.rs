//! Terminal implementation of the tracker view

use std::io::{self, Write};

use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::models::Transaction;
use crate::tracker::{Notice, TrackerView};

/// Prints tables and notices to a writer
///
/// The view callbacks cannot fail, so the first write error is kept and
/// handed back through [`take_error`](Self::take_error).
pub struct TerminalView<W: Write> {
    out: W,
    timestamp_format: String,
    currency_symbol: String,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            timestamp_format: settings.timestamp_format.clone(),
            currency_symbol: settings.currency_symbol.clone(),
            error: None,
        }
    }

    /// Write raw text, remembering the first failure
    pub fn print(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }

    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_table(&mut self, transactions: &[Transaction]) {
        let table =
            format_transaction_table(transactions, &self.timestamp_format, &self.currency_symbol);
        self.print(&table);
    }
}

impl<W: Write> TrackerView for TerminalView<W> {
    fn refresh_table(&mut self, transactions: &[Transaction]) {
        self.print_table(transactions);
    }

    fn display_filtered_transactions(&mut self, transactions: &[Transaction]) {
        self.print_table(transactions);
    }

    fn notify(&mut self, notice: Notice) {
        self.println(&notice.to_string());
    }
}
