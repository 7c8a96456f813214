//! Transaction filters
//!
//! A filter selects a subset of transactions for display. Every
//! implementation returns a new vector holding the selected transactions in
//! their original relative order; the input is never modified.

pub mod amount;
pub mod category;
pub mod date;

pub use amount::AmountFilter;
pub use category::CategoryFilter;
pub use date::DateRangeFilter;

use crate::models::Transaction;

/// A rule for selecting which transactions are displayed
pub trait TransactionFilter: Send + Sync {
    /// Select the matching transactions, preserving order
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }

    /// Whether a single transaction passes the filter
    fn matches(&self, transaction: &Transaction) -> bool;

    /// Short human-readable description, e.g. for a status line
    fn describe(&self) -> String;
}

/// Apply an optional filter; `None` passes everything through
pub fn apply(
    filter: Option<&dyn TransactionFilter>,
    transactions: &[Transaction],
) -> Vec<Transaction> {
    match filter {
        Some(filter) => filter.filter(transactions),
        None => transactions.to_vec(),
    }
}
