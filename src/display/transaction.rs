//! Transaction table formatting
//!
//! Renders the displayed transactions as a fixed-width table with a
//! trailing total row.

use crate::constants::DEFAULT_TIMESTAMP_FORMAT;
use crate::models::Transaction;

/// Format a single transaction as a table row
pub fn format_transaction_row(
    serial: usize,
    txn: &Transaction,
    timestamp_format: &str,
    currency_symbol: &str,
) -> String {
    format!(
        "{:>4}  {:>12}  {:15}  {}",
        serial,
        format_amount(txn.amount(), currency_symbol),
        truncate(txn.category(), 15),
        format_date(txn, timestamp_format)
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    timestamp_format: &str,
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:>12}  {:15}  {}\n",
        "#", "Amount", "Category", "Date"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(
            index + 1,
            txn,
            timestamp_format,
            currency_symbol,
        ));
        output.push('\n');
    }

    let total: f64 = transactions.iter().map(Transaction::amount).sum();
    output.push_str(&"-".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "{:>4}  {:>12}\n",
        "Total",
        format_amount(total, currency_symbol)
    ));

    output
}

/// Format an amount with two decimals and a currency symbol
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

/// Render the timestamp, falling back to the default format if `format`
/// cannot be rendered
fn format_date(txn: &Transaction, format: &str) -> String {
    txn.format_timestamp(format)
        .or_else(|_| txn.format_timestamp(DEFAULT_TIMESTAMP_FORMAT))
        .unwrap_or_default()
}

/// Truncate a string to a maximum length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
