//! Export of the displayed transactions
//!
//! Only CSV is supported.

pub mod csv;

pub use self::csv::{escape_csv, write_transactions_csv, CsvExporter};
