//! expense-tracker - record expenses, filter them and export them to CSV
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: the immutable `Transaction` and the fixed `Category` set
//! - `validation`: rules for amounts, categories and export file names
//! - `filter`: the `TransactionFilter` trait and its implementations
//! - `export`: CSV serialization and file export
//! - `store`: the append-only in-memory transaction list
//! - `tracker`: the coordinator wiring the above to a `TrackerView`
//! - `config`: path resolution and persisted settings
//! - `display` / `cli`: the terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::tracker::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new(view);
//! tracker.add_transaction(42.5, "food")?;
//! tracker.export_to_csv("expenses.csv")?;
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod store;
pub mod tracker;
pub mod validation;

pub use error::{TrackerError, TrackerResult, ValidationError};
pub use tracker::{ExpenseTracker, Notice, TrackerView};
