//! Core data models for the expense tracker

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::Transaction;
