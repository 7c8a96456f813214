//! Transaction model
//!
//! A transaction is a single expense. It is validated when constructed and
//! cannot be changed afterwards.

use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fmt::{self, Write};

use super::category::Category;
use crate::error::ValidationError;
use crate::validation;

/// A recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: f64,

    /// Category as typed by the user; matched case-insensitively
    category: String,

    /// When the transaction was created
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    pub fn new(amount: f64, category: impl Into<String>) -> Result<Self, ValidationError> {
        Self::at(amount, category, Local::now().naive_local().trunc_subsecs(0))
    }

    /// Create a transaction with an explicit timestamp
    pub fn at(
        amount: f64,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let category = category.into();
        validation::validate_amount(amount)?;
        validation::validate_category(&category)?;

        Ok(Self {
            amount,
            category,
            timestamp,
        })
    }

    /// Build a transaction without validation, for exercising the export
    /// and filter paths with arbitrary field contents.
    #[cfg(test)]
    pub(crate) fn unchecked(
        amount: f64,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            timestamp,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The parsed category, if the stored text names one
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Render the timestamp with a strftime format
    ///
    /// Fails for formats a naive timestamp cannot satisfy, such as `%z`.
    pub fn format_timestamp(&self, format: &str) -> Result<String, fmt::Error> {
        let mut rendered = String::new();
        write!(rendered, "{}", self.timestamp.format(format))?;
        Ok(rendered)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.category,
            self.amount
        )
    }
}
