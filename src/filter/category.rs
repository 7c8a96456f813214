//! Filter by category

use super::TransactionFilter;
use crate::error::ValidationError;
use crate::models::{Category, Transaction};

/// Keeps transactions whose category matches, ignoring case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    category: Category,
}

impl CategoryFilter {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    /// Build from user text, rejecting anything outside the fixed set
    pub fn parse(category: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(category.parse()?))
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl TransactionFilter for CategoryFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        self.category.matches(transaction.category())
    }

    fn describe(&self) -> String {
        format!("category = {}", self.category)
    }
}
