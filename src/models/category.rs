//! Expense categories
//!
//! The set of categories is closed: free-text categories are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Travel,
            Self::Bills,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// The lowercase token for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Bills => "bills",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Case-insensitive comparison against raw text
    pub fn matches(&self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a user-typed category
    ///
    /// The text must be non-blank and consist only of ASCII letters before
    /// it is lowercased and looked up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidationError::UnknownCategory(s.to_string());

        if s.trim().is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(unknown());
        }

        Self::all()
            .iter()
            .copied()
            .find(|category| category.matches(s))
            .ok_or_else(unknown)
    }
}
