//! Input validation for amounts, categories, export file names and
//! timestamp formats
//!
//! Each rule has a `Result`-returning form carrying the user-facing reason
//! and a boolean form built on top of it, so the two cannot disagree.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::constants::{CSV_FILE_EXTENSION, MAX_AMOUNT};
use crate::error::ValidationError;
use crate::models::Category;

/// Check that `0 < amount <= 1000`
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    // Written so NaN fails both comparisons
    if amount > 0.0 && amount <= MAX_AMOUNT {
        Ok(())
    } else {
        Err(ValidationError::AmountOutOfRange(amount))
    }
}

/// Check that `category` names one of the fixed categories
pub fn validate_category(category: &str) -> Result<Category, ValidationError> {
    category.parse()
}

/// Check that `name` looks like a CSV file name and return it trimmed
///
/// Only the shape of the name is checked. Illegal path characters and
/// existing files are left to the filesystem.
pub fn validate_csv_file_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyFileName);
    }

    if !trimmed.to_lowercase().ends_with(CSV_FILE_EXTENSION)
        || trimmed.len() <= CSV_FILE_EXTENSION.len()
    {
        return Err(ValidationError::InvalidCsvExtension(trimmed.to_string()));
    }

    Ok(trimmed)
}

/// Check that `format` renders a timestamp without a time zone
///
/// Offset specifiers such as `%z` parse fine but cannot be rendered for a
/// naive timestamp, so the format is tried against a sample value.
pub fn validate_timestamp_format(format: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidTimestampFormat(format.to_string());

    if format.trim().is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    {
        return Err(invalid());
    }

    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::default().format(format)).map_err(|_| invalid())
}

/// Parse a raw amount typed by the user
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::AmountNotANumber(text.trim().to_string()))
}

pub fn is_valid_amount(amount: f64) -> bool {
    validate_amount(amount).is_ok()
}

pub fn is_valid_category(category: &str) -> bool {
    validate_category(category).is_ok()
}

pub fn is_valid_csv_file_name(name: &str) -> bool {
    validate_csv_file_name(name).is_ok()
}

pub fn is_valid_timestamp_format(format: &str) -> bool {
    validate_timestamp_format(format).is_ok()
}
