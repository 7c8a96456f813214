//! Custom error types for the expense tracker
//!
//! User input problems are modelled separately from I/O and contract
//! violations so callers can show the former as plain messages.

use thiserror::Error;

use crate::constants;

/// A rejected piece of user input
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Amount must be > 0 and <= 1000")]
    AmountOutOfRange(f64),

    #[error("Amount must be a number: {0}")]
    AmountNotANumber(String),

    #[error("Category must be one of: food, travel, bills, entertainment, other")]
    UnknownCategory(String),

    #[error("{}", constants::ERROR_EMPTY_FILENAME)]
    EmptyFileName,

    #[error("{}", constants::ERROR_INVALID_CSV_EXTENSION)]
    InvalidCsvExtension(String),

    #[error("Invalid timestamp format: '{0}'")]
    InvalidTimestampFormat(String),
}

/// The main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Bad user input, recovered locally
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Caller broke an API contract (e.g. blank export destination)
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Invalid filter parameters
    #[error("Filter error: {0}")]
    Filter(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Settings that cannot be read, parsed or used
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a precondition error
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// The message to show a user, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Precondition(msg)
            | Self::Filter(msg)
            | Self::Io(msg)
            | Self::Config(msg) => msg.clone(),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
