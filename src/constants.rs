//! Shared literals: CSV layout, categories and user-facing messages

/// Required file name suffix for exports (compared case-insensitively)
pub const CSV_FILE_EXTENSION: &str = ".csv";

pub const CSV_HEADER_SERIAL: &str = "Serial";
pub const CSV_HEADER_AMOUNT: &str = "Amount";
pub const CSV_HEADER_CATEGORY: &str = "Category";
pub const CSV_HEADER_TIMESTAMP: &str = "Timestamp";
pub const CSV_DELIMITER: char = ',';
pub const CSV_LINE_TERMINATOR: &str = "\n";

/// Inclusive upper bound for a transaction amount
pub const MAX_AMOUNT: f64 = 1000.0;

/// Default rendering of transaction timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const ERROR_EMPTY_FILENAME: &str = "File name cannot be empty.";
pub const ERROR_INVALID_CSV_EXTENSION: &str = "File name must end with .csv";
pub const ERROR_EXPORT_FAILED: &str = "Failed to export transactions to CSV file.";
pub const ERROR_BLANK_DESTINATION: &str = "Export destination cannot be blank.";

pub const SUCCESS_EXPORT: &str = "Transactions successfully exported to: ";

pub const DIALOG_TITLE_ERROR: &str = "Error";
pub const DIALOG_TITLE_SUCCESS: &str = "Success";

pub const HELP_TEXT_EXPORT: &str = "Enter a file name ending with .csv (e.g., expenses.csv)";
