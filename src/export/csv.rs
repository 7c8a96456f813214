//! CSV export of transactions
//!
//! Rows carry a positional serial number followed by amount, category and
//! timestamp. Only the text columns are ever quoted.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::{
    CSV_DELIMITER, CSV_HEADER_AMOUNT, CSV_HEADER_CATEGORY, CSV_HEADER_SERIAL,
    CSV_HEADER_TIMESTAMP, CSV_LINE_TERMINATOR, DEFAULT_TIMESTAMP_FORMAT, ERROR_BLANK_DESTINATION,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::validation::validate_timestamp_format;

/// Writes transaction lists to CSV files
#[derive(Debug, Clone)]
pub struct CsvExporter {
    timestamp_format: String,
    /// Write to a temp file and rename it over the destination
    atomic: bool,
    /// Directory that relative destinations are resolved against
    export_dir: Option<PathBuf>,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            atomic: false,
            export_dir: None,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an exporter from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timestamp_format: settings.timestamp_format.clone(),
            atomic: settings.atomic_export,
            export_dir: settings.export_dir.clone(),
        }
    }

    /// Use `format` for the timestamp column; rejects formats that cannot
    /// be rendered for a naive timestamp
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> TrackerResult<Self> {
        let format = format.into();
        validate_timestamp_format(&format)?;
        self.timestamp_format = format;
        Ok(self)
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Where an export to `destination` would be written
    pub fn resolve_destination(&self, destination: &str) -> PathBuf {
        let destination = Path::new(destination.trim());
        match &self.export_dir {
            Some(dir) if destination.is_relative() => dir.join(destination),
            _ => destination.to_path_buf(),
        }
    }

    /// Export `transactions` to `destination`, replacing any existing file
    ///
    /// An empty slice produces a header-only file. Returns the path that was
    /// written.
    ///
    /// # Errors
    ///
    /// `Precondition` if `destination` is blank (checked before any I/O),
    /// `Io` if the file cannot be created or written. A failed non-atomic
    /// export may leave a partially written file behind.
    pub fn export_transactions(
        &self,
        transactions: &[Transaction],
        destination: &str,
    ) -> TrackerResult<PathBuf> {
        if destination.trim().is_empty() {
            return Err(TrackerError::Precondition(ERROR_BLANK_DESTINATION.into()));
        }

        let path = self.resolve_destination(destination);

        if let Some(dir) = &self.export_dir {
            fs::create_dir_all(dir).map_err(|e| {
                TrackerError::Io(format!(
                    "Failed to create export directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        if self.atomic {
            self.write_atomic(transactions, &path)?;
        } else {
            self.write_file(transactions, &path, false)?;
        }

        tracing::debug!(path = %path.display(), rows = transactions.len(), "wrote CSV export");
        Ok(path)
    }

    /// Write the CSV text for `transactions` to any writer
    pub fn write<W: Write>(
        &self,
        transactions: &[Transaction],
        writer: &mut W,
    ) -> TrackerResult<()> {
        write_transactions_csv(transactions, writer, &self.timestamp_format)
            .map_err(|e| TrackerError::Io(e.to_string()))
    }

    fn write_file(
        &self,
        transactions: &[Transaction],
        path: &Path,
        sync: bool,
    ) -> TrackerResult<()> {
        let file = File::create(path).map_err(|e| {
            TrackerError::Io(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        self.write(transactions, &mut writer)?;

        writer
            .flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

        if sync {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| TrackerError::Io(format!("Failed to sync data: {}", e)))?;
        }

        Ok(())
    }

    fn write_atomic(&self, transactions: &[Transaction], path: &Path) -> TrackerResult<()> {
        let temp_path = temp_path_for(path);

        let result = self
            .write_file(transactions, &temp_path, true)
            .and_then(|()| {
                fs::rename(&temp_path, path)
                    .map_err(|e| TrackerError::Io(format!("Failed to rename temp file: {}", e)))
            });

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write the header and one row per transaction
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    timestamp_format: &str,
) -> io::Result<()> {
    write!(
        writer,
        "{}{d}{}{d}{}{d}{}{}",
        CSV_HEADER_SERIAL,
        CSV_HEADER_AMOUNT,
        CSV_HEADER_CATEGORY,
        CSV_HEADER_TIMESTAMP,
        CSV_LINE_TERMINATOR,
        d = CSV_DELIMITER
    )?;

    for (index, txn) in transactions.iter().enumerate() {
        let timestamp = txn.format_timestamp(timestamp_format).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Cannot render timestamps with format '{}'", timestamp_format),
            )
        })?;
        write!(
            writer,
            "{}{d}{}{d}{}{d}{}{}",
            index + 1,
            txn.amount(),
            escape_csv(txn.category()),
            escape_csv(&timestamp),
            CSV_LINE_TERMINATOR,
            d = CSV_DELIMITER
        )?;
    }

    Ok(())
}

/// Escape a string for CSV format
///
/// Values containing a comma, double quote or newline are wrapped in double
/// quotes with embedded quotes doubled; anything else is returned as is.
pub fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains(CSV_DELIMITER) || s.contains('"') || s.contains('\n') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}
