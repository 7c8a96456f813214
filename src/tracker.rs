//! Expense tracker coordinator
//!
//! Ties validation, the transaction store, the active filter and the CSV
//! exporter together. Presentation is reached only through the
//! [`TrackerView`] trait, so any front end (terminal, GUI, tests) can
//! drive the same logic.
//!
//! Every operation runs to completion before returning and takes
//! `&mut self`; hosts sharing a tracker between threads should wrap it in a
//! single `Mutex` so that append-then-refresh and swap-then-apply are seen
//! atomically.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{DIALOG_TITLE_ERROR, DIALOG_TITLE_SUCCESS, ERROR_EXPORT_FAILED, SUCCESS_EXPORT};
use crate::error::TrackerResult;
use crate::export::CsvExporter;
use crate::filter::{self, TransactionFilter};
use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::validation;

/// An outcome to report to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success(_) => DIALOG_TITLE_SUCCESS,
            Self::Error(_) => DIALOG_TITLE_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Callbacks into the presentation layer
pub trait TrackerView {
    /// Show the full, unfiltered list
    fn refresh_table(&mut self, transactions: &[Transaction]);

    /// Show the result of the active filter
    fn display_filtered_transactions(&mut self, transactions: &[Transaction]);

    /// Report the outcome of an operation
    fn notify(&mut self, notice: Notice);
}

/// The coordinator for one transaction store
pub struct ExpenseTracker<V: TrackerView> {
    store: TransactionStore,
    filter: Option<Box<dyn TransactionFilter>>,
    /// What the view was last given
    displayed: Vec<Transaction>,
    exporter: CsvExporter,
    view: V,
}

impl<V: TrackerView> ExpenseTracker<V> {
    pub fn new(view: V) -> Self {
        Self::with_exporter(view, CsvExporter::default())
    }

    pub fn with_exporter(view: V, exporter: CsvExporter) -> Self {
        Self {
            store: TransactionStore::new(),
            filter: None,
            displayed: Vec::new(),
            exporter,
            view,
        }
    }

    /// Validate and record a new transaction, then refresh the display
    ///
    /// On a validation failure nothing is stored and the error's message is
    /// the one to show the user.
    pub fn add_transaction(&mut self, amount: f64, category: &str) -> TrackerResult<Transaction> {
        tracing::debug!(amount, category, "add: validating");

        if let Err(e) = validation::validate_amount(amount)
            .and_then(|()| validation::validate_category(category).map(|_| ()))
        {
            tracing::info!(reason = %e, "add: rejected");
            return Err(e.into());
        }

        let transaction = Transaction::new(amount, category)?;
        tracing::debug!("add: mutating");
        self.store.add(transaction.clone());

        tracing::debug!("add: refreshing");
        self.refresh();

        tracing::info!(amount, category, total = self.store.len(), "transaction added");
        Ok(transaction)
    }

    /// Replace the active filter without touching the display
    ///
    /// Call [`apply_filter`](Self::apply_filter) to show the result.
    pub fn set_filter(&mut self, filter: Box<dyn TransactionFilter>) {
        tracing::debug!(filter = %filter.describe(), "filter set");
        self.filter = Some(filter);
    }

    /// Remove the active filter; the next refresh shows everything
    pub fn clear_filter(&mut self) {
        tracing::debug!("filter cleared");
        self.filter = None;
    }

    pub fn active_filter(&self) -> Option<&dyn TransactionFilter> {
        self.filter.as_deref()
    }

    /// Run the active filter over the full store and display the result
    pub fn apply_filter(&mut self) {
        self.refresh();
    }

    /// Recompute the displayed list and hand it to the view
    pub fn refresh(&mut self) {
        self.displayed = filter::apply(self.filter.as_deref(), self.store.transactions());

        match &self.filter {
            None => self.view.refresh_table(&self.displayed),
            Some(_) => self.view.display_filtered_transactions(&self.displayed),
        }
    }

    /// Every stored transaction, unfiltered
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// The transactions as last displayed
    pub fn displayed_transactions(&self) -> &[Transaction] {
        &self.displayed
    }

    /// Export the displayed transactions to `file_name`
    ///
    /// The name is checked first; an invalid name is reported and no file
    /// is touched. The outcome is always reported through the view as well
    /// as returned.
    pub fn export_to_csv(&mut self, file_name: &str) -> TrackerResult<PathBuf> {
        tracing::debug!(file_name, "export: validating");

        let file_name = match validation::validate_csv_file_name(file_name) {
            Ok(name) => name,
            Err(e) => {
                tracing::info!(reason = %e, "export: rejected");
                self.view.notify(Notice::Error(e.to_string()));
                return Err(e.into());
            }
        };

        tracing::debug!(rows = self.displayed.len(), "export: exporting");
        match self.exporter.export_transactions(&self.displayed, file_name) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "export: succeeded");
                self.view
                    .notify(Notice::Success(format!("{}{}", SUCCESS_EXPORT, path.display())));
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "export: failed");
                self.view.notify(Notice::Error(format!(
                    "{}\n{}",
                    ERROR_EXPORT_FAILED,
                    e.user_message()
                )));
                Err(e)
            }
        }
    }

    /// Render the displayed transactions as CSV without writing a file
    pub fn preview_csv(&self) -> TrackerResult<String> {
        let mut out = Vec::new();
        self.exporter.write(&self.displayed, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TrackerError, ValidationError};
    use crate::filter::{AmountFilter, CategoryFilter};
    use crate::models::Category;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Default)]
    struct RecordingView {
        refreshed: Vec<usize>,
        filtered: Vec<usize>,
        notices: Vec<Notice>,
    }

    impl TrackerView for RecordingView {
        fn refresh_table(&mut self, transactions: &[Transaction]) {
            self.refreshed.push(transactions.len());
        }

        fn display_filtered_transactions(&mut self, transactions: &[Transaction]) {
            self.filtered.push(transactions.len());
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    fn tracker() -> ExpenseTracker<RecordingView> {
        ExpenseTracker::new(RecordingView::default())
    }

    fn path_in(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_add_valid_transaction() {
        let mut tracker = tracker();

        let txn = tracker.add_transaction(50.0, "Food").unwrap();

        assert_eq!(tracker.transactions().len(), 1);
        assert_eq!(txn.category_kind(), Some(Category::Food));
        assert_eq!(tracker.displayed_transactions(), tracker.transactions());
        assert_eq!(tracker.view().refreshed, vec![1]);
    }

    #[test]
    fn test_add_zero_amount_rejected() {
        let mut tracker = tracker();

        let err = tracker.add_transaction(0.0, "food").unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Amount must be > 0 and <= 1000");
        assert!(tracker.transactions().is_empty());
        assert!(tracker.view().refreshed.is_empty());
    }

    #[test]
    fn test_add_unknown_category_rejected() {
        let mut tracker = tracker();

        let err = tracker.add_transaction(20.0, "shopping").unwrap_err();

        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::UnknownCategory(_))
        ));
        assert_eq!(
            err.to_string(),
            "Category must be one of: food, travel, bills, entertainment, other"
        );
        assert!(tracker.transactions().is_empty());
    }

    #[test]
    fn test_amount_checked_before_category() {
        let mut tracker = tracker();
        let err = tracker.add_transaction(-1.0, "shopping").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_add_refreshes_through_active_filter() {
        let mut tracker = tracker();
        tracker.set_filter(Box::new(CategoryFilter::new(Category::Food)));

        tracker.add_transaction(10.0, "food").unwrap();
        tracker.add_transaction(20.0, "travel").unwrap();

        assert_eq!(tracker.transactions().len(), 2);
        assert_eq!(tracker.displayed_transactions().len(), 1);
        assert_eq!(tracker.view().filtered, vec![1, 1]);
    }

    #[test]
    fn test_swapping_filters_never_touches_store() {
        let mut tracker = tracker();
        tracker.add_transaction(10.0, "food").unwrap();
        tracker.add_transaction(200.0, "travel").unwrap();
        tracker.add_transaction(30.0, "food").unwrap();
        let before = tracker.transactions().to_vec();

        tracker.set_filter(Box::new(AmountFilter::new(100.0, 1000.0).unwrap()));
        tracker.apply_filter();
        assert_eq!(tracker.displayed_transactions().len(), 1);

        tracker.set_filter(Box::new(CategoryFilter::new(Category::Food)));
        tracker.apply_filter();
        let amounts: Vec<_> = tracker
            .displayed_transactions()
            .iter()
            .map(|t| t.amount())
            .collect();
        assert_eq!(amounts, vec![10.0, 30.0]);

        tracker.clear_filter();
        tracker.apply_filter();
        assert_eq!(tracker.displayed_transactions(), before.as_slice());
        assert_eq!(tracker.transactions(), before.as_slice());
    }

    #[test]
    fn test_set_filter_waits_for_apply() {
        let mut tracker = tracker();
        tracker.add_transaction(10.0, "food").unwrap();
        tracker.add_transaction(20.0, "bills").unwrap();

        tracker.set_filter(Box::new(CategoryFilter::new(Category::Bills)));
        assert_eq!(tracker.displayed_transactions().len(), 2);
        assert_eq!(
            tracker.active_filter().unwrap().describe(),
            "category = bills"
        );

        tracker.apply_filter();
        assert_eq!(tracker.displayed_transactions().len(), 1);
    }

    #[test]
    fn test_export_empty_file_name() {
        let mut tracker = tracker();

        let err = tracker.export_to_csv("").unwrap_err();

        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::EmptyFileName)
        ));
        assert_eq!(
            tracker.view().notices,
            vec![Notice::Error("File name cannot be empty.".into())]
        );
    }

    #[test]
    fn test_export_wrong_extension_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = tracker();
        tracker.add_transaction(10.0, "food").unwrap();
        let name = path_in(&temp_dir, "data.txt");

        let err = tracker.export_to_csv(&name).unwrap_err();

        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::InvalidCsvExtension(_))
        ));
        assert_eq!(
            tracker.view().notices,
            vec![Notice::Error("File name must end with .csv".into())]
        );
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_uses_displayed_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = tracker();
        tracker.add_transaction(10.0, "food").unwrap();
        tracker.add_transaction(20.0, "travel").unwrap();
        tracker.add_transaction(30.0, "Food").unwrap();
        tracker.set_filter(Box::new(CategoryFilter::new(Category::Food)));
        tracker.apply_filter();

        let name = format!("  {}  ", path_in(&temp_dir, "food.csv"));
        let path = tracker.export_to_csv(&name).unwrap();

        assert_eq!(path, temp_dir.path().join("food.csv"));
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Serial,Amount,Category,Timestamp");
        assert!(lines[1].starts_with("1,10,food,"));
        assert!(lines[2].starts_with("2,30,Food,"));

        let notice = tracker.view().notices.last().unwrap();
        assert_eq!(
            notice,
            &Notice::Success(format!(
                "Transactions successfully exported to: {}",
                path.display()
            ))
        );
        assert_eq!(notice.title(), "Success");
    }

    #[test]
    fn test_export_failure_reports_cause() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = tracker();
        tracker.add_transaction(10.0, "food").unwrap();
        let name = path_in(&temp_dir, "no-such-dir/out.csv");

        let err = tracker.export_to_csv(&name).unwrap_err();

        assert!(matches!(err, TrackerError::Io(_)));
        let notice = tracker.view().notices.last().unwrap();
        assert!(notice.is_error());
        assert!(notice
            .message()
            .starts_with("Failed to export transactions to CSV file.\n"));
        assert_eq!(tracker.transactions().len(), 1);
    }

    #[test]
    fn test_preview_matches_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = tracker();
        tracker.add_transaction(12.25, "bills").unwrap();

        let preview = tracker.preview_csv().unwrap();
        let path = tracker.export_to_csv(&path_in(&temp_dir, "b.csv")).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), preview);
    }
}
