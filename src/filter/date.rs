//! Filter by creation date

use chrono::NaiveDate;

use super::TransactionFilter;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Keeps transactions created on a calendar day in `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeFilter {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRangeFilter {
    pub fn new(start: NaiveDate, end: NaiveDate) -> TrackerResult<Self> {
        if start > end {
            return Err(TrackerError::Filter(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` bounds typed by the user
    pub fn parse(start: &str, end: &str) -> TrackerResult<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }
}

fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Filter(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

impl TransactionFilter for DateRangeFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        let day = transaction.timestamp().date();
        self.start <= day && day <= self.end
    }

    fn describe(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_support::{day, sample};

    #[test]
    fn test_range_is_inclusive() {
        let filter = DateRangeFilter::new(day(2).date(), day(4).date()).unwrap();
        let filtered = filter.filter(&sample());
        let days: Vec<_> = filtered.iter().map(|t| t.timestamp()).collect();
        assert_eq!(days, vec![day(2), day(3), day(4)]);
    }

    #[test]
    fn test_single_day() {
        let filter = DateRangeFilter::parse("2024-01-06", "2024-01-06").unwrap();
        let filtered = filter.filter(&sample());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category(), "FOOD");
    }

    #[test]
    fn test_rejects_reversed_range() {
        assert!(DateRangeFilter::parse("2024-02-01", "2024-01-01").is_err());
    }

    #[test]
    fn test_rejects_bad_format() {
        let err = DateRangeFilter::parse("01/02/2024", "2024-01-05").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
