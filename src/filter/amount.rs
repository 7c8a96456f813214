//! Filter by amount

use super::TransactionFilter;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::validation::validate_amount;

/// Keeps transactions whose amount lies in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountFilter {
    min: f64,
    max: f64,
}

impl AmountFilter {
    /// Both bounds must themselves be valid amounts and `min <= max`
    pub fn new(min: f64, max: f64) -> TrackerResult<Self> {
        validate_amount(min)?;
        validate_amount(max)?;
        if min > max {
            return Err(TrackerError::Filter(format!(
                "Minimum amount {} is greater than maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Keep only transactions of exactly `amount`
    pub fn exactly(amount: f64) -> TrackerResult<Self> {
        Self::new(amount, amount)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl TransactionFilter for AmountFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        (self.min..=self.max).contains(&transaction.amount())
    }

    fn describe(&self) -> String {
        if self.min == self.max {
            format!("amount = {}", self.min)
        } else {
            format!("{} <= amount <= {}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_support::sample;

    #[test]
    fn test_range_is_inclusive() {
        let filtered = AmountFilter::new(12.5, 300.0).unwrap().filter(&sample());
        let amounts: Vec<_> = filtered.iter().map(|t| t.amount()).collect();
        assert_eq!(amounts, vec![12.5, 300.0, 80.0, 80.0]);
    }

    #[test]
    fn test_exact_amount() {
        let filtered = AmountFilter::exactly(80.0).unwrap().filter(&sample());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].category(), "Food");
        assert_eq!(filtered[1].category(), "bills");
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(AmountFilter::new(0.0, 10.0).unwrap_err().is_validation());
        assert!(AmountFilter::new(1.0, 1001.0).unwrap_err().is_validation());
        assert!(matches!(
            AmountFilter::new(50.0, 10.0),
            Err(TrackerError::Filter(_))
        ));
    }

    #[test]
    fn test_describe() {
        assert_eq!(AmountFilter::exactly(5.0).unwrap().describe(), "amount = 5");
        assert_eq!(
            AmountFilter::new(1.0, 2.5).unwrap().describe(),
            "1 <= amount <= 2.5"
        );
    }
}
