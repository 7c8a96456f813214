//! In-memory transaction store
//!
//! Append-only: transactions keep their insertion order and are never
//! modified or removed.

use crate::models::Transaction;

#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }
}
