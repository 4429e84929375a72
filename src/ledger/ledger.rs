use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

/// Ordered collection of transaction records, most-recent-first.
///
/// Serializes transparently as a bare array; the storage layer rewrites
/// the whole array on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// The fixed starter dataset handed out when no prior state exists.
    pub fn seeded() -> Self {
        Self {
            transactions: vec![
                seed_record(1, TransactionKind::Income, 3500.0, "salary", 1, "Monthly salary"),
                seed_record(2, TransactionKind::Expense, 800.0, "housing", 2, "Rent"),
                seed_record(3, TransactionKind::Expense, 300.0, "food", 5, "Groceries"),
                seed_record(4, TransactionKind::Expense, 100.0, "utilities", 6, "Internet and power"),
                seed_record(5, TransactionKind::Expense, 200.0, "transport", 8, "Fuel"),
                seed_record(6, TransactionKind::Expense, 150.0, "entertainment", 10, "Dinner and movies"),
            ],
        }
    }

    /// Inserts at the head so the listing stays most-recent-first.
    pub fn add_transaction(&mut self, transaction: Transaction) -> i64 {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    /// Removes the record with the given id, reporting whether one existed.
    pub fn remove_transaction(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        self.transactions.len() != before
    }

    /// Immutable view of the records; the engine only ever reads this.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn seed_record(
    id: i64,
    kind: TransactionKind,
    amount: f64,
    category: &str,
    day: u32,
    description: &str,
) -> Transaction {
    Transaction {
        id,
        kind,
        amount,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 12, day).expect("valid seed date"),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ledger_has_six_records() {
        let ledger = Ledger::seeded();
        assert_eq!(ledger.transaction_count(), 6);
        assert!(ledger.transactions()[0].is_income());
    }

    #[test]
    fn add_inserts_at_head() {
        let mut ledger = Ledger::seeded();
        let txn = Transaction::expense(42.0, "food", "Takeaway").unwrap();
        let id = ledger.add_transaction(txn);
        assert_eq!(ledger.transactions()[0].id, id);
        assert_eq!(ledger.transaction_count(), 7);
    }

    #[test]
    fn remove_reports_whether_a_record_existed() {
        let mut ledger = Ledger::seeded();
        assert!(ledger.remove_transaction(3));
        assert!(!ledger.remove_transaction(3));
        assert_eq!(ledger.transaction_count(), 5);
    }

    #[test]
    fn serializes_as_bare_array() {
        let json = serde_json::to_string(&Ledger::seeded()).unwrap();
        assert!(json.starts_with('['));
        let restored: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Ledger::seeded());
    }
}
