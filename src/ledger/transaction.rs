use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

use super::category::INCOME_CATEGORY;

/// One recorded financial event.
///
/// Ids are millisecond timestamps taken at creation time; the date
/// defaults to the creation date and is not edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Supported transaction kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Transaction {
    /// Creates an income record under the fixed income category.
    pub fn income(
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Self, FinanceError> {
        Self::build(TransactionKind::Income, amount, INCOME_CATEGORY, description)
    }

    /// Creates an expense record tagged with the supplied category key.
    pub fn expense(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, FinanceError> {
        Self::build(TransactionKind::Expense, amount, category, description)
    }

    fn build(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, FinanceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FinanceError::InvalidTransaction(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(FinanceError::InvalidTransaction(
                "description must not be empty".into(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id: now.timestamp_millis(),
            kind,
            amount,
            category: category.into(),
            date: now.date_naive(),
            description,
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
