use crate::ledger::{Transaction, TransactionKind};

/// Income and expense sums over one ledger snapshot. Both values are
/// non-negative by construction; the balance may not be.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Sums amounts by kind. Empty input yields zero totals.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, txn| {
        match txn.kind {
            TransactionKind::Income => acc.income += txn.amount,
            TransactionKind::Expense => acc.expense += txn.amount,
        }
        acc
    })
}

/// Per-category expense sum.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Groups expenses by category, preserving first-encounter order.
/// Categories without any expense record are absent from the result.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        match groups.iter_mut().find(|group| group.category == txn.category) {
            Some(group) => group.total += txn.amount,
            None => groups.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }
    groups
}
