use crate::ledger::{Transaction, DEBT_CATEGORY};

use super::{
    aggregate::{compute_totals, Totals},
    round_to_tenth,
};

/// Recommended minimum share of income kept as surplus, in percent.
pub const SAVINGS_RATE_TARGET: f64 = 20.0;

/// Share of income spent on debt beyond which the ratio is flagged.
pub const DEBT_RATIO_LIMIT: f64 = 30.0;

/// Percentage of income retained as surplus, one decimal place.
///
/// Zero income is a defined fallback of 0, and negative balances clamp
/// to 0%: the metric reports "money saved", which has a floor of zero
/// even when the underlying balance is negative.
pub fn savings_rate(totals: &Totals) -> f64 {
    if totals.income == 0.0 {
        return 0.0;
    }
    round_to_tenth(totals.balance().max(0.0) / totals.income * 100.0)
}

/// Percentage of income consumed by debt-category expenses, one decimal
/// place. Unclamped; both operands are non-negative.
pub fn debt_ratio(transactions: &[Transaction], totals: &Totals) -> f64 {
    if totals.income == 0.0 {
        return 0.0;
    }
    let debt: f64 = transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.category == DEBT_CATEGORY)
        .map(|txn| txn.amount)
        .sum();
    round_to_tenth(debt / totals.income * 100.0)
}

/// Balance expressed as a multiple of total expense, one decimal place.
///
/// Zero expense is a defined fallback of 0. Unlike the savings rate this
/// is not clamped: a negative result is a legitimate deficit signal.
pub fn emergency_fund_months(totals: &Totals) -> f64 {
    if totals.expense == 0.0 {
        return 0.0;
    }
    round_to_tenth(totals.balance() / totals.expense)
}

/// The three health metrics computed from one ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthReport {
    pub savings_rate: f64,
    pub debt_ratio: f64,
    pub emergency_fund_months: f64,
}

pub fn health_report(transactions: &[Transaction]) -> HealthReport {
    let totals = compute_totals(transactions);
    HealthReport {
        savings_rate: savings_rate(&totals),
        debt_ratio: debt_ratio(transactions, &totals),
        emergency_fund_months: emergency_fund_months(&totals),
    }
}

/// Assessment of the savings rate against the recommended target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsStatus {
    OnTrack,
    BelowTarget,
}

impl SavingsStatus {
    pub fn for_rate(rate: f64) -> Self {
        if rate >= SAVINGS_RATE_TARGET {
            Self::OnTrack
        } else {
            Self::BelowTarget
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::OnTrack => "Excellent! You are above the recommended 20%.",
            Self::BelowTarget => "Goal: try to reach 20%.",
        }
    }
}

/// Assessment of the debt ratio against the risk threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtStatus {
    Healthy,
    AtRisk,
}

impl DebtStatus {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio <= DEBT_RATIO_LIMIT {
            Self::Healthy
        } else {
            Self::AtRisk
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy. Your debts are under control.",
            Self::AtRisk => "Warning: spending over 30-40% of income on debt is risky.",
        }
    }
}
