//! Pure calculation engine over an immutable transaction view.
//!
//! Every function here is side-effect free and deterministic: callers
//! hand in a snapshot of the ledger and get values back. Division-by-zero
//! cases are defined fallbacks (zero), never errors.

pub mod aggregate;
pub mod health;
pub mod projection;

pub use aggregate::{compute_totals, expense_by_category, CategoryTotal, Totals};
pub use health::{
    debt_ratio, emergency_fund_months, health_report, savings_rate, DebtStatus, HealthReport,
    SavingsStatus, DEBT_RATIO_LIMIT, SAVINGS_RATE_TARGET,
};
pub use projection::{project_capital, project_with_profile, projected_net_worth, ProjectionPoint};

/// Rounds to one decimal place, the precision all ratio metrics report.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round_to_tenth;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(55.714), 55.7);
        assert_eq!(round_to_tenth(-0.45), -0.5);
        assert_eq!(round_to_tenth(20.0), 20.0);
    }
}
