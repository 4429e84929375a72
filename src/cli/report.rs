use crate::{
    engine::{
        compute_totals, expense_by_category, health_report, project_with_profile, projected_net_worth,
        savings_rate, DebtStatus, SavingsStatus,
    },
    errors::FinanceError,
    ledger::{category, Ledger, RiskProfile},
};

use super::output;

pub const DEFAULT_PROFILE: &str = "moderate";
pub const DEFAULT_HORIZON_YEARS: u32 = 20;

/// Renders the general-overview dashboard: balance cards, savings rate,
/// projected net worth, and the expense breakdown.
pub fn render_dashboard(ledger: &Ledger) -> Result<(), FinanceError> {
    let transactions = ledger.transactions();
    let totals = compute_totals(transactions);
    let rate = savings_rate(&totals);
    let net_worth = projected_net_worth(DEFAULT_PROFILE, &totals, DEFAULT_HORIZON_YEARS)?;

    output::section("General overview");
    // The balance card never shows a negative figure; deficits surface
    // through the health metrics instead.
    output::info(format!(
        "Available balance:   ${:.2}",
        totals.balance().max(0.0)
    ));
    output::info(format!("Income:              ${:.2}", totals.income));
    output::info(format!("Expenses:            ${:.2}", totals.expense));
    output::info(format!(
        "Savings rate:        {rate}%  ({})",
        SavingsStatus::for_rate(rate).message()
    ));
    output::info(format!(
        "Projected net worth: ${net_worth} ({DEFAULT_HORIZON_YEARS} years, {DEFAULT_PROFILE} profile)"
    ));

    let groups = expense_by_category(transactions);
    if !groups.is_empty() {
        output::section("Expenses by category");
        for group in &groups {
            output::info(format!(
                "{:<16} ${:>10.2}",
                category::display_name(&group.category),
                group.total
            ));
        }
    }
    Ok(())
}

/// Renders the three financial-health indicators with advisories.
pub fn render_health(ledger: &Ledger) {
    let report = health_report(ledger.transactions());

    output::section("Financial health");
    output::info(format!(
        "Savings rate:         {}%  ({})",
        report.savings_rate,
        SavingsStatus::for_rate(report.savings_rate).message()
    ));
    output::info(format!(
        "Debt ratio:           {}%  ({})",
        report.debt_ratio,
        DebtStatus::for_ratio(report.debt_ratio).message()
    ));
    output::info(format!(
        "Emergency fund:       {} months of expenses",
        report.emergency_fund_months
    ));
}

/// Renders the transaction table, most-recent-first.
pub fn render_transactions(ledger: &Ledger) {
    output::section("Transactions");
    if ledger.is_empty() {
        output::info("No transactions recorded.");
        return;
    }
    output::info(format!(
        "{:<15} {:<12} {:<16} {:>12}  {}",
        "ID", "DATE", "CATEGORY", "AMOUNT", "DESCRIPTION"
    ));
    for txn in ledger.transactions() {
        let label = if txn.is_income() {
            "Income"
        } else {
            category::display_name(&txn.category)
        };
        let sign = if txn.is_expense() { "-" } else { "+" };
        output::info(format!(
            "{:<15} {:<12} {:<16} {:>11}  {}",
            txn.id,
            txn.date,
            label,
            format!("{sign}${:.2}", txn.amount),
            txn.description
        ));
    }
}

/// Renders the investment strategy view: allocation split, expected
/// return, and the year-by-year capital projection.
pub fn render_projection(
    ledger: &Ledger,
    profile_key: &str,
    horizon_years: u32,
) -> Result<(), FinanceError> {
    let profile = RiskProfile::resolve(profile_key)?;
    let totals = compute_totals(ledger.transactions());
    let monthly_savings = totals.balance().max(0.0);

    output::section(format!("Investment strategy: {}", profile.name));
    output::info(profile.description);
    output::info(format!(
        "Allocation: {}% fixed income / {}% equities",
        profile.fixed_income_share, profile.equity_share
    ));
    output::info(format!(
        "Expected annual return: {:.0}%",
        profile.annual_return_rate * 100.0
    ));

    if monthly_savings == 0.0 {
        output::warning("A positive monthly balance is required to project savings.");
        return Ok(());
    }

    output::info(format!("Monthly savings: ${monthly_savings:.2}"));
    output::info(format!("{:<8} {:>14}", "YEAR", "CAPITAL"));
    for point in project_with_profile(profile, monthly_savings, horizon_years) {
        output::info(format!("{:<8} {:>13}", point.year, format!("${}", point.capital)));
    }
    Ok(())
}
