use crate::{errors::FinanceError, ledger::RiskProfile};

use super::aggregate::Totals;

/// One point of the compound-growth simulation, capital rounded to the
/// nearest whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub capital: i64,
}

/// Simulates annually compounded capital for years `0..=horizon_years`.
///
/// Year 0 already reflects one full year of contributions; each step
/// adds the annual contribution before growth so principal and new
/// savings compound together. The recorded capital is rounded, but the
/// running balance keeps compounding unrounded. A zero monthly savings
/// is a normal boundary and yields a flat all-zero sequence.
pub fn project_with_profile(
    profile: &RiskProfile,
    monthly_savings: f64,
    horizon_years: u32,
) -> Vec<ProjectionPoint> {
    let annual_contribution = monthly_savings * 12.0;
    let mut capital = annual_contribution;
    let mut points = Vec::with_capacity(horizon_years as usize + 1);
    for year in 0..=horizon_years {
        points.push(ProjectionPoint {
            year,
            capital: capital.round() as i64,
        });
        capital = (capital + annual_contribution) * (1.0 + profile.annual_return_rate);
    }
    points
}

/// Key-resolving wrapper over [`project_with_profile`]; unknown profile
/// keys are an error, never a silent default.
pub fn project_capital(
    profile_key: &str,
    monthly_savings: f64,
    horizon_years: u32,
) -> Result<Vec<ProjectionPoint>, FinanceError> {
    let profile = RiskProfile::resolve(profile_key)?;
    Ok(project_with_profile(profile, monthly_savings, horizon_years))
}

/// Capital at the end of the horizon when saving the current monthly
/// surplus (clamped at zero) under the given profile.
pub fn projected_net_worth(
    profile_key: &str,
    totals: &Totals,
    horizon_years: u32,
) -> Result<i64, FinanceError> {
    let monthly_savings = totals.balance().max(0.0);
    let points = project_capital(profile_key, monthly_savings, horizon_years)?;
    Ok(points.last().map(|point| point.capital).unwrap_or(0))
}
