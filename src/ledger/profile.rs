use crate::errors::FinanceError;

/// Named asset-allocation and return-rate configuration used to
/// parameterize capital projections. The catalog is closed: exactly
/// three profiles exist and the set is not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskProfile {
    pub key: &'static str,
    pub name: &'static str,
    /// Percentage allocated to bonds and other fixed-income assets.
    pub fixed_income_share: u8,
    /// Percentage allocated to equities; shares always sum to 100.
    pub equity_share: u8,
    pub annual_return_rate: f64,
    pub description: &'static str,
}

pub const RISK_PROFILES: &[RiskProfile] = &[
    RiskProfile {
        key: "conservative",
        name: "Conservative",
        fixed_income_share: 70,
        equity_share: 30,
        annual_return_rate: 0.05,
        description: "Prioritizes capital preservation.",
    },
    RiskProfile {
        key: "moderate",
        name: "Moderate",
        fixed_income_share: 50,
        equity_share: 50,
        annual_return_rate: 0.08,
        description: "Balance between safety and growth.",
    },
    RiskProfile {
        key: "aggressive",
        name: "Aggressive",
        fixed_income_share: 30,
        equity_share: 70,
        annual_return_rate: 0.10,
        description: "Seeks to maximize returns.",
    },
];

impl RiskProfile {
    /// Resolves a profile key, rejecting anything outside the catalog.
    /// Unknown keys are reported rather than silently defaulted so a
    /// caller-side typo cannot shift the projection unnoticed.
    pub fn resolve(key: &str) -> Result<&'static RiskProfile, FinanceError> {
        RISK_PROFILES
            .iter()
            .find(|profile| profile.key == key)
            .ok_or_else(|| FinanceError::UnknownProfile(key.to_string()))
    }

    pub fn all() -> &'static [RiskProfile] {
        RISK_PROFILES
    }
}
