//! Ledger domain models and the fixed configuration catalogs.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod profile;
pub mod transaction;

pub use category::{CategoryInfo, DEBT_CATEGORY, EXPENSE_CATEGORIES, INCOME_CATEGORY};
pub use ledger::Ledger;
pub use profile::{RiskProfile, RISK_PROFILES};
pub use transaction::{Transaction, TransactionKind};
