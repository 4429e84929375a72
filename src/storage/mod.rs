pub mod json_backend;

use crate::{errors::FinanceError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Abstraction over persistence backends for the transaction ledger.
///
/// The persisted form is the whole transaction array, rewritten on every
/// mutation; there is no incremental persistence. `load` must hand out
/// the seeded starter dataset when no prior state exists, and is
/// responsible for validating stored data before the engine sees it.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn load(&self) -> Result<Ledger>;
}

pub use json_backend::JsonStorage;
