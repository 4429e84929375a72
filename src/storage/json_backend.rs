use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ledger::Ledger,
    utils::{ensure_dir, resolve_base_dir},
};

use super::{Result, StorageBackend};

const STORE_FILE_NAME: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the ledger as one JSON array file under a base directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = resolve_base_dir(root);
        ensure_dir(&base)?;
        Ok(Self {
            file: base.join(STORE_FILE_NAME),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn store_path(&self) -> &Path {
        &self.file
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        write_atomic(&self.file, &json)?;
        tracing::debug!(
            path = %self.file.display(),
            count = ledger.transaction_count(),
            "ledger saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<Ledger> {
        if !self.file.exists() {
            tracing::info!("no stored ledger found, seeding sample dataset");
            return Ok(Ledger::seeded());
        }
        let data = fs::read_to_string(&self.file)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        Ok(ledger)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
