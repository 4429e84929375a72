#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use finanzas_core::storage::JsonStorage;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the individual test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated storage backend backed by a unique directory.
pub fn temp_storage() -> JsonStorage {
    JsonStorage::new(Some(temp_dir())).expect("create json storage backend")
}
