mod common;

use std::fs;

use finanzas_core::{
    errors::FinanceError,
    ledger::Transaction,
    storage::StorageBackend,
};

#[test]
fn missing_store_seeds_the_sample_dataset() {
    let storage = common::temp_storage();
    let ledger = storage.load().expect("load seeds");
    assert_eq!(ledger.transaction_count(), 6);
    assert!(ledger.transactions()[0].is_income());
    assert_eq!(ledger.transactions()[0].amount, 3500.0);
}

#[test]
fn seeding_does_not_touch_the_store_file() {
    let storage = common::temp_storage();
    let _ = storage.load().expect("load seeds");
    assert!(!storage.store_path().exists());
}

#[test]
fn mutations_survive_a_reload() {
    let storage = common::temp_storage();
    let mut ledger = storage.load().expect("load seeds");
    let id = ledger.add_transaction(
        Transaction::expense(45.5, "food", "Weekly groceries").expect("valid txn"),
    );
    storage.save(&ledger).expect("save ledger");

    let reloaded = storage.load().expect("reload ledger");
    assert_eq!(reloaded.transaction_count(), 7);
    assert_eq!(reloaded.transactions()[0].id, id);
}

#[test]
fn removals_survive_a_reload() {
    let storage = common::temp_storage();
    let mut ledger = storage.load().expect("load seeds");
    assert!(ledger.remove_transaction(3));
    storage.save(&ledger).expect("save ledger");

    let reloaded = storage.load().expect("reload ledger");
    assert_eq!(reloaded.transaction_count(), 5);
    assert!(reloaded.transactions().iter().all(|txn| txn.id != 3));
}

#[test]
fn remove_of_unknown_id_changes_nothing() {
    let storage = common::temp_storage();
    let mut ledger = storage.load().expect("load seeds");
    assert!(!ledger.remove_transaction(999));
    assert_eq!(ledger.transaction_count(), 6);
}

#[test]
fn malformed_store_content_is_rejected() {
    let storage = common::temp_storage();
    fs::write(storage.store_path(), "not json at all").expect("write junk");
    let err = storage.load().expect_err("junk must not parse");
    assert!(matches!(err, FinanceError::Serde(_)));
}

#[test]
fn unrecognized_kind_is_rejected_at_the_storage_boundary() {
    let storage = common::temp_storage();
    let record = r#"[{
        "id": 1,
        "kind": "transfer",
        "amount": 10.0,
        "category": "food",
        "date": "2024-12-01",
        "description": "bad kind"
    }]"#;
    fs::write(storage.store_path(), record).expect("write record");
    let err = storage.load().expect_err("unknown kind must not parse");
    assert!(matches!(err, FinanceError::Serde(_)));
}

#[test]
fn non_numeric_amount_is_rejected_at_the_storage_boundary() {
    let storage = common::temp_storage();
    let record = r#"[{
        "id": 1,
        "kind": "expense",
        "amount": "lots",
        "category": "food",
        "date": "2024-12-01",
        "description": "bad amount"
    }]"#;
    fs::write(storage.store_path(), record).expect("write record");
    assert!(storage.load().is_err());
}
