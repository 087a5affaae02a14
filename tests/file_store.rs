// FileStore against the on-disk fixture layout:
// tests/fixtures/banks.json + tests/fixtures/branches/<bank>.json

use std::path::PathBuf;
use zengin_gateway::{FileStore, ReferenceSource, TransferError};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_bank_lookup_from_disk() {
    let store = FileStore::new(fixtures_dir());

    let bank = store.bank("0001").unwrap().unwrap();
    assert_eq!(bank.name, "みずほ銀行");
    assert_eq!(bank.kana.as_deref(), Some("ミズホ"));

    // Second lookup hits the cache; same answer
    let again = store.bank("0001").unwrap().unwrap();
    assert_eq!(again, bank);
}

#[test]
fn test_unknown_bank_is_none_not_error() {
    let store = FileStore::new(fixtures_dir());
    assert!(store.bank("9999").unwrap().is_none());
}

#[test]
fn test_branch_lookup_from_disk() {
    let store = FileStore::new(fixtures_dir());

    let branch = store.branch("0001", "001").unwrap().unwrap();
    assert_eq!(branch.name, "東京営業部");

    let branch = store.branch("0001", "004").unwrap().unwrap();
    assert_eq!(branch.name, "丸の内支店");

    assert!(store.branch("0001", "999").unwrap().is_none());
}

#[test]
fn test_missing_branch_file_is_unavailable() {
    let store = FileStore::new(fixtures_dir());

    // Bank 0005 exists but has no branch table on disk
    assert!(store.bank("0005").unwrap().is_some());
    let err = store.branch("0005", "001").unwrap_err();
    assert_eq!(
        err,
        TransferError::ReferenceDataUnavailable("branches/0005.json".to_string())
    );
}

#[test]
fn test_malformed_bank_table_is_unavailable() {
    let store = FileStore::new(fixtures_dir().join("broken"));
    let err = store.bank("0001").unwrap_err();
    assert_eq!(
        err,
        TransferError::ReferenceDataUnavailable("banks.json".to_string())
    );
}

#[test]
fn test_missing_directory_is_unavailable() {
    let store = FileStore::new(fixtures_dir().join("no-such-dir"));
    assert!(matches!(
        store.bank("0001"),
        Err(TransferError::ReferenceDataUnavailable(_))
    ));
}
