use super::*;
use tempfile::tempdir;

#[test]
fn test_file_storage_round_trip() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested"));

    assert_eq!(storage.get("zbench.workbench.v1").unwrap(), None);
    storage.set("zbench.workbench.v1", "{\"a\":1}").unwrap();
    assert_eq!(
        storage.get("zbench.workbench.v1").unwrap().as_deref(),
        Some("{\"a\":1}")
    );
    assert!(dir.path().join("nested/zbench.workbench.v1.json").exists());

    storage.set("zbench.workbench.v1", "{}").unwrap();
    assert_eq!(storage.get("zbench.workbench.v1").unwrap().as_deref(), Some("{}"));
}

#[test]
fn test_file_storage_sanitizes_keys() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set("../escape/key", "x").unwrap();
    assert!(dir.path().join(".._escape_key.json").exists());
    assert_eq!(storage.get("../escape/key").unwrap().as_deref(), Some("x"));
}

#[test]
fn test_memory_storage_quota() {
    let storage = MemoryStorage::with_quota(16);
    storage.set("k", "small").unwrap();
    let err = storage.set("k", "this value is far too large").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { limit: 16, .. }));
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("small"));
}

#[test]
fn test_disabled_storage_is_unavailable() {
    let storage = DisabledStorage;
    assert!(matches!(
        storage.get("k"),
        Err(StorageError::Unavailable(_))
    ));
    assert!(storage.set("k", "v").is_err());
}
