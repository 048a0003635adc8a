use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_args_uses_default_storage() {
    let parsed = parse_args(args(&[])).unwrap();
    assert_eq!(parsed, CliArgs::default());
    assert_eq!(
        storage_choice(&parsed, &WorkbenchSettings::default()),
        StorageChoice::Default
    );
}

#[test]
fn storage_dir_in_both_spellings() {
    let parsed = parse_args(args(&["--storage-dir", "/tmp/zb"])).unwrap();
    assert_eq!(parsed.storage_dir, Some(PathBuf::from("/tmp/zb")));

    let parsed = parse_args(args(&["--storage-dir=/tmp/other"])).unwrap();
    assert_eq!(
        storage_choice(&parsed, &WorkbenchSettings::default()),
        StorageChoice::Dir(PathBuf::from("/tmp/other"))
    );
}

#[test]
fn ephemeral_or_disabled_persistence_uses_memory() {
    let parsed = parse_args(args(&["--ephemeral"])).unwrap();
    assert_eq!(
        storage_choice(&parsed, &WorkbenchSettings::default()),
        StorageChoice::Memory
    );

    let settings = WorkbenchSettings {
        persist: false,
        ..WorkbenchSettings::default()
    };
    assert_eq!(
        storage_choice(&CliArgs::default(), &settings),
        StorageChoice::Memory
    );
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(parse_args(args(&["--storage-dir"])).is_err());
    assert!(parse_args(args(&["--storage-dir="])).is_err());
    assert!(parse_args(args(&["--ephemeral", "--storage-dir", "x"])).is_err());
    assert!(parse_args(args(&["notes.md"])).is_err());
    assert!(parse_args(args(&["--help"])).unwrap().help);
}

#[test]
fn file_storage_in_chosen_dir_persists_workbench_state() {
    let dir = tempfile::tempdir().unwrap();
    let storage = open_storage(StorageChoice::Dir(dir.path().to_path_buf()));
    storage.set("zbench.workbench.v1", "{}").unwrap();
    assert_eq!(
        storage.get("zbench.workbench.v1").unwrap().as_deref(),
        Some("{}")
    );
    assert!(dir.path().join("zbench.workbench.v1.json").exists());
}

#[test]
fn mount_waits_for_first_loading_frame() {
    let mut state = AppState::default();
    assert!(!mount_due(0, &state));
    assert!(mount_due(1, &state));

    state.phase = WorkbenchPhase::Ready;
    assert!(!mount_due(2, &state));

    state.phase = WorkbenchPhase::BootstrapFailed {
        reason: "boom".to_string(),
    };
    assert!(!mount_due(3, &state));
}
