use super::*;

#[test]
fn test_default_files() {
    let files = OpenFiles::default();
    let ids: Vec<&str> = files.ids().collect();
    assert_eq!(ids, vec!["app.tsx", "styles.css"]);
    assert_eq!(files.active_id(), "app.tsx");
    assert_eq!(files.active().language, "typescript");
}

#[test]
fn test_create_appends_and_selects() {
    let mut files = OpenFiles::default();
    let id = files.create();
    assert_eq!(id, "untitled-3.ts");
    assert_eq!(files.len(), 3);
    assert_eq!(files.active_id(), "untitled-3.ts");
    assert_eq!(files.active().content, "");
    assert_eq!(files.active().language, "typescript");
}

#[test]
fn test_create_many_yields_distinct_ids() {
    let mut files = OpenFiles::default();
    let mut ids: Vec<String> = (0..25).map(|_| files.create()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
    assert_eq!(files.len(), 27);
}

#[test]
fn test_create_skips_ids_already_taken() {
    let (mut files, _) = OpenFiles::from_parts(
        vec![
            OpenFile::new("a.ts", "typescript", ""),
            OpenFile::new("untitled-3.ts", "typescript", "taken"),
        ],
        "a.ts",
    )
    .unwrap();

    let id = files.create();
    assert_eq!(id, "untitled-4.ts");
    assert_eq!(files.get("untitled-3.ts").unwrap().content, "taken");
}

#[test]
fn test_select_unknown_is_noop() {
    let mut files = OpenFiles::default();
    assert_eq!(files.select("missing.ts"), Selection::Unknown);
    assert_eq!(files.active_id(), "app.tsx");
    assert_eq!(files.select("app.tsx"), Selection::AlreadyActive);
    assert_eq!(
        files.select("styles.css"),
        Selection::Switched {
            from: "app.tsx".to_string()
        }
    );
    assert_eq!(files.active_id(), "styles.css");
}

#[test]
fn test_update_content_only_touches_active_file() {
    let mut files = OpenFiles::default();
    let css_before = files.get("styles.css").unwrap().content.clone();

    assert!(files.update_content("app.tsx", "const x = 1;".to_string()));
    assert_eq!(files.get("app.tsx").unwrap().content, "const x = 1;");
    assert_eq!(files.get("styles.css").unwrap().content, css_before);

    // Not the active file: ignored.
    assert!(!files.update_content("styles.css", "body {}".to_string()));
    assert_eq!(files.get("styles.css").unwrap().content, css_before);

    // Same content: no change reported.
    assert!(!files.update_content("app.tsx", "const x = 1;".to_string()));
}

#[test]
fn test_change_language() {
    let mut files = OpenFiles::default();
    assert!(files.change_language("styles.css", "json"));
    assert_eq!(files.get("styles.css").unwrap().language, "json");
    assert!(!files.change_language("styles.css", "json"));
    assert!(!files.change_language("missing", "json"));
}

#[test]
fn test_from_parts_heals_active_id() {
    let (files, healed) = OpenFiles::from_parts(
        vec![
            OpenFile::new("one.ts", "typescript", "1"),
            OpenFile::new("two.ts", "typescript", "2"),
        ],
        "gone.ts",
    )
    .unwrap();
    assert!(healed);
    assert_eq!(files.active_id(), "one.ts");
}

#[test]
fn test_from_parts_drops_duplicates_and_rejects_empty() {
    let (files, healed) = OpenFiles::from_parts(
        vec![
            OpenFile::new("one.ts", "typescript", "first"),
            OpenFile::new("one.ts", "typescript", "second"),
        ],
        "one.ts",
    )
    .unwrap();
    assert!(!healed);
    assert_eq!(files.len(), 1);
    assert_eq!(files.active().content, "first");

    assert!(OpenFiles::from_parts(Vec::new(), "one.ts").is_none());
}

#[test]
fn test_relative_id_wraps() {
    let mut files = OpenFiles::default();
    files.create();
    assert_eq!(files.relative_id(1), "app.tsx");
    assert_eq!(files.relative_id(-1), "styles.css");
    assert_eq!(files.relative_id(3), "untitled-3.ts");
}
