use super::*;
use crate::kernel::services::adapters::{DisabledStorage, MemoryStorage};
use crate::kernel::services::ports::{EngineOptions, KeyValueStorage};
use crate::kernel::services::testing::{block_on, count_warnings, FakeEngine, FakeThemes};
use crate::kernel::services::STORAGE_KEY;
use crate::kernel::{OpenFile, PersistedState, WorkbenchPhase, DEFAULT_THEME};

struct Harness {
    engine: Arc<FakeEngine>,
    themes: Arc<FakeThemes>,
    storage: Arc<MemoryStorage>,
}

impl Harness {
    fn new() -> Self {
        Self::with(FakeEngine::new(), FakeThemes::new())
    }

    fn with(engine: FakeEngine, themes: FakeThemes) -> Self {
        Self {
            engine: Arc::new(engine),
            themes: Arc::new(themes),
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    fn workbench(&self) -> Workbench {
        let host = Arc::new(EditorHost::new(
            self.engine.clone(),
            self.themes.clone(),
            EngineOptions::default(),
        ));
        let persistence = PersistenceBridge::new(self.storage.clone());
        Workbench::new(host, persistence, &WorkbenchSettings::default())
    }

    fn mounted(&self) -> Workbench {
        let mut workbench = self.workbench();
        block_on(workbench.mount());
        assert!(workbench.state().phase.is_ready());
        workbench
    }

    fn persisted(&self) -> Option<PersistedState> {
        let raw = self.storage.get(STORAGE_KEY).unwrap()?;
        Some(serde_json::from_str(&raw).unwrap())
    }

    fn seed(&self, state: &PersistedState) {
        self.storage
            .set(STORAGE_KEY, &serde_json::to_string(state).unwrap())
            .unwrap();
    }
}

fn sample(files: Vec<OpenFile>, active_id: &str) -> PersistedState {
    PersistedState {
        files,
        active_id: active_id.to_string(),
        theme: "dracula".to_string(),
        bottom_panel_open: false,
        bottom_panel_tab: BottomPanelTab::Problems,
        right_panel_open: true,
        explorer_open: true,
    }
}

#[test]
fn test_mount_shows_active_file_and_applies_theme() {
    let harness = Harness::new();
    let workbench = harness.mounted();

    assert_eq!(harness.engine.bootstrap_calls(), 1);
    assert_eq!(harness.engine.shown(), vec!["app.tsx".to_string()]);
    let model = harness.engine.model().unwrap();
    assert_eq!(model.language, "typescript");
    assert_eq!(model.content, workbench.state().files.active().content);
    assert_eq!(harness.engine.theme().as_deref(), Some(DEFAULT_THEME));
    assert_eq!(harness.themes.loads(DEFAULT_THEME), 1);
}

#[test]
fn test_mount_twice_bootstraps_once() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();
    block_on(workbench.mount());
    assert_eq!(harness.engine.bootstrap_calls(), 1);
    assert_eq!(harness.engine.shown().len(), 1);
}

#[test]
fn test_tab_switch_round_trips_view_state() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    harness.engine.move_cursor(10, 4, 120);
    block_on(workbench.select_file("styles.css"));
    assert_eq!(harness.engine.model().unwrap().id, "styles.css");
    assert_eq!(harness.engine.cursor(), (1, 1, 0));
    assert!(workbench.view_states().contains("app.tsx"));

    harness.engine.move_cursor(3, 2, 0);
    block_on(workbench.select_file("app.tsx"));
    assert_eq!(harness.engine.cursor(), (10, 4, 120));
    assert_eq!(harness.engine.focus_count(), 1);

    block_on(workbench.select_file("styles.css"));
    assert_eq!(harness.engine.cursor(), (3, 2, 0));
}

#[test]
fn test_selecting_active_or_unknown_file_is_quiet() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    assert!(block_on(workbench.select_file("app.tsx")).is_empty());
    let diagnostics = block_on(workbench.select_file("missing.ts"));
    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnknownFile {
            id: "missing.ts".to_string()
        }]
    );
    assert_eq!(workbench.state().files.active_id(), "app.tsx");
    assert_eq!(harness.engine.shown().len(), 1);
}

#[test]
fn test_new_file_becomes_active_and_persists() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    let id = block_on(workbench.new_file());
    assert_eq!(id, "untitled-3.ts");
    assert_eq!(workbench.state().files.active_id(), id);
    assert!(workbench.state().terminal.contains("Created untitled-3.ts"));
    assert_eq!(harness.engine.model().unwrap().content, "");

    let persisted = harness.persisted().unwrap();
    assert_eq!(persisted.active_id, id);
    assert_eq!(persisted.files.len(), 3);
}

#[test]
fn test_engine_events_update_active_file() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    block_on(workbench.handle_engine_event(EngineEvent::ContentChanged {
        model_id: "app.tsx".to_string(),
        text: "export {};\n".to_string(),
    }));
    assert_eq!(workbench.state().files.active().content, "export {};\n");
    assert_eq!(
        harness.persisted().unwrap().files[0].content,
        "export {};\n"
    );

    block_on(workbench.handle_engine_event(EngineEvent::CursorMoved { line: 4, column: 9 }));
    let cursor = workbench.state().cursor.unwrap();
    assert_eq!((cursor.line, cursor.column), (4, 9));
}

#[test]
fn test_late_edit_for_previous_file_is_dropped() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();
    let original = workbench.state().files.get("app.tsx").unwrap().content.clone();

    block_on(workbench.select_file("styles.css"));
    let diagnostics = block_on(workbench.handle_engine_event(EngineEvent::ContentChanged {
        model_id: "app.tsx".to_string(),
        text: "late".to_string(),
    }));

    assert!(matches!(diagnostics[..], [Diagnostic::StaleEdit { .. }]));
    assert_eq!(workbench.state().files.get("app.tsx").unwrap().content, original);
}

#[test]
fn test_change_language_of_active_file_reaches_engine() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    block_on(workbench.change_language("app.tsx", "javascript"));
    assert_eq!(harness.engine.model().unwrap().language, "javascript");
    assert_eq!(workbench.state().files.active().language, "javascript");

    block_on(workbench.change_language("styles.css", "html"));
    assert_eq!(harness.engine.model().unwrap().language, "javascript");
    assert_eq!(workbench.state().files.get("styles.css").unwrap().language, "html");
}

#[test]
fn test_rehydrate_heals_missing_active_id() {
    let harness = Harness::new();
    harness.seed(&sample(
        vec![
            OpenFile::new("main.ts", "typescript", "let a = 1;\n"),
            OpenFile::new("notes.md", "markdown", "# hi\n"),
        ],
        "gone.ts",
    ));

    let workbench = harness.mounted();
    let state = workbench.state();
    assert_eq!(state.files.active_id(), "main.ts");
    assert_eq!(state.files.len(), 2);
    assert_eq!(state.theme, "dracula");
    assert!(!state.layout.bottom_panel_open);
    assert!(state.layout.right_panel_open);
    assert_eq!(harness.engine.model().unwrap().id, "main.ts");
    assert_eq!(harness.engine.theme().as_deref(), Some("dracula"));
}

#[test]
fn test_rehydrate_with_no_files_uses_defaults() {
    let harness = Harness::new();
    harness.seed(&sample(Vec::new(), "x"));

    let workbench = harness.workbench();
    assert_eq!(workbench.state().files.active_id(), "app.tsx");
    assert_eq!(workbench.state().theme, DEFAULT_THEME);
}

#[test]
fn test_bootstrap_failure_then_retry() {
    let harness = Harness::with(FakeEngine::failing_bootstraps(1), FakeThemes::new());
    let mut workbench = harness.workbench();

    block_on(workbench.mount());
    assert!(matches!(
        workbench.state().phase,
        WorkbenchPhase::BootstrapFailed { .. }
    ));
    assert!(harness.engine.shown().is_empty());

    // The file model keeps working without an engine.
    let id = block_on(workbench.new_file());
    assert_eq!(workbench.state().files.active_id(), id);
    assert!(harness.engine.shown().is_empty());

    block_on(workbench.retry_bootstrap());
    assert!(workbench.state().phase.is_ready());
    assert_eq!(harness.engine.bootstrap_calls(), 2);
    assert_eq!(harness.engine.model().unwrap().id, id);
}

#[test]
fn test_format_before_ready_reports_not_ready() {
    let harness = Harness::with(FakeEngine::failing_bootstraps(1), FakeThemes::new());
    let mut workbench = harness.workbench();
    block_on(workbench.mount());

    let diagnostics = block_on(workbench.format());
    assert_eq!(
        diagnostics,
        vec![Diagnostic::EngineNotReady { action: "format" }]
    );
    assert!(harness.engine.actions().is_empty());
}

#[test]
fn test_format_unavailable_for_language() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    assert!(block_on(workbench.format()).is_empty());
    block_on(workbench.select_file("styles.css"));
    let diagnostics = block_on(workbench.format());
    assert_eq!(
        diagnostics,
        vec![Diagnostic::FormatUnavailable {
            language: "css".to_string()
        }]
    );
    assert_eq!(harness.engine.actions().len(), 2);
}

#[test]
fn test_set_theme_applies_and_persists() {
    let harness = Harness::new();
    let mut workbench = harness.mounted();

    assert!(block_on(workbench.set_theme("monokai")).is_empty());
    assert_eq!(workbench.state().theme, "monokai");
    assert_eq!(harness.engine.theme().as_deref(), Some("monokai"));
    assert_eq!(harness.persisted().unwrap().theme, "monokai");

    block_on(workbench.set_theme("monokai"));
    assert_eq!(harness.themes.loads("monokai"), 1);
}

#[test]
fn test_unknown_or_broken_theme_falls_back() {
    let harness = Harness::with(FakeEngine::new(), FakeThemes::without(&["dracula"]));
    let mut workbench = harness.mounted();
    block_on(workbench.set_theme("monokai"));

    let (diagnostics, warnings) = count_warnings(|| block_on(workbench.set_theme("solarized")));
    assert_eq!(warnings, 1);
    assert_eq!(
        diagnostics,
        vec![Diagnostic::ThemeFallback {
            requested: "solarized".to_string(),
            applied: DEFAULT_THEME.to_string(),
        }]
    );
    assert_eq!(workbench.state().theme, DEFAULT_THEME);

    let (_, warnings) = count_warnings(|| block_on(workbench.set_theme("dracula")));
    assert_eq!(warnings, 1);
    assert_eq!(workbench.state().theme, DEFAULT_THEME);
    assert_eq!(harness.engine.theme().as_deref(), Some(DEFAULT_THEME));
}

#[test]
fn test_theme_chosen_before_ready_is_applied_on_mount() {
    let harness = Harness::new();
    let mut workbench = harness.workbench();
    block_on(workbench.set_theme("github-light"));
    assert_eq!(workbench.state().theme, "github-light");

    block_on(workbench.mount());
    assert_eq!(harness.engine.theme().as_deref(), Some("github-light"));
}

#[test]
fn test_panel_toggles_persist() {
    let harness = Harness::new();
    let mut workbench = harness.workbench();

    block_on(workbench.toggle_explorer());
    block_on(workbench.toggle_bottom_panel());
    block_on(workbench.toggle_right_panel());
    block_on(workbench.set_bottom_tab(BottomPanelTab::Problems));

    let persisted = harness.persisted().unwrap();
    assert!(!persisted.explorer_open);
    assert!(!persisted.bottom_panel_open);
    assert!(persisted.right_panel_open);
    assert_eq!(persisted.bottom_panel_tab, BottomPanelTab::Problems);
}

#[test]
fn test_reload_restores_previous_session() {
    let harness = Harness::new();
    {
        let mut workbench = harness.mounted();
        block_on(workbench.new_file());
        block_on(workbench.handle_engine_event(EngineEvent::ContentChanged {
            model_id: "untitled-3.ts".to_string(),
            text: "const x = 1;\n".to_string(),
        }));
        block_on(workbench.set_theme("github-light"));
    }

    let workbench = harness.workbench();
    let state = workbench.state();
    assert_eq!(state.files.active_id(), "untitled-3.ts");
    assert_eq!(state.files.active().content, "const x = 1;\n");
    assert_eq!(state.theme, "github-light");
    assert!(workbench.view_states().is_empty());
}

#[test]
fn test_disabled_storage_does_not_break_workbench() {
    let engine = Arc::new(FakeEngine::new());
    let host = Arc::new(EditorHost::new(
        engine.clone(),
        Arc::new(FakeThemes::new()),
        EngineOptions::default(),
    ));
    let mut workbench = Workbench::new(
        host,
        PersistenceBridge::new(Arc::new(DisabledStorage)),
        &WorkbenchSettings::default(),
    );

    block_on(workbench.mount());
    let id = block_on(workbench.new_file());
    assert_eq!(workbench.state().files.active_id(), id);
    assert_eq!(engine.model().unwrap().id, id);
}
