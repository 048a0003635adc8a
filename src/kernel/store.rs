use super::diagnostic::Diagnostic;
use super::files::Selection;
use super::persisted::PersistedState;
use super::{Action, AppState, Effect, WorkbenchPhase};

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
            diagnostics: Vec::new(),
        }
    }

    fn diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
            ..Self::default()
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let persists = touches_persisted_state(&action);
        let mut result = self.reduce(action);

        if result.state_changed && persists {
            result
                .effects
                .push(Effect::Persist(PersistedState::capture(&self.state)));
        }
        for diagnostic in &result.diagnostics {
            diagnostic.emit();
        }
        result
    }

    fn reduce(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Mount => match self.state.phase {
                WorkbenchPhase::Loading => DispatchResult {
                    effects: vec![Effect::BootstrapEngine],
                    state_changed: false,
                    diagnostics: Vec::new(),
                },
                _ => DispatchResult::unchanged(),
            },
            Action::EngineReady => {
                if self.state.phase.is_ready() {
                    return DispatchResult::unchanged();
                }
                self.state.phase = WorkbenchPhase::Ready;
                let active = self.state.files.active_id().to_string();
                DispatchResult::changed(vec![
                    Effect::ShowActiveFile,
                    Effect::RestoreViewState { id: active },
                    Effect::ApplyTheme {
                        theme: self.state.theme.clone(),
                    },
                ])
            }
            Action::EngineFailed { reason } => {
                tracing::error!(reason = %reason, "editor engine failed to bootstrap");
                self.state.phase = WorkbenchPhase::BootstrapFailed { reason };
                DispatchResult::changed(Vec::new())
            }
            Action::RetryBootstrap => match self.state.phase {
                WorkbenchPhase::BootstrapFailed { .. } => {
                    tracing::info!("retrying editor engine bootstrap");
                    self.state.phase = WorkbenchPhase::Loading;
                    DispatchResult::changed(vec![Effect::BootstrapEngine])
                }
                _ => DispatchResult::unchanged(),
            },
            Action::SelectFile { id } => self.select(&id),
            Action::SelectRelative { delta } => {
                let id = self.state.files.relative_id(delta).to_string();
                self.select(&id)
            }
            Action::NewFile => {
                let from = self.state.files.active_id().to_string();
                let id = self.state.files.create();
                self.state.terminal.push(format!("Created {}", id));
                self.state.cursor = None;
                tracing::info!(id = %id, "created file");
                DispatchResult::changed(switch_effects(from, id))
            }
            Action::EditContent { id, text } => {
                if self.state.files.update_content(&id, text) {
                    return DispatchResult::changed(Vec::new());
                }
                let active_id = self.state.files.active_id();
                if id != active_id {
                    return DispatchResult::diagnostic(Diagnostic::StaleEdit {
                        id,
                        active_id: active_id.to_string(),
                    });
                }
                DispatchResult::unchanged()
            }
            Action::ChangeLanguage { id, language } => {
                if !self.state.files.change_language(&id, &language) {
                    if !self.state.files.contains(&id) {
                        return DispatchResult::diagnostic(Diagnostic::UnknownFile { id });
                    }
                    return DispatchResult::unchanged();
                }
                let effects = if id == self.state.files.active_id() {
                    vec![Effect::SetEngineLanguage { language }]
                } else {
                    Vec::new()
                };
                DispatchResult::changed(effects)
            }
            Action::CursorMoved { line, column } => {
                let cursor = Some(super::CursorPosition { line, column });
                if self.state.cursor == cursor {
                    return DispatchResult::unchanged();
                }
                self.state.cursor = cursor;
                DispatchResult::changed(Vec::new())
            }
            Action::SetTheme { theme } => {
                if self.state.phase.is_ready() {
                    return DispatchResult {
                        effects: vec![Effect::ApplyTheme { theme }],
                        state_changed: false,
                        diagnostics: Vec::new(),
                    };
                }
                // Applied (and reconciled) once the engine is ready.
                if self.state.theme == theme {
                    return DispatchResult::unchanged();
                }
                self.state.theme = theme;
                DispatchResult::changed(Vec::new())
            }
            Action::ThemeApplied { requested, applied } => {
                let mut diagnostics = Vec::new();
                if requested != applied {
                    diagnostics.push(Diagnostic::ThemeFallback {
                        requested,
                        applied: applied.clone(),
                    });
                }
                let state_changed = self.state.theme != applied;
                self.state.theme = applied;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                    diagnostics,
                }
            }
            Action::Format => {
                if !self.state.phase.is_ready() {
                    return DispatchResult::diagnostic(Diagnostic::EngineNotReady {
                        action: "format",
                    });
                }
                DispatchResult {
                    effects: vec![Effect::FormatDocument],
                    state_changed: false,
                    diagnostics: Vec::new(),
                }
            }
            Action::ToggleExplorer => {
                self.state.layout.toggle_explorer();
                DispatchResult::changed(Vec::new())
            }
            Action::ToggleBottomPanel => {
                self.state.layout.toggle_bottom_panel();
                DispatchResult::changed(Vec::new())
            }
            Action::ToggleRightPanel => {
                self.state.layout.toggle_right_panel();
                DispatchResult::changed(Vec::new())
            }
            Action::SetBottomTab { tab } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.layout.set_bottom_tab(tab),
                diagnostics: Vec::new(),
            },
            Action::ClearTerminal => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.terminal.clear(),
                diagnostics: Vec::new(),
            },
        }
    }

    fn select(&mut self, id: &str) -> DispatchResult {
        match self.state.files.select(id) {
            Selection::Switched { from } => {
                self.state.cursor = None;
                DispatchResult::changed(switch_effects(from, id.to_string()))
            }
            Selection::AlreadyActive => DispatchResult::unchanged(),
            Selection::Unknown => DispatchResult::diagnostic(Diagnostic::UnknownFile {
                id: id.to_string(),
            }),
        }
    }
}

/// The engine still shows `from` when the capture runs, so the snapshot belongs to it.
fn switch_effects(from: String, to: String) -> Vec<Effect> {
    vec![
        Effect::CaptureViewState { id: from },
        Effect::ShowActiveFile,
        Effect::RestoreViewState { id: to },
    ]
}

fn touches_persisted_state(action: &Action) -> bool {
    matches!(
        action,
        Action::SelectFile { .. }
            | Action::SelectRelative { .. }
            | Action::NewFile
            | Action::EditContent { .. }
            | Action::ChangeLanguage { .. }
            | Action::SetTheme { .. }
            | Action::ThemeApplied { .. }
            | Action::ToggleExplorer
            | Action::ToggleBottomPanel
            | Action::ToggleRightPanel
            | Action::SetBottomTab { .. }
    )
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
