//! 工作台：把文件/标签模型、面板布局、视图状态缓存和持久化组合成一个外壳
//!
//! 职责：
//! - 把用户操作转成 kernel `Action`
//! - 按顺序执行 `Store` 产出的 `Effect`（引擎调用、主题、持久化）
//! - 把引擎事件（内容变化、光标移动）回灌到 store

use std::collections::VecDeque;
use std::sync::Arc;

use crate::kernel::services::ports::{EngineEvent, EngineModel, WorkbenchSettings};
use crate::kernel::services::{EditorHost, PersistenceBridge};
use crate::kernel::{
    Action, AppState, BottomPanelTab, Diagnostic, Effect, Store, ViewStateCache,
};

pub struct Workbench {
    store: Store,
    host: Arc<EditorHost>,
    persistence: PersistenceBridge,
    view_states: ViewStateCache,
}

impl Workbench {
    /// Hydrates from persisted state. The engine is not touched until [`Workbench::mount`].
    pub fn new(
        host: Arc<EditorHost>,
        persistence: PersistenceBridge,
        settings: &WorkbenchSettings,
    ) -> Self {
        let defaults = AppState::with_theme(&settings.default_theme);
        let (state, diagnostics) = AppState::hydrate(defaults, persistence.load());
        for diagnostic in &diagnostics {
            diagnostic.emit();
        }
        tracing::info!(
            files = state.files.len(),
            active = %state.files.active_id(),
            theme = %state.theme,
            "workbench hydrated"
        );

        Self {
            store: Store::new(state),
            host,
            persistence,
            view_states: ViewStateCache::new(settings.view_state_capacity),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn host(&self) -> &EditorHost {
        &self.host
    }

    pub fn view_states(&self) -> &ViewStateCache {
        &self.view_states
    }

    /// Starts the engine bootstrap. On failure the workbench stays usable and can retry.
    pub async fn mount(&mut self) -> Vec<Diagnostic> {
        self.dispatch(Action::Mount).await
    }

    /// Dispatches `action` and everything its effects lead to. Returns the diagnostics raised
    /// along the way.
    pub async fn dispatch(&mut self, action: Action) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut pending = VecDeque::from([action]);

        while let Some(action) = pending.pop_front() {
            let result = self.store.dispatch(action);
            diagnostics.extend(result.diagnostics);
            for effect in result.effects {
                if let Some(next) = self.run_effect(effect, &mut diagnostics).await {
                    pending.push_back(next);
                }
            }
        }

        diagnostics
    }

    pub async fn handle_engine_event(&mut self, event: EngineEvent) -> Vec<Diagnostic> {
        let action = match event {
            EngineEvent::ContentChanged { model_id, text } => Action::EditContent {
                id: model_id,
                text,
            },
            EngineEvent::CursorMoved { line, column } => Action::CursorMoved { line, column },
        };
        self.dispatch(action).await
    }

    pub async fn select_file(&mut self, id: &str) -> Vec<Diagnostic> {
        self.dispatch(Action::SelectFile { id: id.to_string() }).await
    }

    pub async fn select_relative(&mut self, delta: isize) -> Vec<Diagnostic> {
        self.dispatch(Action::SelectRelative { delta }).await
    }

    /// Opens a new empty file and returns its id.
    pub async fn new_file(&mut self) -> String {
        self.dispatch(Action::NewFile).await;
        self.state().files.active_id().to_string()
    }

    pub async fn change_language(&mut self, id: &str, language: &str) -> Vec<Diagnostic> {
        self.dispatch(Action::ChangeLanguage {
            id: id.to_string(),
            language: language.to_string(),
        })
        .await
    }

    pub async fn set_theme(&mut self, theme: &str) -> Vec<Diagnostic> {
        self.dispatch(Action::SetTheme {
            theme: theme.to_string(),
        })
        .await
    }

    pub async fn format(&mut self) -> Vec<Diagnostic> {
        self.dispatch(Action::Format).await
    }

    pub async fn toggle_explorer(&mut self) {
        self.dispatch(Action::ToggleExplorer).await;
    }

    pub async fn toggle_bottom_panel(&mut self) {
        self.dispatch(Action::ToggleBottomPanel).await;
    }

    pub async fn toggle_right_panel(&mut self) {
        self.dispatch(Action::ToggleRightPanel).await;
    }

    pub async fn set_bottom_tab(&mut self, tab: BottomPanelTab) {
        self.dispatch(Action::SetBottomTab { tab }).await;
    }

    pub async fn retry_bootstrap(&mut self) -> Vec<Diagnostic> {
        self.dispatch(Action::RetryBootstrap).await
    }

    async fn run_effect(
        &mut self,
        effect: Effect,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Action> {
        match effect {
            Effect::BootstrapEngine => match self.host.load_engine().await {
                Ok(_) => Some(Action::EngineReady),
                Err(e) => Some(Action::EngineFailed {
                    reason: e.to_string(),
                }),
            },
            Effect::CaptureViewState { id } => {
                self.view_states.capture(&id, self.host.engine());
                None
            }
            Effect::ShowActiveFile => {
                if self.store.state().phase.is_ready() {
                    let active = self.store.state().files.active();
                    self.host.engine().show_model(EngineModel {
                        id: active.id.clone(),
                        language: active.language.to_string(),
                        content: active.content.clone(),
                    });
                }
                let files = &self.store.state().files;
                let pruned = self.view_states.retain_open(files.ids());
                if pruned > 0 {
                    tracing::debug!(pruned, "dropped view state for closed files");
                }
                None
            }
            Effect::RestoreViewState { id } => {
                if self.store.state().phase.is_ready() {
                    self.view_states.restore(&id, self.host.engine());
                }
                None
            }
            Effect::SetEngineLanguage { language } => {
                if self.store.state().phase.is_ready() {
                    self.host.engine().set_language(&language);
                }
                None
            }
            Effect::ApplyTheme { theme } => {
                let applied = self.host.apply_theme(&theme).await;
                Some(Action::ThemeApplied {
                    requested: theme,
                    applied: applied.to_string(),
                })
            }
            Effect::FormatDocument => {
                if !self.host.format_document() {
                    let diagnostic = Diagnostic::FormatUnavailable {
                        language: self.store.state().files.active().language.to_string(),
                    };
                    diagnostic.emit();
                    diagnostics.push(diagnostic);
                }
                None
            }
            Effect::Persist(snapshot) => {
                self.persistence.save(&snapshot);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/workbench.rs"]
mod tests;
