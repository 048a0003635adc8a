use super::diagnostic::Diagnostic;
use super::files::OpenFiles;
use super::layout::PanelLayoutState;
use super::persisted::PersistedState;
use super::problems::ProblemsState;
use super::terminal::TerminalLog;
use super::theme::DEFAULT_THEME;

/// Lifecycle of the embedded editor engine as seen by the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkbenchPhase {
    #[default]
    Loading,
    Ready,
    BootstrapFailed {
        reason: String,
    },
}

impl WorkbenchPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, WorkbenchPhase::Ready)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkbenchPhase::Loading => "Loading",
            WorkbenchPhase::Ready => "Ready",
            WorkbenchPhase::BootstrapFailed { .. } => "Failed",
        }
    }
}

/// 1-based cursor position reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: WorkbenchPhase,
    pub files: OpenFiles,
    pub layout: PanelLayoutState,
    pub theme: String,
    pub cursor: Option<CursorPosition>,
    pub terminal: TerminalLog,
    pub problems: ProblemsState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }
}

impl AppState {
    pub fn with_theme(theme: &str) -> Self {
        Self {
            phase: WorkbenchPhase::Loading,
            files: OpenFiles::default(),
            layout: PanelLayoutState::default(),
            theme: theme.to_string(),
            cursor: None,
            terminal: TerminalLog::default(),
            problems: ProblemsState::default(),
        }
    }

    /// Rebuilds state from a persisted snapshot, falling back to `defaults` for anything that
    /// cannot be used.
    pub fn hydrate(defaults: AppState, persisted: Option<PersistedState>) -> (Self, Vec<Diagnostic>) {
        let Some(persisted) = persisted else {
            return (defaults, Vec::new());
        };

        let mut diagnostics = Vec::new();
        let requested = persisted.active_id;
        let Some((files, healed)) = OpenFiles::from_parts(persisted.files, &requested) else {
            diagnostics.push(Diagnostic::PersistedStateDiscarded {
                reason: "no open files".to_string(),
            });
            return (defaults, diagnostics);
        };
        if healed {
            diagnostics.push(Diagnostic::ActiveIdHealed {
                requested,
                active_id: files.active_id().to_string(),
            });
        }

        let state = Self {
            files,
            layout: PanelLayoutState {
                explorer_open: persisted.explorer_open,
                bottom_panel_open: persisted.bottom_panel_open,
                bottom_panel_tab: persisted.bottom_panel_tab,
                right_panel_open: persisted.right_panel_open,
            },
            theme: persisted.theme,
            ..defaults
        };
        (state, diagnostics)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
