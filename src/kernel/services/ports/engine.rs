use super::config::EngineOptions;
use super::runtime::BoxFuture;
use crate::kernel::theme::ThemeDefinition;
use crate::kernel::view_state::ViewState;

/// Engine command that formats the current document.
pub const FORMAT_DOCUMENT_ACTION: &str = "editor.action.formatDocument";

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    BootstrapFailed(String),
    NotMounted,
    InvalidTheme { id: String, reason: String },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::BootstrapFailed(msg) => write!(f, "Engine bootstrap failed: {}", msg),
            EngineError::NotMounted => write!(f, "Engine is not mounted"),
            EngineError::InvalidTheme { id, reason } => {
                write!(f, "Invalid theme {}: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// What the engine should display: the controlled value/language of the active file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineModel {
    pub id: String,
    pub language: String,
    pub content: String,
}

/// Events the engine emits back into the workbench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ContentChanged { model_id: String, text: String },
    CursorMoved { line: u32, column: u32 },
}

/// The embedded editor engine. One instance per process; shared behind an `Arc`.
pub trait EditorEngine: Send + Sync {
    /// One-time initialisation, including language-service compiler options.
    fn bootstrap(&self, options: EngineOptions) -> BoxFuture<'_, Result<()>>;

    fn is_mounted(&self) -> bool;

    fn show_model(&self, model: EngineModel);

    fn set_language(&self, language: &str);

    fn save_view_state(&self) -> Option<ViewState>;

    fn restore_view_state(&self, state: &ViewState);

    fn focus(&self);

    fn define_theme(&self, id: &str, definition: &ThemeDefinition) -> Result<()>;

    fn set_theme(&self, id: &str);

    /// Runs an engine command. Returns `false` when the engine has no such action.
    fn run_action(&self, action_id: &str) -> bool;
}
