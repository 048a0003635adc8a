use super::engine::EngineError;
use super::runtime::BoxFuture;
use crate::kernel::theme::ThemeDefinition;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug)]
pub enum ThemeError {
    NotFound(String),
    Parse { id: String, error: serde_json::Error },
    Engine(EngineError),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NotFound(id) => write!(f, "Theme not found: {}", id),
            ThemeError::Parse { id, error } => write!(f, "Invalid theme {}: {}", id, error),
            ThemeError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<EngineError> for ThemeError {
    fn from(e: EngineError) -> Self {
        ThemeError::Engine(e)
    }
}

/// Fetches theme definitions on demand.
pub trait ThemeSource: Send + Sync {
    fn load(&self, id: &str) -> BoxFuture<'_, Result<ThemeDefinition>>;
}
