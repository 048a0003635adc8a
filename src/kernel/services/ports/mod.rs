//! Service ports: traits + data contracts.

pub mod config;
pub mod engine;
pub mod runtime;
pub mod settings;
pub mod storage;
pub mod theme;

pub use config::{CompilerOptions, EngineOptions};
pub use engine::{
    EditorEngine, EngineError, EngineEvent, EngineModel, Result as EngineResult,
    FORMAT_DOCUMENT_ACTION,
};
pub use runtime::BoxFuture;
pub use settings::{Settings, WorkbenchSettings};
pub use storage::{KeyValueStorage, Result as StorageResult, StorageError};
pub use theme::{Result as ThemeResult, ThemeError, ThemeSource};
