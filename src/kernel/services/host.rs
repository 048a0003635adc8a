use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use super::ports::{
    EditorEngine, EngineOptions, EngineResult, ThemeResult, ThemeSource, FORMAT_DOCUMENT_ACTION,
};
use crate::kernel::theme::{resolve_theme_id, ThemeRegistry, DEFAULT_THEME};

/// The single editor engine of the process plus the themes registered with it.
///
/// Injected into the workbench instead of living in a global, so tests can hand in a fake
/// engine.
pub struct EditorHost {
    engine: Arc<dyn EditorEngine>,
    themes: Arc<dyn ThemeSource>,
    options: EngineOptions,
    bootstrapped: OnceCell<()>,
    registry: Mutex<ThemeRegistry>,
}

impl EditorHost {
    pub fn new(
        engine: Arc<dyn EditorEngine>,
        themes: Arc<dyn ThemeSource>,
        options: EngineOptions,
    ) -> Self {
        Self {
            engine,
            themes,
            options,
            bootstrapped: OnceCell::new(),
            registry: Mutex::new(ThemeRegistry::default()),
        }
    }

    pub fn engine(&self) -> &dyn EditorEngine {
        self.engine.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.bootstrapped.initialized()
    }

    /// Bootstraps the engine on first use. Concurrent callers wait for the same attempt.
    ///
    /// A failed attempt leaves the host unloaded; the next call bootstraps again.
    pub async fn load_engine(&self) -> EngineResult<&dyn EditorEngine> {
        self.bootstrapped
            .get_or_try_init(|| {
                tracing::info!("bootstrapping editor engine");
                self.engine.bootstrap(self.options.clone())
            })
            .await?;
        Ok(self.engine.as_ref())
    }

    /// Activates `requested`, substituting the default theme for unknown ids or themes that
    /// fail to load. Returns the id actually applied.
    pub async fn apply_theme(&self, requested: &str) -> &'static str {
        let engine = match self.load_engine().await {
            Ok(engine) => engine,
            Err(e) => {
                tracing::warn!(error = %e, theme = %requested, "cannot apply theme without engine");
                return DEFAULT_THEME;
            }
        };

        let theme_id = resolve_theme_id(requested).unwrap_or_else(|| {
            tracing::debug!(theme = %requested, "unknown theme id");
            DEFAULT_THEME
        });

        let applied = match self.ensure_theme(theme_id).await {
            Ok(()) => theme_id,
            Err(e) if theme_id != DEFAULT_THEME => {
                tracing::debug!(error = %e, theme = %theme_id, "theme failed to load");
                if let Err(e) = self.ensure_theme(DEFAULT_THEME).await {
                    tracing::warn!(error = %e, "default theme failed to load");
                }
                DEFAULT_THEME
            }
            Err(e) => {
                tracing::warn!(error = %e, "default theme failed to load");
                DEFAULT_THEME
            }
        };

        engine.set_theme(applied);
        tracing::debug!(theme = %applied, "theme applied");
        applied
    }

    /// Fetches and registers `id` with the engine unless already registered.
    pub async fn ensure_theme(&self, id: &str) -> ThemeResult<()> {
        let mut registry = self.registry.lock().await;
        if registry.contains(id) {
            return Ok(());
        }
        let definition = self.themes.load(id).await?;
        self.engine.define_theme(id, &definition)?;
        registry.insert(id);
        Ok(())
    }

    pub async fn is_theme_registered(&self, id: &str) -> bool {
        self.registry.lock().await.contains(id)
    }

    /// Runs the engine's formatter for the current document. `false` when none exists.
    pub fn format_document(&self) -> bool {
        if !self.is_loaded() {
            return false;
        }
        self.engine.run_action(FORMAT_DOCUMENT_ACTION)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/host.rs"]
mod tests;
