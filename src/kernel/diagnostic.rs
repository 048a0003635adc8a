//! Signals for conditions the workbench absorbs instead of failing.
//!
//! None of these change what the user sees; they exist so a degraded workbench can be
//! debugged from the log.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownFile { id: String },
    StaleEdit { id: String, active_id: String },
    ThemeFallback { requested: String, applied: String },
    PersistedStateDiscarded { reason: String },
    ActiveIdHealed { requested: String, active_id: String },
    FormatUnavailable { language: String },
    EngineNotReady { action: &'static str },
}

impl Diagnostic {
    pub fn emit(&self) {
        match self {
            Diagnostic::UnknownFile { id } => {
                tracing::debug!(id = %id, "ignoring selection of unknown file");
            }
            Diagnostic::StaleEdit { id, active_id } => {
                tracing::debug!(id = %id, active_id = %active_id, "ignoring edit for inactive file");
            }
            Diagnostic::ThemeFallback { requested, applied } => {
                tracing::warn!(requested = %requested, applied = %applied, "theme fell back");
            }
            Diagnostic::PersistedStateDiscarded { reason } => {
                tracing::warn!(reason = %reason, "discarding persisted workbench state");
            }
            Diagnostic::ActiveIdHealed {
                requested,
                active_id,
            } => {
                tracing::info!(
                    requested = %requested,
                    active_id = %active_id,
                    "persisted active file missing, using first file"
                );
            }
            Diagnostic::FormatUnavailable { language } => {
                tracing::debug!(language = %language, "no formatter for language");
            }
            Diagnostic::EngineNotReady { action } => {
                tracing::debug!(action = %action, "editor engine not ready");
            }
        }
    }
}
