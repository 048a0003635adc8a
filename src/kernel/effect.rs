use super::persisted::PersistedState;

/// Side effects requested by the store, executed in order by the workbench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    BootstrapEngine,
    CaptureViewState { id: String },
    ShowActiveFile,
    RestoreViewState { id: String },
    SetEngineLanguage { language: String },
    ApplyTheme { theme: String },
    FormatDocument,
    Persist(PersistedState),
}
