use super::layout::BottomPanelTab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Mount,
    EngineReady,
    EngineFailed { reason: String },
    RetryBootstrap,
    SelectFile { id: String },
    SelectRelative { delta: isize },
    NewFile,
    EditContent { id: String, text: String },
    ChangeLanguage { id: String, language: String },
    CursorMoved { line: u32, column: u32 },
    SetTheme { theme: String },
    ThemeApplied { requested: String, applied: String },
    Format,
    ToggleExplorer,
    ToggleBottomPanel,
    ToggleRightPanel,
    SetBottomTab { tab: BottomPanelTab },
    ClearTerminal,
}
