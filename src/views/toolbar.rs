use crate::kernel::language::language_label;
use crate::kernel::theme::theme_label;
use crate::kernel::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggle {
    pub label: &'static str,
    pub key_hint: &'static str,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarModel {
    pub file_label: String,
    pub language_id: String,
    pub language_label: String,
    pub theme_id: String,
    pub theme_label: String,
    /// Formatting goes through the engine, so it is offered only once the engine is ready.
    pub can_format: bool,
    pub toggles: [PanelToggle; 3],
}

pub fn toolbar(state: &AppState) -> ToolbarModel {
    let active = state.files.active();
    ToolbarModel {
        file_label: active.label.clone(),
        language_id: active.language.to_string(),
        language_label: language_label(&active.language).to_string(),
        theme_id: state.theme.clone(),
        theme_label: theme_label(&state.theme).to_string(),
        can_format: state.phase.is_ready(),
        toggles: [
            PanelToggle {
                label: "Explorer",
                key_hint: "^B",
                open: state.layout.explorer_open,
            },
            PanelToggle {
                label: "Panel",
                key_hint: "^J",
                open: state.layout.bottom_panel_open,
            },
            PanelToggle {
                label: "Details",
                key_hint: "^K",
                open: state.layout.right_panel_open,
            },
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/toolbar.rs"]
mod tests;
