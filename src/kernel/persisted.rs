use serde::{Deserialize, Serialize};

use super::files::OpenFile;
use super::layout::BottomPanelTab;
use super::state::AppState;

/// Durable snapshot of the workbench. View state is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub files: Vec<OpenFile>,
    pub active_id: String,
    pub theme: String,
    pub bottom_panel_open: bool,
    pub bottom_panel_tab: BottomPanelTab,
    pub right_panel_open: bool,
    #[serde(default = "default_explorer_open")]
    pub explorer_open: bool,
}

fn default_explorer_open() -> bool {
    true
}

impl PersistedState {
    pub fn capture(state: &AppState) -> Self {
        Self {
            files: state.files.files().to_vec(),
            active_id: state.files.active_id().to_string(),
            theme: state.theme.clone(),
            bottom_panel_open: state.layout.bottom_panel_open,
            bottom_panel_tab: state.layout.bottom_panel_tab,
            right_panel_open: state.layout.right_panel_open,
            explorer_open: state.layout.explorer_open,
        }
    }
}
