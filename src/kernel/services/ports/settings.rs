use serde::{Deserialize, Serialize};

use super::config::EngineOptions;
use crate::kernel::theme::DEFAULT_THEME;
use crate::kernel::view_state::DEFAULT_VIEW_STATE_CAPACITY;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineOptions,
    #[serde(default)]
    pub workbench: WorkbenchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkbenchSettings {
    pub default_theme: String,
    pub view_state_capacity: usize,
    pub persist: bool,
}

impl Default for WorkbenchSettings {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME.to_string(),
            view_state_capacity: DEFAULT_VIEW_STATE_CAPACITY,
            persist: true,
        }
    }
}
