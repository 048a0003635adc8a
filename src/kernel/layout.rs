use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomPanelTab {
    #[default]
    Terminal,
    Problems,
}

impl BottomPanelTab {
    pub const ALL: [BottomPanelTab; 2] = [BottomPanelTab::Terminal, BottomPanelTab::Problems];

    pub fn label(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Problems => "Problems",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Terminal => Self::Problems,
            Self::Problems => Self::Terminal,
        }
    }
}

/// Visibility of the auxiliary panels. Independent of the open files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayoutState {
    pub explorer_open: bool,
    pub bottom_panel_open: bool,
    pub bottom_panel_tab: BottomPanelTab,
    pub right_panel_open: bool,
}

impl Default for PanelLayoutState {
    fn default() -> Self {
        Self {
            explorer_open: true,
            bottom_panel_open: true,
            bottom_panel_tab: BottomPanelTab::Terminal,
            right_panel_open: false,
        }
    }
}

impl PanelLayoutState {
    pub fn toggle_explorer(&mut self) {
        self.explorer_open = !self.explorer_open;
    }

    pub fn toggle_bottom_panel(&mut self) {
        self.bottom_panel_open = !self.bottom_panel_open;
    }

    pub fn toggle_right_panel(&mut self) {
        self.right_panel_open = !self.right_panel_open;
    }

    /// Selects the bottom tab without opening the panel; a closed panel keeps its tab.
    pub fn set_bottom_tab(&mut self, tab: BottomPanelTab) -> bool {
        if self.bottom_panel_tab == tab {
            return false;
        }
        self.bottom_panel_tab = tab;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
