//! 底部面板视图模型（Terminal / Problems）

use crate::kernel::{AppState, BottomPanelTab, ProblemSeverity};

pub const EMPTY_TERMINAL: &str = "No output.";
pub const EMPTY_PROBLEMS: &str = "No problems have been detected in the workspace.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomTabItem {
    pub tab: BottomPanelTab,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRow {
    pub severity: ProblemSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BottomPanelBody {
    Terminal(Vec<String>),
    Problems(Vec<ProblemRow>),
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomPanelModel {
    pub tabs: Vec<BottomTabItem>,
    pub body: BottomPanelBody,
}

/// `None` while the panel is closed. The selected tab survives closing.
pub fn bottom_panel(state: &AppState) -> Option<BottomPanelModel> {
    if !state.layout.bottom_panel_open {
        return None;
    }

    let selected = state.layout.bottom_panel_tab;
    let tabs = BottomPanelTab::ALL
        .iter()
        .map(|&tab| BottomTabItem {
            tab,
            title: tab_title(state, tab),
            active: tab == selected,
        })
        .collect();

    let body = match selected {
        BottomPanelTab::Terminal if state.terminal.is_empty() => {
            BottomPanelBody::Empty(EMPTY_TERMINAL)
        }
        BottomPanelTab::Terminal => BottomPanelBody::Terminal(state.terminal.lines().to_vec()),
        BottomPanelTab::Problems if state.problems.is_empty() => {
            BottomPanelBody::Empty(EMPTY_PROBLEMS)
        }
        BottomPanelTab::Problems => BottomPanelBody::Problems(
            state
                .problems
                .items()
                .iter()
                .map(|p| ProblemRow {
                    severity: p.severity,
                    message: p.message.clone(),
                })
                .collect(),
        ),
    };

    Some(BottomPanelModel { tabs, body })
}

fn tab_title(state: &AppState, tab: BottomPanelTab) -> String {
    match tab {
        BottomPanelTab::Problems if !state.problems.is_empty() => {
            format!("{} ({})", tab.label(), state.problems.items().len())
        }
        _ => tab.label().to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/bottom_panel.rs"]
mod tests;
