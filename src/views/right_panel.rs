use crate::kernel::language::language_label;
use crate::kernel::theme::theme_label;
use crate::kernel::{AppState, WorkbenchPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RightPanelModel {
    pub title: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

impl RightPanelModel {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Details of the active file. `None` while the panel is closed.
pub fn right_panel(state: &AppState) -> Option<RightPanelModel> {
    if !state.layout.right_panel_open {
        return None;
    }

    let active = state.files.active();
    let cursor = match state.cursor {
        Some(c) => format!("{}:{}", c.line, c.column),
        None => "-".to_string(),
    };
    let engine = match &state.phase {
        WorkbenchPhase::BootstrapFailed { reason } => format!("Failed: {}", reason),
        phase => phase.label().to_string(),
    };

    Some(RightPanelModel {
        title: "DETAILS",
        rows: vec![
            ("File", active.id.clone()),
            ("Language", language_label(&active.language).to_string()),
            ("Lines", active.line_count().to_string()),
            ("Characters", active.content.chars().count().to_string()),
            ("Cursor", cursor),
            ("Open files", state.files.len().to_string()),
            ("Theme", theme_label(&state.theme).to_string()),
            ("Engine", engine),
        ],
    })
}

#[cfg(test)]
#[path = "../../tests/unit/views/right_panel.rs"]
mod tests;
