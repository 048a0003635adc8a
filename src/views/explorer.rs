//! 文件浏览器视图模型：打开文件的平铺列表

use crate::kernel::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRow {
    pub id: String,
    pub label: String,
    pub language: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerModel {
    pub title: &'static str,
    pub rows: Vec<ExplorerRow>,
}

impl ExplorerModel {
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.active)
    }

    /// Id under `row`, counted from the first entry.
    pub fn hit_test_row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.id.as_str())
    }
}

/// `None` while the sidebar is hidden.
pub fn explorer(state: &AppState) -> Option<ExplorerModel> {
    if !state.layout.explorer_open {
        return None;
    }

    let active_id = state.files.active_id();
    let rows = state
        .files
        .files()
        .iter()
        .map(|file| ExplorerRow {
            id: file.id.clone(),
            label: file.label.clone(),
            language: file.language.to_string(),
            active: file.id == active_id,
        })
        .collect();

    Some(ExplorerModel {
        title: "OPEN FILES",
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/views/explorer.rs"]
mod tests;
