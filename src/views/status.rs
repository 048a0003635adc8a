//! 状态栏视图模型

use crate::kernel::language::language_label;
use crate::kernel::problems::ProblemSeverity;
use crate::kernel::theme::theme_label;
use crate::kernel::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarModel {
    pub phase: &'static str,
    pub file: String,
    pub cursor: Option<(u32, u32)>,
    pub line_count: usize,
    pub language: String,
    pub theme: String,
    pub errors: usize,
    pub warnings: usize,
}

impl StatusBarModel {
    pub fn left_text(&self) -> String {
        format!(
            " {}  {}  ✕ {} ⚠ {}",
            self.phase, self.file, self.errors, self.warnings
        )
    }

    pub fn right_text(&self) -> String {
        let position = match self.cursor {
            Some((line, column)) => format!("Ln {}, Col {}", line, column),
            None => format!("{} lines", self.line_count),
        };
        format!("{}  {}  {} ", position, self.language, self.theme)
    }
}

pub fn status_bar(state: &AppState) -> StatusBarModel {
    let active = state.files.active();
    StatusBarModel {
        phase: state.phase.label(),
        file: active.label.clone(),
        cursor: state.cursor.map(|c| (c.line, c.column)),
        line_count: active.line_count(),
        language: language_label(&active.language).to_string(),
        theme: theme_label(&state.theme).to_string(),
        errors: state.problems.count(ProblemSeverity::Error),
        warnings: state.problems.count(ProblemSeverity::Warning),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/status.rs"]
mod tests;
