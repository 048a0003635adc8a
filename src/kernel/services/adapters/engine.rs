//! Rope-backed editing surface implementing [`EditorEngine`] for the terminal front-end.
//!
//! Plain text only: no highlighting, completion or diffing.

use std::sync::mpsc::Sender;
use std::sync::{Mutex, MutexGuard, PoisonError};

use ropey::Rope;
use rustc_hash::FxHashMap;
use serde_json::json;

use crate::kernel::services::ports::{
    BoxFuture, EditorEngine, EngineError, EngineEvent, EngineModel, EngineOptions, EngineResult,
    FORMAT_DOCUMENT_ACTION,
};
use crate::kernel::theme::ThemeDefinition;
use crate::kernel::view_state::ViewState;

const FORMATTABLE_LANGUAGES: [&str; 5] = ["typescript", "javascript", "json", "css", "html"];
const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInput {
    Char(char),
    Newline,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// What a renderer needs to draw the editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub model_id: String,
    pub language: String,
    pub first_line: usize,
    pub lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_col: usize,
    pub total_lines: usize,
}

#[derive(Debug)]
struct Model {
    id: String,
    language: String,
    rope: Rope,
    line: usize,
    col: usize,
    scroll_top: usize,
}

impl Model {
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        while len > 0 && matches!(slice.char(len - 1), '\n' | '\r') {
            len -= 1;
        }
        len
    }

    fn last_line(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    fn char_idx(&self) -> usize {
        self.rope.line_to_char(self.line) + self.col
    }

    fn clamp_cursor(&mut self) {
        self.line = self.line.min(self.last_line());
        self.col = self.col.min(self.line_len(self.line));
    }

    fn scroll_into_view(&mut self, height: usize) {
        let height = height.max(1);
        if self.line < self.scroll_top {
            self.scroll_top = self.line;
        } else if self.line >= self.scroll_top + height {
            self.scroll_top = self.line + 1 - height;
        }
    }
}

#[derive(Debug)]
struct Inner {
    mounted: bool,
    options: EngineOptions,
    model: Option<Model>,
    themes: FxHashMap<String, ThemeDefinition>,
    theme: Option<String>,
    viewport_height: usize,
    focused: bool,
    events: Sender<EngineEvent>,
}

impl Inner {
    fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(event);
    }

    fn emit_cursor(&self) {
        if let Some(model) = &self.model {
            self.emit(EngineEvent::CursorMoved {
                line: model.line as u32 + 1,
                column: model.col as u32 + 1,
            });
        }
    }

    fn emit_content(&self) {
        if let Some(model) = &self.model {
            self.emit(EngineEvent::ContentChanged {
                model_id: model.id.clone(),
                text: model.rope.to_string(),
            });
        }
    }
}

pub struct BufferEngine {
    inner: Mutex<Inner>,
}

impl BufferEngine {
    pub fn new(events: Sender<EngineEvent>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                mounted: false,
                options: EngineOptions::default(),
                model: None,
                themes: FxHashMap::default(),
                theme: None,
                viewport_height: DEFAULT_VIEWPORT_HEIGHT,
                focused: false,
                events,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_viewport_height(&self, height: usize) {
        let mut inner = self.lock();
        inner.viewport_height = height.max(1);
        if let Some(model) = inner.model.as_mut() {
            model.scroll_into_view(height);
        }
    }

    pub fn is_focused(&self) -> bool {
        self.lock().focused
    }

    pub fn current_theme(&self) -> Option<(String, ThemeDefinition)> {
        let inner = self.lock();
        let id = inner.theme.clone()?;
        let definition = inner.themes.get(&id)?.clone();
        Some((id, definition))
    }

    pub fn snapshot(&self) -> Option<BufferSnapshot> {
        let inner = self.lock();
        let model = inner.model.as_ref()?;
        let total_lines = model.rope.len_lines();
        let first_line = model.scroll_top.min(total_lines.saturating_sub(1));
        let end = (first_line + inner.viewport_height).min(total_lines);
        let lines = (first_line..end)
            .map(|i| {
                let line = model.rope.line(i).to_string();
                line.trim_end_matches(['\n', '\r']).to_string()
            })
            .collect();
        Some(BufferSnapshot {
            model_id: model.id.clone(),
            language: model.language.clone(),
            first_line,
            lines,
            cursor_line: model.line,
            cursor_col: model.col,
            total_lines,
        })
    }

    /// Applies one editing or navigation input to the current model.
    pub fn apply_input(&self, input: EditInput) {
        let mut inner = self.lock();
        if !inner.mounted {
            return;
        }
        let height = inner.viewport_height;
        let tab_size = inner.options.tab_size.max(1) as usize;
        let Some(model) = inner.model.as_mut() else {
            return;
        };

        let edited = match input {
            EditInput::Char(ch) => {
                let idx = model.char_idx();
                model.rope.insert_char(idx, ch);
                model.col += 1;
                true
            }
            EditInput::Newline => {
                let idx = model.char_idx();
                model.rope.insert_char(idx, '\n');
                model.line += 1;
                model.col = 0;
                true
            }
            EditInput::Tab => {
                let idx = model.char_idx();
                model.rope.insert(idx, &" ".repeat(tab_size));
                model.col += tab_size;
                true
            }
            EditInput::Backspace => {
                let idx = model.char_idx();
                if model.col > 0 {
                    model.rope.remove(idx - 1..idx);
                    model.col -= 1;
                    true
                } else if model.line > 0 {
                    let prev_len = model.line_len(model.line - 1);
                    let start = model.rope.line_to_char(model.line - 1) + prev_len;
                    model.rope.remove(start..idx);
                    model.line -= 1;
                    model.col = prev_len;
                    true
                } else {
                    false
                }
            }
            EditInput::Delete => {
                let idx = model.char_idx();
                let line_end = model.rope.line_to_char(model.line) + model.line_len(model.line);
                if idx < line_end {
                    model.rope.remove(idx..idx + 1);
                    true
                } else if model.line < model.last_line() {
                    let next_start = model.rope.line_to_char(model.line + 1);
                    model.rope.remove(idx..next_start);
                    true
                } else {
                    false
                }
            }
            EditInput::Left => {
                if model.col > 0 {
                    model.col -= 1;
                } else if model.line > 0 {
                    model.line -= 1;
                    model.col = model.line_len(model.line);
                }
                false
            }
            EditInput::Right => {
                if model.col < model.line_len(model.line) {
                    model.col += 1;
                } else if model.line < model.last_line() {
                    model.line += 1;
                    model.col = 0;
                }
                false
            }
            EditInput::Up => {
                model.line = model.line.saturating_sub(1);
                false
            }
            EditInput::Down => {
                model.line = (model.line + 1).min(model.last_line());
                false
            }
            EditInput::Home => {
                model.col = 0;
                false
            }
            EditInput::End => {
                model.col = model.line_len(model.line);
                false
            }
            EditInput::PageUp => {
                model.line = model.line.saturating_sub(height);
                false
            }
            EditInput::PageDown => {
                model.line = (model.line + height).min(model.last_line());
                false
            }
        };

        model.clamp_cursor();
        model.scroll_into_view(height);

        if edited {
            inner.emit_content();
        }
        inner.emit_cursor();
    }

    fn format_current(inner: &mut Inner) -> bool {
        let tab_size = inner.options.tab_size.max(1) as usize;
        let height = inner.viewport_height;
        let Some(model) = inner.model.as_mut() else {
            return false;
        };
        if !FORMATTABLE_LANGUAGES.contains(&model.language.as_str()) {
            return false;
        }

        let original = model.rope.to_string();
        let formatted = format_whitespace(&original, tab_size);
        if formatted != original {
            model.rope = Rope::from_str(&formatted);
            model.clamp_cursor();
            model.scroll_into_view(height);
            inner.emit_content();
            inner.emit_cursor();
        }
        true
    }
}

/// Trims trailing whitespace, expands leading tabs and leaves exactly one final newline.
pub fn format_whitespace(text: &str, tab_size: usize) -> String {
    let indent = " ".repeat(tab_size);
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim_end();
        let body = trimmed.trim_start_matches('\t');
        let tabs = trimmed.len() - body.len();
        for _ in 0..tabs {
            out.push_str(&indent);
        }
        out.push_str(body);
        out.push('\n');
    }
    let content_len = out.trim_end_matches('\n').len();
    out.truncate(content_len);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

impl EditorEngine for BufferEngine {
    fn bootstrap(&self, options: EngineOptions) -> BoxFuture<'_, EngineResult<()>> {
        Box::pin(async move {
            if options.tab_size == 0 {
                return Err(EngineError::BootstrapFailed(
                    "tabSize must be at least 1".to_string(),
                ));
            }
            tracing::debug!(
                target_version = %options.compiler.target,
                jsx = %options.compiler.jsx,
                "configuring language service"
            );
            let mut inner = self.lock();
            inner.options = options;
            inner.mounted = true;
            Ok(())
        })
    }

    fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    fn show_model(&self, model: EngineModel) {
        let mut inner = self.lock();
        inner.model = Some(Model {
            id: model.id,
            language: model.language,
            rope: Rope::from_str(&model.content),
            line: 0,
            col: 0,
            scroll_top: 0,
        });
        inner.emit_cursor();
    }

    fn set_language(&self, language: &str) {
        if let Some(model) = self.lock().model.as_mut() {
            model.language = language.to_string();
        }
    }

    fn save_view_state(&self) -> Option<ViewState> {
        let inner = self.lock();
        let model = inner.model.as_ref()?;
        Some(ViewState::new(json!({
            "cursor": { "line": model.line, "column": model.col },
            "scrollTop": model.scroll_top,
        })))
    }

    fn restore_view_state(&self, state: &ViewState) {
        let raw = state.raw();
        let read = |ptr: &str| raw.pointer(ptr).and_then(|v| v.as_u64()).map(|v| v as usize);
        let mut inner = self.lock();
        let height = inner.viewport_height;
        let Some(model) = inner.model.as_mut() else {
            return;
        };
        model.line = read("/cursor/line").unwrap_or(0);
        model.col = read("/cursor/column").unwrap_or(0);
        model.scroll_top = read("/scrollTop").unwrap_or(0);
        model.clamp_cursor();
        model.scroll_top = model.scroll_top.min(model.last_line());
        model.scroll_into_view(height);
        inner.emit_cursor();
    }

    fn focus(&self) {
        self.lock().focused = true;
    }

    fn define_theme(&self, id: &str, definition: &ThemeDefinition) -> EngineResult<()> {
        if definition.color("editor.background").is_none() {
            return Err(EngineError::InvalidTheme {
                id: id.to_string(),
                reason: "missing editor.background".to_string(),
            });
        }
        self.lock()
            .themes
            .insert(id.to_string(), definition.clone());
        Ok(())
    }

    fn set_theme(&self, id: &str) {
        self.lock().theme = Some(id.to_string());
    }

    fn run_action(&self, action_id: &str) -> bool {
        let mut inner = self.lock();
        match action_id {
            FORMAT_DOCUMENT_ACTION => Self::format_current(&mut inner),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/engine.rs"]
mod tests;
