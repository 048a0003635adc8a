use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::language::{language_for_file_name, DEFAULT_LANGUAGE};

const DEFAULT_APP_TSX: &str = r#"import { useState } from "react";

export default function App() {
  const [count, setCount] = useState(0);

  return (
    <main className="app">
      <h1>Workbench</h1>
      <button onClick={() => setCount((c) => c + 1)}>
        Clicked {count} times
      </button>
    </main>
  );
}
"#;

const DEFAULT_STYLES_CSS: &str = r#".app {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  font-family: system-ui, sans-serif;
}

button {
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFile {
    pub id: String,
    pub label: String,
    pub language: CompactString,
    pub content: String,
}

impl OpenFile {
    pub fn new(id: impl Into<String>, language: &str, content: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            language: CompactString::from(language),
            content: content.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }
}

/// Result of asking the file set to activate an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Switched { from: String },
    AlreadyActive,
    Unknown,
}

/// Ordered set of open files plus the active id.
///
/// Never empty, and `active_id` always names an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFiles {
    files: Vec<OpenFile>,
    active_id: String,
}

impl Default for OpenFiles {
    fn default() -> Self {
        Self {
            files: vec![
                OpenFile::new("app.tsx", "typescript", DEFAULT_APP_TSX),
                OpenFile::new("styles.css", "css", DEFAULT_STYLES_CSS),
            ],
            active_id: "app.tsx".to_string(),
        }
    }
}

impl OpenFiles {
    /// Builds a file set from untrusted parts (e.g. rehydrated state).
    ///
    /// Duplicate ids keep their first occurrence. Returns `None` when no file survives.
    /// The second value is `true` when `active_id` had to be healed to the first file.
    pub fn from_parts(files: Vec<OpenFile>, active_id: &str) -> Option<(Self, bool)> {
        let mut unique: Vec<OpenFile> = Vec::with_capacity(files.len());
        for file in files {
            if unique.iter().any(|f| f.id == file.id) {
                tracing::debug!(id = %file.id, "dropping duplicate file id");
                continue;
            }
            unique.push(file);
        }

        let first = unique.first()?.id.clone();
        let healed = !unique.iter().any(|f| f.id == active_id);
        let active_id = if healed {
            first
        } else {
            active_id.to_string()
        };
        Some((
            Self {
                files: unique,
                active_id,
            },
            healed,
        ))
    }

    pub fn files(&self) -> &[OpenFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active(&self) -> &OpenFile {
        // `active_id` is kept valid by every mutation; the first file is the fallback.
        self.get(&self.active_id).unwrap_or(&self.files[0])
    }

    pub fn active_index(&self) -> usize {
        self.index_of(&self.active_id).unwrap_or(0)
    }

    pub fn get(&self, id: &str) -> Option<&OpenFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.id.as_str())
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    pub fn select(&mut self, id: &str) -> Selection {
        if self.active_id == id {
            return Selection::AlreadyActive;
        }
        if !self.contains(id) {
            return Selection::Unknown;
        }
        let from = std::mem::replace(&mut self.active_id, id.to_string());
        Selection::Switched { from }
    }

    /// Id of the file `delta` tabs away from the active one, wrapping at both ends.
    pub fn relative_id(&self, delta: isize) -> &str {
        let len = self.files.len() as isize;
        let idx = (self.active_index() as isize + delta).rem_euclid(len);
        &self.files[idx as usize].id
    }

    /// Appends an empty `untitled-{n}.ts` file and makes it active.
    pub fn create(&mut self) -> String {
        let mut n = self.files.len() + 1;
        let mut id = untitled_id(n);
        while self.contains(&id) {
            n += 1;
            id = untitled_id(n);
        }

        let language = language_for_file_name(&id).unwrap_or(DEFAULT_LANGUAGE);
        self.files.push(OpenFile::new(id.clone(), language, String::new()));
        self.active_id = id.clone();
        id
    }

    /// Replaces the content of `id`, only when it is the active file.
    pub fn update_content(&mut self, id: &str, content: String) -> bool {
        if id != self.active_id {
            return false;
        }
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let file = &mut self.files[idx];
        if file.content == content {
            return false;
        }
        file.content = content;
        true
    }

    pub fn change_language(&mut self, id: &str, language: &str) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let file = &mut self.files[idx];
        if file.language == language {
            return false;
        }
        file.language = CompactString::from(language);
        true
    }
}

fn untitled_id(n: usize) -> String {
    format!("untitled-{}.ts", n)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
