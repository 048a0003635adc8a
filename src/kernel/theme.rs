//! Editor color theme catalog and definitions.

use std::collections::BTreeMap;

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "github-dark";

/// Themes the workbench knows how to load. Anything else resolves to [`DEFAULT_THEME`].
pub const THEME_IDS: [&str; 4] = ["github-dark", "github-light", "dracula", "monokai"];

pub fn resolve_theme_id(id: &str) -> Option<&'static str> {
    THEME_IDS.iter().copied().find(|known| *known == id)
}

pub fn theme_label(id: &str) -> &str {
    match id {
        "github-dark" => "GitHub Dark",
        "github-light" => "GitHub Light",
        "dracula" => "Dracula",
        "monokai" => "Monokai",
        other => other,
    }
}

pub fn next_theme(id: &str) -> &'static str {
    match THEME_IDS.iter().position(|known| *known == id) {
        Some(i) => THEME_IDS[(i + 1) % THEME_IDS.len()],
        None => DEFAULT_THEME,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeBase {
    #[serde(rename = "vs")]
    Light,
    #[serde(rename = "vs-dark")]
    Dark,
    #[serde(rename = "hc-black")]
    HighContrastDark,
    #[serde(rename = "hc-light")]
    HighContrastLight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRule {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// Theme data in the shape the engine registers (base theme, token rules, UI colors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub base: ThemeBase,
    #[serde(default = "default_inherit")]
    pub inherit: bool,
    #[serde(default)]
    pub rules: Vec<TokenRule>,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

fn default_inherit() -> bool {
    true
}

impl ThemeDefinition {
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Foreground for a token scope, matching the most specific rule prefix.
    pub fn token_foreground(&self, token: &str) -> Option<&str> {
        self.rules
            .iter()
            .filter(|rule| {
                !rule.token.is_empty()
                    && (token == rule.token || token.starts_with(&format!("{}.", rule.token)))
            })
            .max_by_key(|rule| rule.token.len())
            .and_then(|rule| rule.foreground.as_deref())
    }
}

/// Ids already registered with the engine. Grows monotonically.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    registered: FxHashSet<CompactString>,
}

impl ThemeRegistry {
    pub fn contains(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    pub fn insert(&mut self, id: &str) -> bool {
        self.registered.insert(CompactString::from(id))
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/theme.rs"]
mod tests;
