//! Language tags offered by the language selector.

pub const DEFAULT_LANGUAGE: &str = "typescript";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub extensions: &'static [&'static str],
}

pub const LANGUAGES: [LanguageInfo; 8] = [
    LanguageInfo {
        id: "typescript",
        label: "TypeScript",
        extensions: &["ts", "tsx", "mts", "cts"],
    },
    LanguageInfo {
        id: "javascript",
        label: "JavaScript",
        extensions: &["js", "jsx", "mjs", "cjs"],
    },
    LanguageInfo {
        id: "json",
        label: "JSON",
        extensions: &["json"],
    },
    LanguageInfo {
        id: "css",
        label: "CSS",
        extensions: &["css"],
    },
    LanguageInfo {
        id: "html",
        label: "HTML",
        extensions: &["html", "htm"],
    },
    LanguageInfo {
        id: "markdown",
        label: "Markdown",
        extensions: &["md", "markdown"],
    },
    LanguageInfo {
        id: "python",
        label: "Python",
        extensions: &["py"],
    },
    LanguageInfo {
        id: "rust",
        label: "Rust",
        extensions: &["rs"],
    },
];

pub fn language_info(id: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|lang| lang.id == id)
}

/// Display label for a tag; unknown tags are shown as-is.
pub fn language_label(id: &str) -> &str {
    language_info(id).map(|lang| lang.label).unwrap_or(id)
}

pub fn language_for_file_name(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.extensions.contains(&ext.as_str()))
        .map(|lang| lang.id)
}

/// Next language in selector order, wrapping around. Unknown tags restart at the first entry.
pub fn next_language(id: &str) -> &'static str {
    match LANGUAGES.iter().position(|lang| lang.id == id) {
        Some(i) => LANGUAGES[(i + 1) % LANGUAGES.len()].id,
        None => LANGUAGES[0].id,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
