//! 终端调色板：从编辑器主题定义的颜色表映射到 ratatui 颜色

use ratatui::style::Color;

use crate::kernel::theme::{ThemeBase, ThemeDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPalette {
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub line_number_fg: Color,
    pub current_line_bg: Color,
    pub sidebar_bg: Color,
    pub panel_bg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_bg: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
}

impl Default for UiPalette {
    /// Used until the engine has a theme: plain terminal colors.
    fn default() -> Self {
        Self {
            editor_bg: Color::Reset,
            editor_fg: Color::Reset,
            line_number_fg: Color::DarkGray,
            current_line_bg: Color::Reset,
            sidebar_bg: Color::Reset,
            panel_bg: Color::Reset,
            status_bg: Color::Blue,
            status_fg: Color::White,
            tab_active_bg: Color::DarkGray,
            tab_inactive_bg: Color::Reset,
            accent_fg: Color::Cyan,
            muted_fg: Color::DarkGray,
            error_fg: Color::Red,
            warning_fg: Color::Yellow,
        }
    }
}

impl UiPalette {
    pub fn from_theme(theme: &ThemeDefinition) -> Self {
        let fallback = Self::default();
        let light = matches!(theme.base, ThemeBase::Light | ThemeBase::HighContrastLight);
        let pick = |key: &str, default: Color| {
            theme.color(key).and_then(parse_color).unwrap_or(default)
        };

        let editor_bg = pick("editor.background", fallback.editor_bg);
        let editor_fg = pick(
            "editor.foreground",
            if light { Color::Black } else { Color::White },
        );
        let sidebar_bg = pick("sideBar.background", editor_bg);
        Self {
            editor_bg,
            editor_fg,
            line_number_fg: pick("editorLineNumber.foreground", fallback.line_number_fg),
            current_line_bg: pick("editor.lineHighlightBackground", editor_bg),
            sidebar_bg,
            panel_bg: pick("panel.background", sidebar_bg),
            status_bg: pick("statusBar.background", fallback.status_bg),
            status_fg: pick("statusBar.foreground", editor_fg),
            tab_active_bg: pick("tab.activeBackground", editor_bg),
            tab_inactive_bg: pick("tab.inactiveBackground", sidebar_bg),
            accent_fg: pick("editorCursor.foreground", fallback.accent_fg),
            muted_fg: pick("editorLineNumber.foreground", fallback.muted_fg),
            error_fg: fallback.error_fg,
            warning_fg: fallback.warning_fg,
        }
    }
}

/// `#rrggbb`, `#rrggbbaa` (alpha dropped) or a basic color name.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if (hex.len() == 6 || hex.len() == 8) && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "white" => Color::White,
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/palette.rs"]
mod tests;
