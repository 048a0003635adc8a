//! 应用路径管理
//!
//! 数据目录（状态、日志）：
//! - macOS: ~/Library/Application Support/zbench/{state,logs}
//! - Linux: $XDG_DATA_HOME 或 ~/.local/share/zbench/{state,logs}
//! - Windows: %APPDATA%\zbench\{state,logs}
//!
//! 配置文件放在缓存目录下的 `.zbench/setting.json`：
//! - macOS: ~/Library/Caches
//! - Linux: $XDG_CACHE_HOME 或 ~/.cache
//! - Windows: %LOCALAPPDATA%（回退 %APPDATA%）

use std::path::PathBuf;

const APP_NAME: &str = "zbench";
const STATE_DIR: &str = "state";
const LOG_DIR: &str = "logs";
const SETTINGS_DIR: &str = ".zbench";
const SETTINGS_FILE: &str = "setting.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Data,
    Cache,
}

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home_join(rel: &str) -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| PathBuf::from(home).join(rel))
}

#[cfg_attr(target_os = "macos", allow(dead_code))]
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var(var).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// 平台基础目录，不含应用名
fn platform_root(root: Root) -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        match root {
            Root::Data => home_join("Library/Application Support"),
            Root::Cache => home_join("Library/Caches"),
        }
    }

    #[cfg(target_os = "linux")]
    {
        match root {
            Root::Data => env_dir("XDG_DATA_HOME").or_else(|| home_join(".local/share")),
            Root::Cache => env_dir("XDG_CACHE_HOME").or_else(|| home_join(".cache")),
        }
    }

    #[cfg(target_os = "windows")]
    {
        match root {
            Root::Data => env_dir("APPDATA"),
            Root::Cache => env_dir("LOCALAPPDATA").or_else(|| env_dir("APPDATA")),
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = (root, home_join, env_dir);
        None
    }
}

/// 获取工作区状态目录
pub fn get_state_dir() -> Option<PathBuf> {
    platform_root(Root::Data).map(|p| p.join(APP_NAME).join(STATE_DIR))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    platform_root(Root::Data).map(|p| p.join(APP_NAME).join(LOG_DIR))
}

/// 配置文件路径
pub fn get_settings_path() -> Option<PathBuf> {
    platform_root(Root::Cache).map(|p| p.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub(super) fn ensure_dir(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {} directory", what),
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// 确保状态目录存在
pub fn ensure_state_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_state_dir(), "state")
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
