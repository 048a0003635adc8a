use crate::kernel::services::ports::{BoxFuture, ThemeError, ThemeResult, ThemeSource};
use crate::kernel::theme::ThemeDefinition;

const GITHUB_DARK: &str = include_str!("../../../../assets/themes/github-dark.json");
const GITHUB_LIGHT: &str = include_str!("../../../../assets/themes/github-light.json");
const DRACULA: &str = include_str!("../../../../assets/themes/dracula.json");
const MONOKAI: &str = include_str!("../../../../assets/themes/monokai.json");

/// Theme definitions compiled into the binary, parsed the first time they are asked for.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledThemes;

impl BundledThemes {
    fn source(id: &str) -> Option<&'static str> {
        match id {
            "github-dark" => Some(GITHUB_DARK),
            "github-light" => Some(GITHUB_LIGHT),
            "dracula" => Some(DRACULA),
            "monokai" => Some(MONOKAI),
            _ => None,
        }
    }
}

impl ThemeSource for BundledThemes {
    fn load(&self, id: &str) -> BoxFuture<'_, ThemeResult<ThemeDefinition>> {
        let id = id.to_string();
        Box::pin(async move {
            let raw = Self::source(&id).ok_or_else(|| ThemeError::NotFound(id.clone()))?;
            serde_json::from_str(raw).map_err(|error| ThemeError::Parse { id, error })
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/themes.rs"]
mod tests;
