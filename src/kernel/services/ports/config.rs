use serde::{Deserialize, Serialize};

/// Compiler options handed to the engine's TypeScript/JavaScript language service at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub jsx: String,
    pub strict: bool,
    pub allow_js: bool,
    pub allow_non_ts_extensions: bool,
    pub es_module_interop: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            target: "ES2020".to_string(),
            module: "ESNext".to_string(),
            module_resolution: "node".to_string(),
            jsx: "react-jsx".to_string(),
            strict: true,
            allow_js: true,
            allow_non_ts_extensions: true,
            es_module_interop: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    pub compiler: CompilerOptions,
    pub tab_size: u8,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            compiler: CompilerOptions::default(),
            tab_size: 2,
        }
    }
}
