//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod engine;
pub mod paths;
pub mod settings;
pub mod storage;
pub mod themes;

pub use engine::{BufferEngine, BufferSnapshot, EditInput};
pub use paths::{ensure_log_dir, ensure_state_dir, get_log_dir, get_settings_path, get_state_dir};
pub use settings::{ensure_settings_file, load_settings, load_settings_from};
pub use storage::{DisabledStorage, FileStorage, MemoryStorage};
pub use themes::BundledThemes;
