//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `views` so the workbench core builds without terminal crates.

pub mod input;
pub mod palette;
pub mod render;
pub mod terminal_guard;

pub use input::{action_for, command_for_key, paste_inputs, Command};
pub use palette::UiPalette;
pub use render::{compute_layout, draw, FrameLayout};
pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
