//! Headless workbench core (state/action/effect).

pub mod action;
pub mod diagnostic;
pub mod effect;
pub mod files;
pub mod language;
pub mod layout;
pub mod persisted;
pub mod problems;
pub mod services;
pub mod state;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod view_state;

pub use action::Action;
pub use diagnostic::Diagnostic;
pub use effect::Effect;
pub use files::{OpenFile, OpenFiles, Selection};
pub use layout::{BottomPanelTab, PanelLayoutState};
pub use persisted::PersistedState;
pub use problems::{Problem, ProblemSeverity, ProblemsState};
pub use state::{AppState, CursorPosition, WorkbenchPhase};
pub use store::{DispatchResult, Store};
pub use terminal::TerminalLog;
pub use theme::{ThemeDefinition, ThemeRegistry, DEFAULT_THEME, THEME_IDS};
pub use view_state::{ViewState, ViewStateCache};
