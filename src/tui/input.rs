//! 键盘映射：crossterm 按键 -> 工作台命令

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::kernel::language::next_language;
use crate::kernel::services::adapters::EditInput;
use crate::kernel::theme::next_theme;
use crate::kernel::{Action, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewFile,
    NextTab,
    PreviousTab,
    ToggleExplorer,
    ToggleBottomPanel,
    ToggleRightPanel,
    NextBottomTab,
    CycleTheme,
    CycleLanguage,
    Format,
    RetryBootstrap,
    ClearTerminal,
    Edit(EditInput),
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => Some(Command::Quit),
                'n' => Some(Command::NewFile),
                'b' => Some(Command::ToggleExplorer),
                'j' => Some(Command::ToggleBottomPanel),
                'k' => Some(Command::ToggleRightPanel),
                't' => Some(Command::CycleTheme),
                'l' => Some(Command::CycleLanguage),
                'r' => Some(Command::RetryBootstrap),
                'u' => Some(Command::ClearTerminal),
                _ => None,
            },
            _ => None,
        };
    }

    if alt {
        return match key.code {
            KeyCode::Right => Some(Command::NextTab),
            KeyCode::Left => Some(Command::PreviousTab),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(Command::Format),
            _ => None,
        };
    }

    let edit = match key.code {
        KeyCode::F(6) => return Some(Command::NextBottomTab),
        KeyCode::Char(ch) => EditInput::Char(ch),
        KeyCode::Enter => EditInput::Newline,
        KeyCode::Tab => EditInput::Tab,
        KeyCode::Backspace => EditInput::Backspace,
        KeyCode::Delete => EditInput::Delete,
        KeyCode::Left => EditInput::Left,
        KeyCode::Right => EditInput::Right,
        KeyCode::Up => EditInput::Up,
        KeyCode::Down => EditInput::Down,
        KeyCode::Home => EditInput::Home,
        KeyCode::End => EditInput::End,
        KeyCode::PageUp => EditInput::PageUp,
        KeyCode::PageDown => EditInput::PageDown,
        _ => return None,
    };
    Some(Command::Edit(edit))
}

/// Kernel action for a workbench command. `Quit` and buffer edits are handled by the caller.
pub fn action_for(command: Command, state: &AppState) -> Option<Action> {
    let action = match command {
        Command::Quit | Command::Edit(_) => return None,
        Command::NewFile => Action::NewFile,
        Command::NextTab => Action::SelectRelative { delta: 1 },
        Command::PreviousTab => Action::SelectRelative { delta: -1 },
        Command::ToggleExplorer => Action::ToggleExplorer,
        Command::ToggleBottomPanel => Action::ToggleBottomPanel,
        Command::ToggleRightPanel => Action::ToggleRightPanel,
        Command::NextBottomTab => Action::SetBottomTab {
            tab: state.layout.bottom_panel_tab.next(),
        },
        Command::CycleTheme => Action::SetTheme {
            theme: next_theme(&state.theme).to_string(),
        },
        Command::CycleLanguage => {
            let active = state.files.active();
            Action::ChangeLanguage {
                id: active.id.clone(),
                language: next_language(&active.language).to_string(),
            }
        }
        Command::Format => Action::Format,
        Command::RetryBootstrap => Action::RetryBootstrap,
        Command::ClearTerminal => Action::ClearTerminal,
    };
    Some(action)
}

/// Pasted text as a sequence of buffer edits. `\r\n` and lone `\r` become one newline.
pub fn paste_inputs(text: &str) -> Vec<EditInput> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .chars()
        .map(|ch| match ch {
            '\n' => EditInput::Newline,
            '\t' => EditInput::Tab,
            other => EditInput::Char(other),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/tui/input.rs"]
mod tests;
