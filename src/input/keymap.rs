use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic actions a key press resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Toggle,
    Complete,
    Up,
    Down,
    PageUp,
    PageDown,
    ToggleLineNumbers,
    ToggleCalendar,
    Quit,
    Confirm,
    Cancel,
}

/// A key binding: the key shown in the help bar and what it does
struct Binding {
    key: &'static str,
    help: &'static str,
}

const VIEWING_HELP: &[Binding] = &[
    Binding { key: "a", help: "add task" },
    Binding { key: "d", help: "delete task" },
    Binding { key: "↑/↓", help: "nav" },
    Binding { key: "pgup/pgdn", help: "scroll" },
    Binding { key: "s", help: "start/pause/resume" },
    Binding { key: "c", help: "complete task" },
    Binding { key: "n", help: "toggle line #s" },
    Binding { key: "j", help: "toggle calendar (G/J)" },
    Binding { key: "q", help: "quit" },
];

const ADDING_HELP: &[Binding] = &[
    Binding { key: "enter", help: "confirm (stay)" },
    Binding { key: "esc", help: "cancel/back" },
    Binding { key: "ctrl+c", help: "quit" },
];

pub const HELP_SEPARATOR: &str = " │ ";

/// Resolve a key press to an action for the given mode.
///
/// Returns `None` for keys without a binding; in Adding mode those are
/// handed to the text field.
pub fn resolve(mode: UiMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        UiMode::Viewing => match key.code {
            KeyCode::Char('a') => Some(Action::Add),
            KeyCode::Char('d') => Some(Action::Delete),
            KeyCode::Char('s') => Some(Action::Toggle),
            KeyCode::Char('c') => Some(Action::Complete),
            KeyCode::Char('n') => Some(Action::ToggleLineNumbers),
            KeyCode::Char('j') => Some(Action::ToggleCalendar),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            _ => None,
        },
        UiMode::Adding => match key.code {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// Help bar text for a mode
pub fn help_text(mode: UiMode) -> String {
    let bindings = match mode {
        UiMode::Viewing => VIEWING_HELP,
        UiMode::Adding => ADDING_HELP,
    };
    bindings
        .iter()
        .map(|b| format!("{} {}", b.key, b.help))
        .collect::<Vec<_>>()
        .join(HELP_SEPARATOR)
}
