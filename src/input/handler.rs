use crate::app::AppState;
use crate::domain::UiMode;
use crate::input::keymap::{resolve, Action};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the session should end.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    let action = resolve(app.ui_mode, key);

    if action != Some(Action::Quit) {
        app.clear_error();
    }

    match app.ui_mode {
        UiMode::Viewing => handle_viewing_mode(app, action),
        UiMode::Adding => handle_adding_mode(app, action, key),
    }

    !app.is_running()
}

fn handle_viewing_mode(app: &mut AppState, action: Option<Action>) {
    let Some(action) = action else {
        return;
    };

    match action {
        Action::Add => app.start_adding(),
        Action::Delete => app.delete(),
        Action::Toggle => {
            app.toggle();
        }
        Action::Complete => {
            app.complete();
        }
        Action::Up => app.navigate(-1),
        Action::Down => app.navigate(1),
        Action::PageUp => app.page_up(),
        Action::PageDown => app.page_down(),
        Action::ToggleLineNumbers => app.toggle_line_numbers(),
        Action::ToggleCalendar => app.toggle_calendar(),
        Action::Quit => {
            app.quit();
        }
        Action::Confirm | Action::Cancel => {}
    }
}

fn handle_adding_mode(app: &mut AppState, action: Option<Action>, key: KeyEvent) {
    match action {
        Some(Action::Confirm) => {
            app.submit_input();
        }
        Some(Action::Cancel) => app.cancel_adding(),
        Some(Action::Quit) => {
            app.quit();
        }
        Some(_) => {}
        None => edit_input(app, key),
    }
}

/// Pass an unbound key to the text field
fn edit_input(app: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = &mut app.input;

    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::{TaskStatus, TaskStore};
    use crate::persistence::Settings;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app(clock: &ManualClock) -> (AppState, TempDir) {
        let dir = tempdir().unwrap();
        let app = AppState::new(
            TaskStore::default(),
            None,
            dir.path().join("tasks.json"),
            &Settings::default(),
            Box::new(clock.clone()),
        );
        (app, dir)
    }

    #[test]
    fn test_type_and_confirm_stays_in_adding() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        assert_eq!(app.ui_mode, UiMode::Adding);

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Write report");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Adding);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.store.tasks()[0].description, "Write report");
        assert_eq!(app.store.tasks()[1].description, "Buy milk");
    }

    #[test]
    fn test_letters_are_text_while_adding() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "quads");
        assert!(app.is_running());
        assert_eq!(app.input.value(), "quads");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.value(), "quad");
    }

    #[test]
    fn test_escape_returns_to_viewing() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Viewing);
    }

    #[test]
    fn test_viewing_keys_drive_lifecycle() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "One");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('s'));
        clock.advance(Duration::seconds(7));
        press(&mut app, KeyCode::Char('c'));

        let task = &app.store.tasks()[0];
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.time_spent, Duration::seconds(7));
    }

    #[test]
    fn test_error_cleared_by_keystroke_but_not_by_quit() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "One");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        app.error = Some("boom".to_string());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.error, None);

        app.error = Some("boom".to_string());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.error, Some("boom".to_string()));
    }

    #[test]
    fn test_ctrl_c_quits_while_adding() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        let quit = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(quit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "Buy oat milk");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.input.value(), "Buy oat ");
    }

    #[test]
    fn test_delete_last_task_switches_to_adding() {
        let clock = ManualClock::fixed();
        let (mut app, _dir) = new_app(&clock);
        type_text(&mut app, "Only");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
        assert_eq!(app.ui_mode, UiMode::Adding);
    }
}
