use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completed
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Clear completed
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.clear_completed();
            Ok(false)
        }

        // Filters
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Pending);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Completed);
            Ok(false)
        }
        KeyCode::Tab => {
            app.cycle_filter();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        KeyCode::Esc => Ok(false),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let store = std::env::temp_dir().join("tick-test-unused.json");
        let mut app = AppState::new(
            Vec::new(),
            crate::domain::IdGenerator::new(),
            store,
            Filter::All,
            true,
        );
        app.add_task("Test task");
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.add_task("Task 2");

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        // Press 'a' to open form
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        // Type text
        handle_key(&mut app, key(KeyCode::Char('N'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('w'))).unwrap();

        // Submit with Enter
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.tasks[0].text, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_handle_blank_submit_adds_nothing() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks.len(), initial_count);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_toggle_with_space() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.tasks[0].completed);

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn test_handle_delete_task() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.tasks.len(), initial_count - 1);
    }

    #[test]
    fn test_handle_delete_with_delete_key() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.tasks.len(), initial_count - 1);
    }

    #[test]
    fn test_handle_clear_completed() {
        let mut app = create_test_app();
        app.add_task("Another");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap(); // complete "Another"

        handle_key(&mut app, key(KeyCode::Char('c'))).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Test task");
    }

    #[test]
    fn test_handle_filter_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.filter, Filter::Pending);

        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.filter, Filter::Completed);

        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.filter, Filter::All);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.filter, Filter::Pending);
    }

    #[test]
    fn test_form_mode_swallows_command_keys() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        // 'q' and 'x' are text while the form is open
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!should_quit);
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.tasks[0].text, "qx");
    }
}
