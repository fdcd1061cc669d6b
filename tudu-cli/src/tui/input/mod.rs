//! Input handling - main input dispatcher
//!
//! All input handlers are synchronous. View-only transitions (cursor
//! moves, entering the form) mutate the app directly; anything that
//! touches the board comes back as an `Option<Command>` for the run loop
//! to apply before the next frame.
//!
//! - `resolver`: Key-to-action resolution through the keybind map

pub mod resolver;

use crossterm::event::{KeyCode, KeyEvent};
use tudu_config::{Action, BindingContext};

use super::app::App;
use super::state::{Command, InputMode};
use super::widgets::{handle_text_input, TextInputResult, VirtualList};

/// Handle keyboard input, returning a command for the run loop to apply
pub fn handle_input_sync(app: &mut App, key: KeyEvent) -> Option<Command> {
    match app.input_mode {
        InputMode::Insert => handle_insert_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}

/// Normal mode: resolve the key through the list-context bindings
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Command> {
    if let Some(pattern_str) = resolver::key_event_to_pattern_string(key) {
        if let Some(action) = app.keybinds.resolve(&pattern_str, BindingContext::List) {
            return execute_list_action(app, action);
        }
    }

    // Fallback for keys not in keybinds
    if key.code == KeyCode::Esc {
        app.should_quit = true;
    }
    None
}

/// Execute a resolved list action
fn execute_list_action(app: &mut App, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }

        Action::MoveDown => {
            app.move_down();
            None
        }

        Action::MoveUp => {
            app.move_up();
            None
        }

        Action::GotoTop => {
            app.goto_top();
            None
        }

        Action::GotoBottom => {
            app.goto_bottom();
            None
        }

        Action::AddTodo => {
            app.start_add();
            None
        }

        Action::EditTodo => app.selected().map(|item| Command::BeginEdit {
            todo_id: item.id,
        }),

        Action::DeleteTodo => app.selected().map(|item| Command::Delete {
            todo_id: item.id,
        }),
    }
}

/// Insert mode: the form owns the key
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Command> {
    match handle_text_input(&key, &mut app.text_input) {
        TextInputResult::Cancel => {
            app.cancel_input();
            None
        }
        TextInputResult::Submit => {
            // The validation gate: a blank title never submits
            if app.text_input.is_blank() {
                return None;
            }
            Some(Command::Submit {
                title: app.text_input.trimmed().to_string(),
            })
        }
        TextInputResult::Handled | TextInputResult::Unhandled => None,
    }
}
