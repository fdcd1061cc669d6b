//! Todo command execution

use tracing::{debug, warn};
use tudu_core::TodoId;

use super::App;
use crate::tui::state::{Command, InputMode};
use crate::tui::widgets::VirtualList;

impl App {
    /// Apply one state-mutating command, then let the caller re-render
    pub fn execute_command(&mut self, command: Command) {
        match command {
            Command::Submit { title } => self.submit(&title),
            Command::BeginEdit { todo_id } => self.begin_edit(todo_id),
            Command::Delete { todo_id } => self.delete_todo(todo_id),
        }
    }

    /// Commit the form: create or update depending on the edit session
    fn submit(&mut self, title: &str) {
        match self.board.submit(title) {
            Ok(item) => {
                debug!(id = %item.id, title = %item.title, "submitted todo");
                self.text_input.clear();
                self.input_mode = InputMode::Normal;
                self.error_message = None;
                self.clamp_cursor();
            }
            // Unreachable through the UI, which refuses blank submits
            Err(e) => {
                warn!("submit rejected: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Start editing an item; the form is prefilled with its title
    fn begin_edit(&mut self, todo_id: TodoId) {
        match self.board.begin_edit(todo_id) {
            Some(session) => {
                let draft_title = session.draft.title.clone();
                debug!(id = %todo_id, "editing todo");
                self.text_input.set_content(draft_title);
                self.input_mode = InputMode::Insert;
            }
            None => {
                // Ids only come from the current list, so this is defensive
                warn!(id = %todo_id, "begin_edit on unknown id ignored");
            }
        }
    }

    /// Delete an item; an edit session pointing at it is cancelled
    fn delete_todo(&mut self, todo_id: TodoId) {
        let was_editing = self.board.session().is_some_and(|s| s.id() == todo_id);

        if self.board.delete(todo_id) {
            debug!(id = %todo_id, "deleted todo");
            if was_editing {
                // The board already dropped the session; reset the draft too
                self.text_input.clear();
                self.input_mode = InputMode::Normal;
            }
            self.clamp_cursor();
        } else {
            warn!(id = %todo_id, "delete on unknown id ignored");
        }
    }

    /// Open the form in create mode (view transition, not a command)
    pub fn start_add(&mut self) {
        self.board.cancel_edit();
        self.text_input.clear();
        self.input_mode = InputMode::Insert;
    }

    /// Leave the form, abandoning any edit session and the draft
    pub fn cancel_input(&mut self) {
        self.board.cancel_edit();
        self.text_input.clear();
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tudu_config::Config;
    use tudu_core::FormMode;
    use uuid::Uuid;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn submit(app: &mut App, title: &str) {
        app.execute_command(Command::Submit {
            title: title.to_string(),
        });
    }

    #[test]
    fn test_submit_creates_and_resets_form() {
        let mut app = app();
        app.start_add();
        app.text_input.set_content("Buy milk");

        submit(&mut app, "Buy milk");

        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board.items()[0].title, "Buy milk");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.text_input.is_blank());
    }

    #[test]
    fn test_edit_command_prefills_draft() {
        let mut app = app();
        submit(&mut app, "Buy milk");
        let id = app.board.items()[0].id;

        app.execute_command(Command::BeginEdit { todo_id: id });

        assert_eq!(app.input_mode, InputMode::Insert);
        assert_eq!(app.text_input.content(), "Buy milk");
        assert_eq!(app.board.mode(), FormMode::Edit);

        submit(&mut app, "Buy milk and eggs");
        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board.items()[0].id, id);
        assert_eq!(app.board.items()[0].title, "Buy milk and eggs");
        assert_eq!(app.board.mode(), FormMode::Create);
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut app = app();
        submit(&mut app, "only");

        app.execute_command(Command::BeginEdit {
            todo_id: Uuid::new_v4(),
        });

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.board.mode(), FormMode::Create);
    }

    #[test]
    fn test_delete_active_edit_resets_draft() {
        let mut app = app();
        submit(&mut app, "doomed");
        let id = app.board.items()[0].id;

        app.execute_command(Command::BeginEdit { todo_id: id });
        app.execute_command(Command::Delete { todo_id: id });

        assert!(app.board.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.text_input.is_blank());

        // Subsequent submit creates, not updates
        submit(&mut app, "fresh");
        assert_eq!(app.board.len(), 1);
        assert_ne!(app.board.items()[0].id, id);
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let mut app = app();
        submit(&mut app, "one");
        submit(&mut app, "two");
        app.set_cursor(1);

        let id = app.board.items()[1].id;
        app.execute_command(Command::Delete { todo_id: id });

        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected().unwrap().title, "one");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut app = app();
        submit(&mut app, "stays");

        app.execute_command(Command::Delete {
            todo_id: Uuid::new_v4(),
        });

        assert_eq!(app.board.len(), 1);
    }

    #[test]
    fn test_start_add_abandons_edit_session() {
        let mut app = app();
        submit(&mut app, "existing");
        let id = app.board.items()[0].id;

        app.execute_command(Command::BeginEdit { todo_id: id });
        app.start_add();

        assert_eq!(app.board.mode(), FormMode::Create);
        assert!(app.text_input.is_blank());
        assert_eq!(app.input_mode, InputMode::Insert);
    }

    #[test]
    fn test_cancel_input_leaves_list_untouched() {
        let mut app = app();
        submit(&mut app, "keep");
        let id = app.board.items()[0].id;

        app.execute_command(Command::BeginEdit { todo_id: id });
        app.text_input.set_content("half-typed edit");
        app.cancel_input();

        assert_eq!(app.board.items()[0].title, "keep");
        assert_eq!(app.board.mode(), FormMode::Create);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
