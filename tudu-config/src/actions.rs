//! Bindable actions

/// Everything a key binding can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move the list cursor up
    MoveUp,
    /// Move the list cursor down
    MoveDown,
    /// Jump to the first item
    GotoTop,
    /// Jump to the last item
    GotoBottom,
    /// Open the form to add a new todo
    AddTodo,
    /// Edit the selected todo's title
    EditTodo,
    /// Delete the selected todo
    DeleteTodo,
}

impl Action {
    /// Parse an action from its config name
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(Action::Quit),
            "move-up" | "move_up" => Some(Action::MoveUp),
            "move-down" | "move_down" => Some(Action::MoveDown),
            "goto-top" | "goto_top" => Some(Action::GotoTop),
            "goto-bottom" | "goto_bottom" => Some(Action::GotoBottom),
            "add-todo" | "add_todo" => Some(Action::AddTodo),
            "edit-todo" | "edit_todo" => Some(Action::EditTodo),
            "delete-todo" | "delete_todo" => Some(Action::DeleteTodo),
            _ => None,
        }
    }

    /// Canonical config name for this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::MoveUp => "move-up",
            Action::MoveDown => "move-down",
            Action::GotoTop => "goto-top",
            Action::GotoBottom => "goto-bottom",
            Action::AddTodo => "add-todo",
            Action::EditTodo => "edit-todo",
            Action::DeleteTodo => "delete-todo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for action in [
            Action::Quit,
            Action::MoveUp,
            Action::MoveDown,
            Action::GotoTop,
            Action::GotoBottom,
            Action::AddTodo,
            Action::EditTodo,
            Action::DeleteTodo,
        ] {
            assert_eq!(Action::from_str(action.name()), Some(action));
        }
    }

    #[test]
    fn test_from_str_accepts_underscores() {
        assert_eq!(Action::from_str("delete_todo"), Some(Action::DeleteTodo));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(Action::from_str("launch-missiles"), None);
    }
}
