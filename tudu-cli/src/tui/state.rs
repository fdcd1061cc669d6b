//! TUI state types and enums
//!
//! Type definitions shared between the input handlers, the app state
//! machine and the views.

use tudu_core::TodoId;

/// Input mode for the widget
///
/// `Normal` navigates the list; `Insert` types into the form. Whether a
/// submit from `Insert` creates or updates is decided by the board's edit
/// session, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

/// State-mutating commands produced by the input handlers
///
/// Each user action maps to at most one command, applied atomically to the
/// board before the next frame is drawn. View-only changes (cursor moves,
/// mode switches) happen directly in the handlers and never become
/// commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Commit the form buffer: append in create mode, replace in edit mode
    Submit { title: String },
    /// Start editing an item, prefilling the form with its title
    BeginEdit { todo_id: TodoId },
    /// Remove an item; cancels the edit session if it points at it
    Delete { todo_id: TodoId },
}
