//! Todo board state machine
//!
//! The board owns the ordered item list and the (at most one) active edit
//! session. Every mutation is synchronous and total; the caller re-renders
//! after each one.
//!
//! # Invariants
//! - Item ids are unique within the board.
//! - At most one edit session is active at a time.
//! - `created_at` of an item never changes after first assignment.
//! - Deleting the item under edit discards the session.

use chrono::Utc;

use crate::item::{TodoId, TodoItem};

/// Errors from programmatic board calls.
///
/// The UI gates these before they can happen; they exist for non-UI callers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("todo title must not be empty")]
    EmptyTitle,
}

/// Which way the input form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit appends a new item.
    Create,
    /// Submit replaces the item under edit, in place.
    Edit,
}

/// Transient marker of the item being edited.
///
/// Holds a draft snapshot of the whole record so the original
/// `created_at` survives the round trip through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub draft: TodoItem,
}

impl EditSession {
    /// Id of the item this session refers to.
    pub fn id(&self) -> TodoId {
        self.draft.id
    }
}

/// The ordered todo list plus the active edit session.
///
/// Insertion order is display order; the board never sorts.
#[derive(Debug, Default)]
pub struct TodoBoard {
    items: Vec<TodoItem>,
    session: Option<EditSession>,
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active edit session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Current form mode; `Create` unless an edit session is active.
    pub fn mode(&self) -> FormMode {
        if self.session.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Commit the form.
    ///
    /// Without a session this appends a new item; with one it replaces the
    /// referenced entry in place, keeping its id and `created_at`. The
    /// session is cleared on every successful submit.
    ///
    /// Whitespace-only titles are rejected with no state change.
    pub fn submit(&mut self, title: &str) -> crate::Result<&TodoItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }

        match self.session.take() {
            Some(session) => {
                let now = Utc::now();
                let draft = session.draft;
                match self.items.iter().position(|item| item.id == draft.id) {
                    Some(idx) => {
                        self.items[idx] = TodoItem {
                            id: draft.id,
                            title: title.to_string(),
                            created_at: draft.created_at,
                            updated_at: now,
                        };
                        Ok(&self.items[idx])
                    }
                    // The edited item vanished under us; keep the user's
                    // text and fall back to a create.
                    None => Ok(self.push_new(title)),
                }
            }
            None => Ok(self.push_new(title)),
        }
    }

    fn push_new(&mut self, title: &str) -> &TodoItem {
        let idx = self.items.len();
        self.items.push(TodoItem::new(title));
        &self.items[idx]
    }

    /// Start editing `id`, snapshotting its fields into the draft.
    ///
    /// No-op returning `None` if `id` is not on the board.
    pub fn begin_edit(&mut self, id: TodoId) -> Option<&EditSession> {
        let item = self.items.iter().find(|item| item.id == id)?;
        self.session = Some(EditSession {
            draft: item.clone(),
        });
        self.session.as_ref()
    }

    /// Abandon the active edit session, if any.
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Remove the item with `id`; returns whether anything was removed.
    ///
    /// Clears the edit session when it references the removed item, so the
    /// session never dangles.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;

        if removed && self.session.as_ref().is_some_and(|s| s.id() == id) {
            self.session = None;
        }
        removed
    }
}
