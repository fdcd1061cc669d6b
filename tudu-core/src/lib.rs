//! Tudu domain model
//!
//! Owns the in-memory todo list and its state transitions. This crate is
//! independent of the TUI: all operations are synchronous functions on
//! [`TodoBoard`], so the frontend stays a thin event-to-command adapter.
//!
//! - [`item`] - The `TodoItem` record and its id type
//! - [`board`] - `TodoBoard` state machine: submit / begin_edit / delete

pub mod board;
pub mod item;

pub use board::{BoardError, EditSession, FormMode, TodoBoard};
pub use item::{TodoId, TodoItem};

pub type Result<T> = std::result::Result<T, BoardError>;
