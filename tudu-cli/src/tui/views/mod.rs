//! View rendering
//!
//! Each view draws into the area handed to it by the layout:
//! - `form`: Title input at the top, create or update depending on the session
//! - `list`: The todo list with positional labels
//! - `status_bar`: Help line, replaced by the last error when one is set

pub mod form;
pub mod list;
pub mod status_bar;
