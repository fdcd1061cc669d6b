//! TUI module

mod app;
mod input;
mod layout;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{run, App, RunResult};
