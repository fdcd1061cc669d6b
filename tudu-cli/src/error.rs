//! TUI error types

use thiserror::Error;

/// Errors from terminal setup, rendering and teardown
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(std::io::Error),

    #[error("failed to read input: {0}")]
    Input(std::io::Error),

    #[error("failed to render frame: {0}")]
    Render(std::io::Error),

    #[error("failed to restore terminal: {0}")]
    TerminalRestore(std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
