//! TUI application state machine
//!
//! Split into functional submodules:
//! - todo.rs: Command execution against the todo board
//!
//! The run loop is synchronous: read one event, handle it to completion,
//! redraw. There are no background event sources.

mod todo;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tudu_config::{Config, KeybindMap};
use tudu_core::{TodoBoard, TodoItem};

use crate::error::TuiError;

use super::input::handle_input_sync;
use super::layout::draw;
use super::state::InputMode;
use super::theme::Theme;
use super::widgets::{TextInput, VirtualList};

type Result<T> = std::result::Result<T, TuiError>;

/// Application state
pub struct App {
    /// The todo list and its edit session
    pub board: TodoBoard,
    /// List cursor position
    pub cursor: usize,
    /// Normal (list) vs. Insert (form) mode
    pub input_mode: InputMode,
    /// Draft buffer behind the form
    pub text_input: TextInput,

    // ============ UI State ============
    pub should_quit: bool,
    pub error_message: Option<String>,
    pub theme: Theme,

    // ============ Configuration ============
    pub config: Config,
    pub keybinds: KeybindMap,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let keybinds = config
            .to_keybind_map()
            .map_err(|e| TuiError::Config(format!("failed to build keybind map: {}", e)))?;

        Ok(Self {
            board: TodoBoard::new(),
            cursor: 0,
            input_mode: InputMode::Normal,
            text_input: TextInput::new(),
            should_quit: false,
            error_message: None,
            theme: Theme::default(),
            config,
            keybinds,
        })
    }

    /// The item under the list cursor, if any
    pub fn selected(&self) -> Option<&TodoItem> {
        self.board.items().get(self.cursor)
    }
}

impl VirtualList for App {
    fn virtual_len(&self) -> usize {
        // The empty board still renders one placeholder row
        self.board.len().max(1)
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos;
    }
}

/// Result of TUI run
pub enum RunResult {
    /// User quit (q)
    Quit,
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<RunResult> {
    // Setup terminal
    enable_raw_mode().map_err(TuiError::TerminalInit)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TuiError::TerminalInit)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(TuiError::TerminalInit)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop errored
    disable_raw_mode().map_err(TuiError::TerminalRestore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TuiError::TerminalRestore)?;
    terminal.show_cursor().map_err(TuiError::TerminalRestore)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<RunResult> {
    loop {
        terminal.draw(|f| draw(f, app)).map_err(TuiError::Render)?;

        match event::read().map_err(TuiError::Input)? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                // Sync input handling - returns an optional command
                if let Some(command) = handle_input_sync(app, key) {
                    app.execute_command(command);
                }
            }
            // Resize is picked up by the next draw
            _ => {}
        }

        if app.should_quit {
            return Ok(RunResult::Quit);
        }
    }
}
