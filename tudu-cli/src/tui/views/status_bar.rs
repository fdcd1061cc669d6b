//! Status bar rendering

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tudu_config::{Action, BindingContext};

use crate::tui::app::App;
use crate::tui::state::InputMode;

/// Draw the status bar: the last error if one is set, else a help line
/// built from the live keybind map
pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.error_message {
        Some(message) => (message.clone(), app.theme.error_style()),
        None => (help_line(app), app.theme.help_style()),
    };

    let block = if app.config.ui.show_borders {
        Block::default().borders(Borders::ALL)
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(Paragraph::new(text).style(style), inner);
}

fn help_line(app: &App) -> String {
    match app.input_mode {
        InputMode::Insert => "[Enter] Save | [Esc] Cancel".to_string(),
        InputMode::Normal => {
            let key = |action| {
                app.keybinds
                    .key_for(action, BindingContext::List)
                    .unwrap_or("?")
            };
            format!(
                "[{}/{}] Move | [{}] Add | [{}] Edit | [{}] Delete | [{}] Quit",
                key(Action::MoveDown),
                key(Action::MoveUp),
                key(Action::AddTodo),
                key(Action::EditTodo),
                key(Action::DeleteTodo),
                key(Action::Quit),
            )
        }
    }
}
