//! Todo list rendering

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::state::InputMode;

/// Draw the todo list
///
/// Labels are positional: the item at index N renders as "Task N+1", so
/// they renumber whenever the list changes.
pub fn draw_list(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(" {} ", app.config.ui.title);
    let focused = app.input_mode == InputMode::Normal;
    let border_style = if focused {
        app.theme.focused_border_style()
    } else {
        app.theme.unfocused_border_style()
    };

    let block = if app.config.ui.show_borders {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
    } else {
        Block::default().title(title)
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.board.is_empty() {
        let placeholder = Paragraph::new("No Todos").style(app.theme.placeholder_style());
        f.render_widget(placeholder, inner);
        return;
    }

    let editing_id = app.board.session().map(|s| s.id());

    let items: Vec<ListItem> = app
        .board
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if editing_id == Some(item.id) {
                app.theme.editing_style()
            } else if focused && idx == app.cursor {
                app.theme.selection_style()
            } else {
                app.theme.normal_style()
            };

            let text = if app.config.options.show_timestamps {
                format!(
                    "Task {}  {}  ({})",
                    idx + 1,
                    item.title,
                    item.updated_at.format("%Y-%m-%d %H:%M")
                )
            } else {
                format!("Task {}  {}", idx + 1, item.title)
            };

            ListItem::new(text).style(style)
        })
        .collect();

    f.render_widget(List::new(items), inner);
}
