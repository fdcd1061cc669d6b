//! Title form rendering

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tudu_core::FormMode;

use crate::tui::app::App;
use crate::tui::state::InputMode;

const PLACEHOLDER: &str = "add your todo.";

/// Draw the title form
///
/// The block title follows the edit session: " Add Todo " when the next
/// submit creates, " Update Todo " when it rewrites an existing item.
pub fn draw_form(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.board.mode() {
        FormMode::Create => " Add Todo ",
        FormMode::Edit => " Update Todo ",
    };

    let focused = app.input_mode == InputMode::Insert;
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

    let content = app.text_input.content();
    let paragraph = if content.is_empty() && !focused {
        Paragraph::new(PLACEHOLDER).style(app.theme.placeholder_style())
    } else {
        Paragraph::new(content).style(app.theme.normal_style())
    };
    f.render_widget(paragraph, inner);

    // The terminal cursor tracks the draft only while typing
    if focused {
        f.set_cursor_position((
            inner.x + app.text_input.cursor_display_offset() as u16,
            inner.y,
        ));
    }
}
