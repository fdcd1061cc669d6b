//! Screen layout
//!
//! The screen is three fixed bands: the form on top, the list in the
//! middle, the status bar at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::App;
use super::views::{form, list, status_bar};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    form::draw_form(f, chunks[0], app);
    list::draw_list(f, chunks[1], app);
    status_bar::draw_status_bar(f, chunks[2], app);
}
