//! TextInput: cursor-aware single-line buffer with Unicode support

use crossterm::event::{KeyCode, KeyEvent};
use unicode_width::UnicodeWidthStr;

/// A cursor-aware single-line text buffer.
///
/// Tracks the cursor in char indices (not bytes) and computes display
/// widths for CJK/emoji characters, so terminal cursor placement stays
/// correct for non-ASCII titles.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The text content
    buffer: String,
    /// Cursor position as char index (not byte index)
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial content, cursor at end
    #[cfg(test)]
    pub fn with_content(content: impl Into<String>) -> Self {
        let buffer: String = content.into();
        let cursor = buffer.chars().count();
        Self { buffer, cursor }
    }

    /// Get the buffer content
    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Get cursor position (char index)
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Display width of text before the cursor, for terminal cursor placement
    pub fn cursor_display_offset(&self) -> usize {
        let before_cursor: String = self.buffer.chars().take(self.cursor).collect();
        UnicodeWidthStr::width(before_cursor.as_str())
    }

    /// Clear the buffer and reset cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Set content (cursor goes to end)
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.buffer = content.into();
        self.cursor = self.buffer.chars().count();
    }

    /// Insert character at cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.cursor_to_byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (Backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_idx = self.cursor_to_byte_index();
        let char_len = self.buffer[byte_idx..]
            .chars()
            .next()
            .map_or(0, |c| c.len_utf8());
        self.buffer.drain(byte_idx..byte_idx + char_len);
        true
    }

    /// Delete character at cursor (Delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.chars().count() {
            return false;
        }
        let byte_idx = self.cursor_to_byte_index();
        let char_len = self.buffer[byte_idx..]
            .chars()
            .next()
            .map_or(0, |c| c.len_utf8());
        self.buffer.drain(byte_idx..byte_idx + char_len);
        true
    }

    /// Move cursor left
    pub fn move_left(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) -> bool {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move cursor to start (Home)
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end (End)
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Convert char index to byte index
    fn cursor_to_byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Check if the trimmed buffer is empty
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Get trimmed content
    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }
}

/// Result of text input handling
pub enum TextInputResult {
    /// User pressed Esc - cancel input
    Cancel,
    /// User pressed Enter - submit with current buffer content
    Submit,
    /// Input was handled (character added/removed), no action needed
    Handled,
    /// Key was not handled by text input logic
    Unhandled,
}

/// Handle common text input keys with full cursor support
///
/// Supports Esc (cancel), Enter (submit), Backspace/Delete, Left/Right,
/// Home/End and printable character insertion.
pub fn handle_text_input(key: &KeyEvent, input: &mut TextInput) -> TextInputResult {
    match key.code {
        KeyCode::Esc => TextInputResult::Cancel,
        KeyCode::Enter => TextInputResult::Submit,
        KeyCode::Backspace => {
            input.backspace();
            TextInputResult::Handled
        }
        KeyCode::Delete => {
            input.delete();
            TextInputResult::Handled
        }
        KeyCode::Left => {
            input.move_left();
            TextInputResult::Handled
        }
        KeyCode::Right => {
            input.move_right();
            TextInputResult::Handled
        }
        KeyCode::Home => {
            input.move_home();
            TextInputResult::Handled
        }
        KeyCode::End => {
            input.move_end();
            TextInputResult::Handled
        }
        KeyCode::Char(c) => {
            input.insert(c);
            TextInputResult::Handled
        }
        _ => TextInputResult::Unhandled,
    }
}
