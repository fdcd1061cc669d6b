//! Adapter between crossterm key events and tudu-config key patterns

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert a crossterm KeyEvent to a tudu-config KeyPattern string
///
/// Returns `None` for keys that cannot be bound (media keys, lock keys).
pub fn key_event_to_pattern_string(key: KeyEvent) -> Option<String> {
    let mut modifiers = Vec::new();

    // Uppercase letters already carry Shift in the character itself
    let is_uppercase_letter = matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());

    if key.modifiers.contains(KeyModifiers::SHIFT) && !is_uppercase_letter {
        modifiers.push("S");
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        modifiers.push("C");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        modifiers.push("A");
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() || c.is_ascii_punctuation() => c.to_string(),
        KeyCode::Char(_) => return None,
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return None,
    };

    if modifiers.is_empty() {
        Some(key_str)
    } else {
        Some(format!("{}-{}", modifiers.join("-"), key_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::empty());
        assert_eq!(key_event_to_pattern_string(key), Some("j".to_string()));
    }

    #[test]
    fn test_ctrl_modifier() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_pattern_string(key), Some("C-d".to_string()));
    }

    #[test]
    fn test_uppercase_letter_swallows_shift() {
        let key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_pattern_string(key), Some("G".to_string()));
    }

    #[test]
    fn test_special_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(key_event_to_pattern_string(key), Some("Enter".to_string()));
    }

    #[test]
    fn test_space() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty());
        assert_eq!(key_event_to_pattern_string(key), Some("Space".to_string()));
    }

    #[test]
    fn test_unbindable_key() {
        let key = KeyEvent::new(KeyCode::CapsLock, KeyModifiers::empty());
        assert_eq!(key_event_to_pattern_string(key), None);
    }
}
