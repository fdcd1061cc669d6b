//! Key binding pattern parsing and resolution

use crate::{actions::Action, types::Bindings, ConfigError, Result};
use std::collections::HashMap;

/// Represents a parsed key binding context
///
/// These contexts determine which keybindings are active based on the
/// current state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingContext {
    /// Global bindings (always checked)
    Global,
    /// List navigation context
    List,
}

impl BindingContext {
    /// Parse context from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "global" => Some(BindingContext::Global),
            "list" => Some(BindingContext::List),
            _ => None,
        }
    }

    /// Get canonical name for this context
    pub fn name(&self) -> &'static str {
        match self {
            BindingContext::Global => "global",
            BindingContext::List => "list",
        }
    }
}

/// Represents a parsed key pattern like "C-s" or "S-Tab"
///
/// # Format
/// - "C-x" or "CTRL-x" - Control key
/// - "S-x" or "SHIFT-x" - Shift key
/// - "A-x" or "ALT-x" - Alt key
/// - Single chars: "a", "j", "k", "1", etc.
/// - Special keys: "Enter", "Esc", "Tab", "Space", "Backspace", "Up", "Down", etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub modifiers: String,
    pub key: String,
}

impl KeyPattern {
    /// Parse a key pattern string
    ///
    /// Examples:
    /// - "C-d" → Control+d
    /// - "S-Tab" → Shift+Tab
    /// - "Enter" → Enter key
    /// - "j" → j key
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::InvalidKeyPattern(
                "Empty key pattern".to_string(),
            ));
        }

        let parts: Vec<&str> = s.split('-').collect();

        // Modifiers are only recognized at the beginning, each followed by
        // more parts: "C-s" has modifier C, a lone "C" is the key C.
        let mut modifiers = Vec::new();
        let mut key_idx = 0;

        for (i, part) in parts.iter().enumerate() {
            let has_following_parts = i + 1 < parts.len();
            let is_modifier =
                has_following_parts && matches!(*part, "C" | "S" | "A" | "CTRL" | "SHIFT" | "ALT");

            if is_modifier {
                match *part {
                    "C" | "CTRL" => modifiers.push("Ctrl"),
                    "S" | "SHIFT" => modifiers.push("Shift"),
                    "A" | "ALT" => modifiers.push("Alt"),
                    _ => {}
                }
                key_idx = i + 1;
            } else {
                break;
            }
        }

        if key_idx >= parts.len() {
            return Err(ConfigError::InvalidKeyPattern(format!(
                "Invalid key pattern: {} (missing key after modifiers)",
                s
            )));
        }

        // Remaining parts are the key (join them back with hyphens)
        let key = parts[key_idx..].join("-");

        if !Self::is_valid_key(&key) {
            return Err(ConfigError::InvalidKeyPattern(format!(
                "Invalid key: {} (not a recognized key)",
                key
            )));
        }

        let modifiers = modifiers.join("+");

        Ok(KeyPattern { modifiers, key })
    }

    /// Check if a key string is valid
    fn is_valid_key(key: &str) -> bool {
        match key {
            // Special keys
            "Enter" | "Return" | "Esc" | "Escape" | "Tab" | "Space" | "Backspace" | "Back" => true,
            "Up" | "Down" | "Left" | "Right" => true,
            "Home" | "End" | "PageUp" | "PageDown" => true,
            "Delete" | "Insert" => true,
            // Function keys
            k if k.starts_with('F') && k.len() <= 3 => {
                matches!(k[1..].parse::<u8>(), Ok(n) if n <= 24)
            }
            // Single character keys (letters, numbers, symbols)
            k if k.chars().count() == 1 => {
                let c = k.chars().next().unwrap();
                c.is_ascii_alphanumeric() || c.is_ascii_punctuation()
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}-{}", self.modifiers.replace('+', "-"), self.key)
        }
    }
}

/// Maps key patterns to actions in specific contexts
pub struct KeybindMap {
    bindings: HashMap<BindingContext, HashMap<String, Action>>,
}

impl KeybindMap {
    /// Build keybind map from configuration
    pub fn from_bindings(bindings: &Bindings) -> Result<Self> {
        let mut map = KeybindMap {
            bindings: HashMap::new(),
        };

        map.load_context_bindings(BindingContext::Global, &bindings.global)?;
        map.load_context_bindings(BindingContext::List, &bindings.list)?;

        Ok(map)
    }

    /// Load bindings for a specific context
    fn load_context_bindings(
        &mut self,
        context: BindingContext,
        bindings: &HashMap<String, String>,
    ) -> Result<()> {
        let mut context_bindings = HashMap::new();

        for (key_str, action_str) in bindings {
            // Skip invalid key patterns
            if KeyPattern::parse(key_str).is_err() {
                eprintln!("Warning: Invalid key pattern in config: {}", key_str);
                continue;
            }

            // Skip invalid actions
            if let Some(action) = Action::from_str(action_str) {
                context_bindings.insert(key_str.clone(), action);
            } else {
                eprintln!("Warning: Invalid action in config: {}", action_str);
            }
        }

        self.bindings.insert(context, context_bindings);
        Ok(())
    }

    /// Resolve a key pattern to an action in a specific context
    ///
    /// Returns None if no binding found.
    pub fn resolve(&self, key_str: &str, context: BindingContext) -> Option<Action> {
        // Check context-specific bindings first
        if let Some(bindings) = self.bindings.get(&context) {
            if let Some(action) = bindings.get(key_str) {
                return Some(*action);
            }
        }

        // Check global bindings as fallback
        if let Some(bindings) = self.bindings.get(&BindingContext::Global) {
            if let Some(action) = bindings.get(key_str) {
                return Some(*action);
            }
        }

        None
    }

    /// First key bound to `action` in `context` (global fallback included)
    pub fn key_for(&self, action: Action, context: BindingContext) -> Option<&str> {
        for ctx in [context, BindingContext::Global] {
            if let Some(bindings) = self.bindings.get(&ctx) {
                let mut keys: Vec<&String> = bindings
                    .iter()
                    .filter(|(_, a)| **a == action)
                    .map(|(k, _)| k)
                    .collect();
                // Stable choice for display when several keys map to one
                // action; short keys ("j") beat special keys ("Down")
                keys.sort_by_key(|k| (k.len(), *k));
                if let Some(key) = keys.first() {
                    return Some(key.as_str());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_parse_single_char() {
        let p = KeyPattern::parse("j").unwrap();
        assert_eq!(p.modifiers, "");
        assert_eq!(p.key, "j");
    }

    #[test]
    fn test_parse_ctrl_modifier() {
        let p = KeyPattern::parse("C-d").unwrap();
        assert_eq!(p.modifiers, "Ctrl");
        assert_eq!(p.key, "d");
    }

    #[test]
    fn test_parse_stacked_modifiers() {
        let p = KeyPattern::parse("C-S-x").unwrap();
        assert_eq!(p.modifiers, "Ctrl+Shift");
        assert_eq!(p.key, "x");
    }

    #[test]
    fn test_parse_special_key() {
        assert!(KeyPattern::parse("Enter").is_ok());
        assert!(KeyPattern::parse("S-Tab").is_ok());
        assert!(KeyPattern::parse("F12").is_ok());
    }

    #[test]
    fn test_parse_lone_modifier_letter_is_a_key() {
        let p = KeyPattern::parse("G").unwrap();
        assert_eq!(p.modifiers, "");
        assert_eq!(p.key, "G");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(KeyPattern::parse("").is_err());
        assert!(KeyPattern::parse("C-").is_err());
        assert!(KeyPattern::parse("NotAKey").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let p = KeyPattern::parse("C-S-x").unwrap();
        assert_eq!(p.to_string(), "Ctrl-Shift-x");
    }

    #[test]
    fn test_resolve_context_then_global() {
        let bindings = defaults::default_bindings();
        let map = KeybindMap::from_bindings(&bindings).unwrap();

        assert_eq!(
            map.resolve("j", BindingContext::List),
            Some(Action::MoveDown)
        );
        // "q" lives in global; resolvable from the list context too
        assert_eq!(map.resolve("q", BindingContext::List), Some(Action::Quit));
        assert_eq!(map.resolve("z", BindingContext::List), None);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let mut bindings = Bindings::default();
        bindings
            .list
            .insert("NotAKey".to_string(), "move-down".to_string());
        bindings
            .list
            .insert("x".to_string(), "not-an-action".to_string());
        bindings.list.insert("j".to_string(), "move-down".to_string());

        let map = KeybindMap::from_bindings(&bindings).unwrap();
        assert_eq!(
            map.resolve("j", BindingContext::List),
            Some(Action::MoveDown)
        );
        assert_eq!(map.resolve("x", BindingContext::List), None);
        assert_eq!(map.resolve("NotAKey", BindingContext::List), None);
    }

    #[test]
    fn test_key_for_display() {
        let bindings = defaults::default_bindings();
        let map = KeybindMap::from_bindings(&bindings).unwrap();
        assert_eq!(map.key_for(Action::AddTodo, BindingContext::List), Some("a"));
        // "e" and "Enter" both map to edit; the short one is shown
        assert_eq!(map.key_for(Action::EditTodo, BindingContext::List), Some("e"));
    }
}
