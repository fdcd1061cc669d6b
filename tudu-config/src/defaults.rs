//! Built-in default key bindings

use crate::types::Bindings;

/// The full default binding set
pub fn default_bindings() -> Bindings {
    let mut bindings = Bindings::default();

    for (key, action) in [("q", "quit")] {
        bindings.global.insert(key.to_string(), action.to_string());
    }

    for (key, action) in [
        ("j", "move-down"),
        ("Down", "move-down"),
        ("k", "move-up"),
        ("Up", "move-up"),
        ("g", "goto-top"),
        ("G", "goto-bottom"),
        ("a", "add-todo"),
        ("e", "edit-todo"),
        ("Enter", "edit-todo"),
        ("d", "delete-todo"),
    ] {
        bindings.list.insert(key.to_string(), action.to_string());
    }

    bindings
}

/// Fill in default bindings for keys the user left unbound
///
/// User entries always win; defaults only land on unclaimed keys.
pub fn merge_defaults(user: &Bindings) -> Bindings {
    let mut merged = default_bindings();

    for (key, action) in &user.global {
        merged.global.insert(key.clone(), action.clone());
    }
    for (key, action) in &user.list {
        merged.list.insert(key.clone(), action.clone());
    }

    merged
}
