//! Configuration data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global options (behavior, features)
    #[serde(default)]
    pub options: Options,

    /// UI-specific settings
    #[serde(default)]
    pub ui: UiConfig,

    /// All key bindings organized by context
    #[serde(default)]
    pub bindings: Bindings,
}

/// Global options for application behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Append the last-updated time to each list row
    #[serde(default)]
    pub show_timestamps: bool,
}

/// UI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show UI borders around the form and list panels
    #[serde(default = "default_true")]
    pub show_borders: bool,

    /// Application title shown on the list block
    #[serde(default = "default_title")]
    pub title: String,
}

/// All key bindings organized by context
///
/// Values map a key pattern string (see [`crate::keybind::KeyPattern`]) to
/// an action name (see [`crate::actions::Action`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bindings {
    /// Global key bindings (checked in every context)
    #[serde(default)]
    pub global: HashMap<String, String>,

    /// List navigation context
    #[serde(default)]
    pub list: HashMap<String, String>,
}

// Default value helper functions
fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Todo App".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_timestamps: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_borders: default_true(),
            title: default_title(),
        }
    }
}
