//! Configuration loading

use crate::defaults;
use crate::keybind::KeybindMap;
use crate::parser;
use crate::types::Config;
use crate::Result;
use std::path::{Path, PathBuf};

/// Default config file location: `~/.tudu/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tudu").join("config.toml"))
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist. A present-but-broken file is an error.
    pub fn load_or_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => parser::load_from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        parser::load_from_file(path)
    }

    /// Build the keybind map: user bindings layered over the defaults
    pub fn to_keybind_map(&self) -> Result<KeybindMap> {
        let merged = defaults::merge_defaults(&self.bindings);
        KeybindMap::from_bindings(&merged)
    }
}
