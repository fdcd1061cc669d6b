//! TOML configuration parsing and validation

use crate::types::Config;
use crate::{ConfigError, Result};
use std::path::Path;

/// Parse config from TOML string
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(ConfigError::TomlParse)?;
    validate_config(&config);
    Ok(config)
}

/// Load config from a TOML file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Warn about binding entries that will be skipped at resolution time
fn validate_config(config: &Config) {
    let all_bindings = [
        ("global", &config.bindings.global),
        ("list", &config.bindings.list),
    ];

    for (context_name, binding_map) in all_bindings {
        for (key_str, action_str) in binding_map {
            if let Err(e) = crate::keybind::KeyPattern::parse(key_str) {
                eprintln!(
                    "Warning: Invalid key pattern in [bindings.{}]: {} ({})",
                    context_name, key_str, e
                );
            }

            if crate::actions::Action::from_str(action_str).is_none() {
                eprintln!(
                    "Warning: Invalid action in [bindings.{}]: {}",
                    context_name, action_str
                );
            }
        }
    }
}
