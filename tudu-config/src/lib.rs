//! Tudu Configuration System
//!
//! A standalone configuration management library for tudu with support for:
//! - TOML-based configuration files (`~/.tudu/config.toml`)
//! - Key binding customization with context-aware resolution
//!
//! # Architecture
//!
//! This crate is independent of the TUI and can be used in other projects.
//!
//! - [`config`] - Main configuration loading
//! - [`types`] - Data structures for config, options, and bindings
//! - [`actions`] - Action enum and name parsing
//! - [`defaults`] - Built-in default key bindings
//! - [`keybind`] - Key pattern parsing and keybind resolution
//! - [`parser`] - TOML parsing and validation

pub mod actions;
pub mod config;
pub mod defaults;
pub mod keybind;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use actions::Action;
pub use keybind::{BindingContext, KeyPattern, KeybindMap};
pub use types::{Bindings, Config, Options};

/// Errors that can occur during config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid key pattern: {0}")]
    InvalidKeyPattern(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
