//! # ChatBot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the chatbot configuration. It
//! supports a multi-level approach that combines defaults, user settings and
//! project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.chatbot.toml` in the current directory or an
//!    ancestor (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/chatbot/config.toml`)
//! 3. Default values defined in the code
//!
//! Layers are merged key by key at the TOML level, so any key a higher layer
//! sets wins, even when it sets the default value.
//!
//! When the `CHATBOT_CONFIG` environment variable names a file, that file is
//! the only one read: neither the user nor the project file is consulted.
//!
//! Command-line flags are applied on top of the result by each command.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "Robo"
//! typing_delay_ms = 10
//! encouragement_interval = 3
//! typing_effect = true
//!
//! [transcript]
//! path = "~/chatbot/transcript.log"
//! ```
//!
//! ```ignore
//! let cfg = config::load_config()?;
//! println!("{} is ready", cfg.chat.bot_name);
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use toml::{Table, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

/// Settings for the interactive session (`chatbot chat`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name shown in front of every bot line.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Delay between characters when the typing effect is on.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Print an encouragement line every N answered turns. `0` disables it.
    #[serde(default = "default_encouragement_interval")]
    pub encouragement_interval: u32,
    /// Render replies one character at a time.
    #[serde(default = "default_typing_effect")]
    pub typing_effect: bool,
}

/// Optional conversation transcript.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TranscriptConfig {
    /// File to append the conversation to (can use ~). Will be expanded.
    pub path: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            typing_delay_ms: default_typing_delay_ms(),
            encouragement_interval: default_encouragement_interval(),
            typing_effect: default_typing_effect(),
        }
    }
}

fn default_bot_name() -> String {
    "ChatBot".to_string()
}
fn default_typing_delay_ms() -> u64 {
    30
}
fn default_encouragement_interval() -> u32 {
    5
}
fn default_typing_effect() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".chatbot.toml";
const CONFIG_ENV_VAR: &str = "CHATBOT_CONFIG";

pub fn load_config() -> Result<Config> {
    let layers = match env::var_os(CONFIG_ENV_VAR) {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            info!(
                "Loading configuration named by {}: {}",
                CONFIG_ENV_VAR,
                path.display()
            );
            vec![load_layer_from_path(&path)?]
        }
        None => [load_user_config()?, load_project_config()?]
            .into_iter()
            .flatten()
            .collect(),
    };
    let mut merged_config = merge_layers(layers)?;
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Table>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ChatBot", "chatbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_layer_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Table>> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_layer_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads one configuration file as a raw TOML table. The file is also
/// checked against [`Config`] so mistakes are reported with its path.
fn load_layer_from_path(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    toml::from_str::<Table>(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges the layers in order (later layers win) and fills in defaults.
fn merge_layers(layers: Vec<Table>) -> Result<Config> {
    let mut merged = Table::new();
    for layer in layers {
        merge_tables(&mut merged, layer);
    }
    Value::Table(merged)
        .try_into::<Config>()
        .map_err(|e| anyhow!(ChatbotError::Config(format!("Invalid merged configuration: {}", e))))
}

/// Overlays `top` onto `base`, descending into nested tables.
fn merge_tables(base: &mut Table, top: Table) {
    for (key, value) in top {
        match value {
            Value::Table(top_inner) => match base.get_mut(&key) {
                Some(Value::Table(base_inner)) => merge_tables(base_inner, top_inner),
                _ => {
                    base.insert(key, Value::Table(top_inner));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(path) = config.transcript.path.as_mut() {
        *path = shellexpand::tilde(path.as_str()).into_owned();
        debug!("Expanded transcript path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(ChatbotError::Config(
            "chat.bot_name must not be empty.".to_string()
        )));
    }
    if let Some(path) = &config.transcript.path {
        if path.trim().is_empty() {
            return Err(anyhow!(ChatbotError::Config(
                "transcript.path must not be empty when set.".to_string()
            )));
        }
        if Path::new(path).is_dir() {
            return Err(anyhow!(ChatbotError::Config(format!(
                "Configured transcript path '{}' is a directory.",
                path
            ))));
        }
    }
    Ok(())
}
