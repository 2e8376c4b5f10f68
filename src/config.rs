//! Configuration management for the block insertion menu.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the saved-blocks store endpoint and user preferences.

use crate::catalog::filter::Tab;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_usage_path() -> String {
    "usage.json".to_string()
}

fn default_recent_cap() -> usize {
    20
}

fn default_tab_name() -> String {
    "blocks".to_string()
}

/// Application configuration structure.
///
/// Contains the store endpoint and user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the saved-blocks store API; saved tab stays empty if unset
    pub store_url: Option<String>,
    /// Usage file path (relative to config dir or absolute)
    pub usage_path: String,
    /// Maximum number of entries kept in the recent tab
    pub recent_cap: usize,
    /// Tab the menu opens on ("recent", "blocks", "embeds", or "saved")
    pub default_tab: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: None,
            usage_path: default_usage_path(),
            recent_cap: default_recent_cap(),
            default_tab: default_tab_name(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/blockpick/config.jsonc`
    /// 3. `~/.config/blockpick/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        // Parse JSONC (JSON with comments)
        // Strip // style comments manually
        let json_content: String = content
            .lines()
            .map(|line| {
                // Remove // comments (but preserve // in strings)
                if let Some(comment_pos) = line.find("//") {
                    // Check if // is inside a string (simplified - doesn't handle escaped quotes)
                    let before_comment = &line[..comment_pos];
                    let quote_count = before_comment.matches('"').count();
                    if quote_count % 2 == 0 {
                        // Not inside a string, remove comment
                        line[..comment_pos].trim_end()
                    } else {
                        // Inside a string, keep as is
                        line
                    }
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let config: Config =
            serde_json::from_str(&json_content).with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    #[allow(dead_code)] // Useful for saving config changes from within the app
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to config file or error
    ///
    /// # Details
    /// Returns `$XDG_CONFIG_HOME/blockpick/config.jsonc` or
    /// `~/.config/blockpick/config.jsonc`.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("blockpick").join("config.jsonc"))
    }

    /// Get usage file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to usage file or error
    ///
    /// # Details
    /// If usage_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn usage_file_path(&self) -> Result<PathBuf> {
        let usage_path = Path::new(&self.usage_path);
        if usage_path.is_absolute() {
            Ok(usage_path.to_path_buf())
        } else {
            let config_dir = config_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
            Ok(config_dir.join("blockpick").join(&self.usage_path))
        }
    }

    /// Parse the configured default tab.
    ///
    /// # Returns
    /// * `Result<Tab>` - Parsed tab, or an error for an unknown tab name
    pub fn initial_tab(&self) -> Result<Tab> {
        self.default_tab
            .parse()
            .with_context(|| format!("Invalid default_tab in config: {}", self.default_tab))
    }
}
