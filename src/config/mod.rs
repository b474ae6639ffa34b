//! Configuration management for monochat.
//!
//! Only layout preferences are persisted. Chat state lives in memory and is
//! lost on exit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Layout configuration
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Load configuration from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.layout.validate();

        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("monochat").join("config.json"))
    }
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Sidebar width as percentage (10-50%)
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width_pct: u8,

    /// Sidebar position (left or right)
    #[serde(default)]
    pub sidebar_position: SidebarPosition,

    /// Whether the sidebar is shown
    #[serde(default = "default_sidebar_visible")]
    pub sidebar_visible: bool,
}

fn default_sidebar_width() -> u8 {
    25
}

fn default_sidebar_visible() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width_pct: 25,
            sidebar_position: SidebarPosition::Left,
            sidebar_visible: true,
        }
    }
}

impl LayoutConfig {
    /// Validate and clamp sidebar width to valid range (10-50%)
    pub fn validate(&mut self) {
        self.sidebar_width_pct = self.sidebar_width_pct.clamp(10, 50);
    }
}

/// Sidebar position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

impl SidebarPosition {
    /// Toggle between left and right
    pub fn toggle(&self) -> Self {
        match self {
            SidebarPosition::Left => SidebarPosition::Right,
            SidebarPosition::Right => SidebarPosition::Left,
        }
    }
}
