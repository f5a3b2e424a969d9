//! Shared tuning settings for the Air Cursor CLI and library consumers.
//! Persisted in the platform-specific config directory via `directories::ProjectDirs`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::filter::{FilterConfig, DEFAULT_BETA, DEFAULT_DERIVATIVE_CUTOFF, DEFAULT_MIN_CUTOFF};
use crate::mapping::{MappingError, ScreenMapper, DEFAULT_EDGE_MARGIN};

/// Cursor tuning settings that can be saved and loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Minimum cutoff frequency in Hz (lower smooths more at rest)
    pub min_cutoff: f64,
    /// Speed coefficient (higher reduces lag during fast motion)
    pub beta: f64,
    /// Derivative cutoff frequency in Hz
    pub d_cutoff: f64,
    /// Edge margin in source pixels
    pub edge_margin: u32,
    /// Source (camera) frame width in pixels
    pub source_width: u32,
    /// Source (camera) frame height in pixels
    pub source_height: u32,
    /// Destination screen width in pixels
    pub screen_width: u32,
    /// Destination screen height in pixels
    pub screen_height: u32,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            min_cutoff: DEFAULT_MIN_CUTOFF,
            beta: DEFAULT_BETA,
            d_cutoff: DEFAULT_DERIVATIVE_CUTOFF,
            edge_margin: DEFAULT_EDGE_MARGIN,
            source_width: 640,
            source_height: 480,
            screen_width: 1920,
            screen_height: 1080,
        }
    }
}

impl CursorSettings {
    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "aircursor", "air-cursor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path.
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from the config file.
    pub fn load() -> Self {
        let loaded: Self = Self::settings_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        loaded.backfill()
    }

    /// Replace zeroed or non-positive fields with their defaults.
    ///
    /// Older or hand-edited settings files may carry zero resolutions or
    /// non-positive cutoffs, which the filter and mapper constructors
    /// reject.
    fn backfill(mut self) -> Self {
        let defaults = Self::default();

        if self.source_width == 0 {
            self.source_width = defaults.source_width;
        }
        if self.source_height == 0 {
            self.source_height = defaults.source_height;
        }
        if self.screen_width == 0 {
            self.screen_width = defaults.screen_width;
        }
        if self.screen_height == 0 {
            self.screen_height = defaults.screen_height;
        }
        if self.min_cutoff <= 0.0 {
            self.min_cutoff = defaults.min_cutoff;
        }
        if self.d_cutoff <= 0.0 {
            self.d_cutoff = defaults.d_cutoff;
        }

        self
    }

    /// Save settings to the config file.
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir().ok_or("Cannot determine config directory")?;

        // Create config directory if it doesn't exist
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let path = dir.join("settings.json");
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// Build the per-axis filter tuning from these settings.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::default()
            .with_min_cutoff(self.min_cutoff)
            .with_beta(self.beta)
            .with_d_cutoff(self.d_cutoff)
    }

    /// Build the screen mapper from these settings.
    pub fn screen_mapper(&self) -> Result<ScreenMapper, MappingError> {
        ScreenMapper::new(
            self.source_width,
            self.source_height,
            self.screen_width,
            self.screen_height,
            self.edge_margin,
        )
    }
}
