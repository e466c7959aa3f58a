//! Positioner configuration
//!
//! Defaults can be set in code with the builder methods or loaded from a
//! TOML file:
//!
//! ```toml
//! default_points = "lt lb"
//! default_offset = "0 4"
//! scrollbar_allowance = 17
//! class_prefix = "ui-"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::types::{Viewport, WindowMetrics};
use crate::spec::{DEFAULT_OFFSET, DEFAULT_POINTS};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read positioner config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse positioner config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for positioning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PositionerConfig {
    /// Anchor spec for requests that name none
    pub default_points: String,

    /// Offset spec for requests that name none
    pub default_offset: String,

    /// Pixels kept clear on the right of the window for a scrollbar
    pub scrollbar_allowance: f64,

    /// Prefix for direction style classes (e.g., "ch-" for "ch-top")
    pub class_prefix: String,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            default_points: DEFAULT_POINTS.to_string(),
            default_offset: DEFAULT_OFFSET.to_string(),
            scrollbar_allowance: 30.0,
            class_prefix: "ch-".to_string(),
        }
    }
}

impl PositionerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default anchor spec
    pub fn with_default_points(mut self, points: impl Into<String>) -> Self {
        self.default_points = points.into();
        self
    }

    /// Set the default offset spec
    pub fn with_default_offset(mut self, offset: impl Into<String>) -> Self {
        self.default_offset = offset.into();
        self
    }

    /// Set the scrollbar allowance
    pub fn with_scrollbar_allowance(mut self, allowance: f64) -> Self {
        self.scrollbar_allowance = allowance;
        self
    }

    /// Set the style class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Viewport for the given window, honoring the scrollbar allowance
    pub fn viewport(&self, window: &WindowMetrics) -> Viewport {
        Viewport::from_window(window, self.scrollbar_allowance)
    }
}
