//! Layout configuration.
//!
//! Captures the tunable parameters of the day layout as a single
//! [`LayoutConfig`] that can be built in code or, with the `layout-config`
//! feature, loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # dayview.toml
//! total_width = 600
//! margin = 10
//! column_rule = "last-collision"
//! ```
//!
//! ```rust,ignore
//! let config = LayoutConfig::from_toml_file("dayview.toml")?;
//! let config = LayoutConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `LayoutConfig::default()` is a 600-unit day with a 10-unit left margin
//! and the last-collision column rule.

#[cfg(feature = "layout-config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default total width shared by the columns of one collision group.
pub const DEFAULT_TOTAL_WIDTH: u32 = 600;

/// Default left offset added to every event.
pub const DEFAULT_MARGIN: u32 = 10;

/// How an event's column is chosen when it collides with several events that
/// were laid out before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnRule {
    /// One past the column of the *last* colliding predecessor in scan order.
    ///
    /// An event that collides with predecessors in columns `[1, 0]`, in that
    /// order, lands in column 1 and shares it with the first of them.
    #[default]
    LastCollision,
    /// One past the highest column among all colliding predecessors.
    Highest,
}

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Parameters of the day layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width split between the columns of a collision group. Default: 600.
    pub total_width: u32,
    /// Offset added to every event's left edge. Default: 10.
    pub margin: u32,
    /// Column choice for multi-collision events. Default: last collision.
    pub column_rule: ColumnRule,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_width: DEFAULT_TOTAL_WIDTH,
            margin: DEFAULT_MARGIN,
            column_rule: ColumnRule::default(),
        }
    }
}

impl LayoutConfig {
    /// Set the total width.
    #[must_use]
    pub fn with_total_width(mut self, total_width: u32) -> Self {
        self.total_width = total_width;
        self
    }

    /// Set the left margin.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the column rule.
    #[must_use]
    pub fn with_column_rule(mut self, column_rule: ColumnRule) -> Self {
        self.column_rule = column_rule;
        self
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.total_width == 0 {
            errors.push("total_width must be > 0".into());
        }

        if self.margin.checked_add(self.total_width).is_none() {
            errors.push(format!(
                "margin + total_width overflows u32 ({} + {})",
                self.margin, self.total_width
            ));
        }

        errors
    }

    /// Return `self` if valid, otherwise the collected validation errors.
    pub fn validated(self) -> Result<Self, LayoutConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(LayoutConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "layout-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, LayoutConfigError> {
        toml::from_str::<Self>(s)?.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "layout-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LayoutConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "layout-config")]
    pub fn from_json_str(s: &str) -> Result<Self, LayoutConfigError> {
        serde_json::from_str::<Self>(s)?.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "layout-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LayoutConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Render as a TOML document.
    #[cfg(feature = "layout-config")]
    pub fn to_toml_string(&self) -> Result<String, LayoutConfigError> {
        Ok(toml::to_string(self)?)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a layout configuration.
#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "layout-config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML render error.
    #[cfg(feature = "layout-config")]
    #[error("TOML render error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "layout-config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
