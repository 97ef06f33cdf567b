//! calview configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CalviewError, CalviewResult};

const DEFAULT_VISIBLE_CAP: usize = 3;
const DEFAULT_MODAL_MARGIN: u32 = 10;
const DEFAULT_EXPANDED_ASPECT_RATIO: f64 = 1.8;
const DEFAULT_COMPACT_ASPECT_RATIO: f64 = 1.35;
const DEFAULT_MODAL_WIDTH: u32 = 300;
const DEFAULT_MODAL_HEIGHT: u32 = 200;

fn default_visible_cap() -> usize {
    DEFAULT_VISIBLE_CAP
}

fn default_modal_margin() -> u32 {
    DEFAULT_MODAL_MARGIN
}

fn default_expanded_aspect_ratio() -> f64 {
    DEFAULT_EXPANDED_ASPECT_RATIO
}

fn default_compact_aspect_ratio() -> f64 {
    DEFAULT_COMPACT_ASPECT_RATIO
}

fn default_modal_width() -> u32 {
    DEFAULT_MODAL_WIDTH
}

fn default_modal_height() -> u32 {
    DEFAULT_MODAL_HEIGHT
}

/// Configuration at ~/.config/calview/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalviewConfig {
    /// Events shown per day before the rest collapse into an overflow count.
    #[serde(default = "default_visible_cap")]
    pub visible_cap: usize,

    /// Minimum distance between the event popup and the viewport edges.
    #[serde(default = "default_modal_margin")]
    pub modal_margin: u32,

    #[serde(default = "default_expanded_aspect_ratio")]
    pub expanded_aspect_ratio: f64,

    #[serde(default = "default_compact_aspect_ratio")]
    pub compact_aspect_ratio: f64,

    /// Popup size assumed until the host reports a measured one.
    #[serde(default = "default_modal_width")]
    pub modal_width: u32,

    #[serde(default = "default_modal_height")]
    pub modal_height: u32,
}

impl Default for CalviewConfig {
    fn default() -> Self {
        CalviewConfig {
            visible_cap: DEFAULT_VISIBLE_CAP,
            modal_margin: DEFAULT_MODAL_MARGIN,
            expanded_aspect_ratio: DEFAULT_EXPANDED_ASPECT_RATIO,
            compact_aspect_ratio: DEFAULT_COMPACT_ASPECT_RATIO,
            modal_width: DEFAULT_MODAL_WIDTH,
            modal_height: DEFAULT_MODAL_HEIGHT,
        }
    }
}

impl CalviewConfig {
    pub fn config_path() -> CalviewResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalviewError::Config("Could not determine config directory".into()))?
            .join("calview");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> CalviewResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> CalviewResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CalviewConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> CalviewResult<Self> {
        toml::from_str(content).map_err(|e| CalviewError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalviewResult<()> {
        let contents = format!(
            "\
# calview configuration

# Events shown per day before collapsing into \"+N more\":
# visible_cap = {}

# Minimum gap between the event popup and the window edges:
# modal_margin = {}

# Grid aspect ratio in expanded and compact layouts:
# expanded_aspect_ratio = {}
# compact_aspect_ratio = {}

# Event popup size used for positioning:
# modal_width = {}
# modal_height = {}
",
            DEFAULT_VISIBLE_CAP,
            DEFAULT_MODAL_MARGIN,
            DEFAULT_EXPANDED_ASPECT_RATIO,
            DEFAULT_COMPACT_ASPECT_RATIO,
            DEFAULT_MODAL_WIDTH,
            DEFAULT_MODAL_HEIGHT,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalviewError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalviewError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalviewConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, CalviewConfig::default());
        assert_eq!(config.visible_cap, 3);
        assert_eq!(config.modal_margin, 10);
        assert_eq!(config.expanded_aspect_ratio, 1.8);
        assert_eq!(config.compact_aspect_ratio, 1.35);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let config = CalviewConfig::from_toml("visible_cap = 5\nmodal_margin = 4\n").unwrap();

        assert_eq!(config.visible_cap, 5);
        assert_eq!(config.modal_margin, 4);
        assert_eq!(config.compact_aspect_ratio, 1.35);
        assert_eq!(config.modal_width, 300);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = CalviewConfig::from_toml("visible_cap = \"lots\"");
        assert!(matches!(result, Err(CalviewError::Config(_))));
    }

    #[test]
    fn test_default_config_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        CalviewConfig::create_default_config(&path).unwrap();
        let config = CalviewConfig::load_from(&path).unwrap();

        assert_eq!(config, CalviewConfig::default());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("# visible_cap = 3"));
    }
}
