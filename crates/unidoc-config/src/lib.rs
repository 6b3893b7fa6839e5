//! Configuration management for unidoc.
//!
//! Parses `unidoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Format
//!
//! ```toml
//! [style]
//! italic = "script"
//! strong = "markers"
//! ```
//!
//! Every key is optional. Style selectors are validated when the file is
//! loaded, so a successfully loaded [`Config`] always yields a valid
//! [`RenderConfig`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use unidoc_renderer::{ItalicStyle, RenderConfig, StrongStyle, StyleError};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override italic style.
    pub italic_style: Option<ItalicStyle>,
    /// Override strong style.
    pub strong_style: Option<StrongStyle>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "unidoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style selectors as written in TOML.
    style: StyleConfigRaw,

    /// Resolved render configuration (set after loading).
    #[serde(skip)]
    pub style_resolved: RenderConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw style configuration as parsed from TOML (selectors as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StyleConfigRaw {
    italic: Option<String>,
    strong: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Unrecognized style selector.
    #[error("Configuration error: {0}")]
    Style(#[from] StyleError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `unidoc.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or style validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Render configuration after file values and CLI overrides.
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        self.style_resolved
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(italic) = settings.italic_style {
            self.style_resolved.italic_style = italic;
        }
        if let Some(strong) = settings.strong_style {
            self.style_resolved.strong_style = strong;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_styles()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse style selectors into the resolved render configuration.
    fn resolve_styles(&mut self) -> Result<(), ConfigError> {
        let italic = self
            .style
            .italic
            .as_deref()
            .map(str::parse::<ItalicStyle>)
            .transpose()?
            .unwrap_or_default();
        let strong = self
            .style
            .strong
            .as_deref()
            .map(str::parse::<StrongStyle>)
            .transpose()?
            .unwrap_or_default();

        self.style_resolved = RenderConfig::default()
            .with_italic_style(italic)
            .with_strong_style(strong);
        Ok(())
    }
}
