use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::block::InlineStyle;
use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub inline: InlineConfig,
    pub lists: ListsConfig,
    pub code_block: CodeBlockConfig,
}

/// Markdown delimiters written around styled text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    pub bold: String,
    pub italic: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            bold: "__".to_string(),
            italic: "*".to_string(),
        }
    }
}

impl InlineConfig {
    /// Get the delimiter for a style.
    /// Returns None for styles that are not rendered.
    pub fn delimiter(&self, style: &InlineStyle) -> Option<&str> {
        match style {
            InlineStyle::Bold => Some(self.bold.as_str()),
            InlineStyle::Italic => Some(self.italic.as_str()),
            InlineStyle::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    pub bullet: String,
    pub indent: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            bullet: "-".to_string(),
            indent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CodeBlockConfig {
    pub mode: CodeBlockMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockMode {
    /// Write the code text as a plain line.
    #[default]
    Passthrough,
    /// Wrap the code text in a ``` fence.
    Fenced,
}

impl Config {
    /// The settings bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::compiled_default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
