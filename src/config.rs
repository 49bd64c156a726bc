use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// JavaScript/TypeScript and Python keywords combined.
const DEFAULT_KEYWORDS: &[&str] = &[
    // JavaScript/TypeScript
    "const", "let", "var", "function", "return", "if", "else", "for", "while", "do", "switch",
    "case", "break", "continue", "new", "this", "class", "extends", "import", "export", "from",
    "default", "async", "await", "try", "catch", "finally", "throw", "typeof", "instanceof", "in",
    "of", "true", "false", "null", "undefined",
    // Python
    "def", "elif", "except", "with", "as", "yield", "lambda", "and", "or", "not", "True",
    "False", "None", "pass", "raise", "global", "nonlocal",
];

const DEFAULT_BULLETS: &[&str] = &["•", "◦", "▪", "▫"];

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub highlight: HighlightConfig,
    pub list: ListConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Identifiers classified as keywords. Replaces the built-in set when given.
    pub keywords: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListConfig {
    /// Bullet glyphs for unordered lists. Lists are flat, so only the first
    /// is shown; the rest are accepted for themes that list several.
    pub bullets: Vec<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            bullets: DEFAULT_BULLETS.iter().map(|b| b.to_string()).collect(),
        }
    }
}

impl ListConfig {
    /// Bullet glyph for unordered list items.
    pub fn bullet(&self) -> &str {
        self.bullets
            .first()
            .map_or(DEFAULT_BULLETS[0], String::as_str)
    }
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Like [`Config::load`], but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }
}
