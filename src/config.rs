//! Rendering options for the combinator.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! placeholder = "numbered"   # "question" (default) or "numbered"
//! not_equal = "ansi"         # "bang" (default, !=) or "ansi" (<>)
//! empty_list = "reject"      # "false_predicate" (default) or "reject"
//! max_depth = 64
//! ```

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::error::ConfigError;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "QAIL_WHERE_CONFIG";

/// Default nesting limit for groups.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How placeholders are written into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` (MySQL, SQLite, GORM)
    #[default]
    Question,
    /// `$1`, `$2`, ... (Postgres)
    Numbered,
}

impl PlaceholderStyle {
    /// Placeholder for the 1-based parameter `index`.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Numbered => format!("${}", index),
        }
    }
}

/// Spelling of the not-equal operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotEqualStyle {
    /// `!=`
    #[default]
    Bang,
    /// `<>`
    Ansi,
}

/// What to emit for `IN ()` / `NOT IN ()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyListPolicy {
    /// `IN ()` becomes `1 = 0`, `NOT IN ()` becomes `1 = 1`.
    #[default]
    FalsePredicate,
    /// Fail with [`CombineError::EmptyList`](crate::error::CombineError::EmptyList).
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub placeholder: PlaceholderStyle,
    pub not_equal: NotEqualStyle,
    pub empty_list: EmptyListPolicy,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderStyle::default(),
            not_equal: NotEqualStyle::default(),
            empty_list: EmptyListPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a config file from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Locate and load the user's config.
    ///
    /// Order: `$QAIL_WHERE_CONFIG`, then `<config dir>/qail-where/config.toml`.
    /// Falls back to defaults when neither exists.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(PathBuf::from(path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qail-where").join("config.toml"))
    }
}
