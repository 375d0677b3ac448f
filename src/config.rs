//! # Configuration Module
//!
//! This module provides configuration support for licfix, letting a project
//! pin its license file, default copyright, target extensions and ignore
//! patterns instead of repeating them on the command line.
//!
//! Configuration can be specified in a `.licfix.toml` file or via the
//! `LICFIX_CONFIG` environment variable:
//!
//! ```toml
//! license-file = "LICENSE"
//! copyright = " * Copyright (C) {{year}} KO GmbH <copyright@kogmbh.com>"
//! extensions = ["js"]
//! ignore = ["lib/3rdparty/"]
//! default-ignores = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::exclusion::ExclusionSet;
use crate::header::COPYRIGHT_PREFIX;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".licfix.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LICFIX_CONFIG";

/// Main configuration struct for licfix.
///
/// Every field is optional; unset fields fall back to command-line flags and
/// then to built-in defaults.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  /// License template path, relative to the root unless absolute.
  #[serde(default)]
  pub license_file: Option<PathBuf>,

  /// Default copyright line. `{{year}}` is replaced with the current year.
  #[serde(default)]
  pub copyright: Option<String>,

  /// Extensions of the files to process, without the leading dot.
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  /// Extra ignore patterns (regular expressions on root-relative paths).
  #[serde(default)]
  pub ignore: Vec<String>,

  /// Whether the built-in ignore patterns apply.
  #[serde(default)]
  pub default_ignores: Option<bool>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An ignore pattern is not a valid regular expression.
  #[error("Invalid ignore pattern '{pattern}': {source}")]
  InvalidPattern { pattern: String, source: regex::Error },

  /// An extension entry is malformed.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },

  /// A copyright line would not be recognized as present on the next run.
  #[error("Invalid copyright {copyright:?}: must start with \" * Copyright (C) \"")]
  InvalidCopyright { copyright: String },
}

/// Checks that a copyright line starts with the copyright prefix.
///
/// The rewriter only skips the default copyright for files that already have
/// such a line, so any other line would be added again on every run.
pub fn validate_copyright(copyright: &str) -> Result<(), ConfigError> {
  if copyright.starts_with(COPYRIGHT_PREFIX) {
    Ok(())
  } else {
    Err(ConfigError::InvalidCopyright {
      copyright: copyright.to_string(),
    })
  }
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    verbose_log!("Loaded {} extra ignore patterns", config.ignore.len());

    Ok(config)
  }

  /// Checks the extensions, the copyright line and the ignore patterns.
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(copyright) = &self.copyright {
      validate_copyright(copyright)?;
    }

    for ext in self.extensions.iter().flatten() {
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
      if ext.is_empty() {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension cannot be empty".to_string(),
        });
      }
    }

    ExclusionSet::new(&self.ignore)?;

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `LICFIX_CONFIG` environment variable
/// 3. `.licfix.toml` in the root directory
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `None` when discovery is disabled or no file is found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
