//! # Exclusion Module
//!
//! This module decides which candidate files are left alone. Exclusions are
//! regular expressions matched against a file's path relative to the root,
//! with `/` separators. A pattern only matches at the start of the path, so
//! `\.git/` excludes `.git/hooks/x.js` but not `lib/.git/x.js`; use a leading
//! `.*/` to match anywhere.

use std::path::Path;

use regex::Regex;

use crate::config::ConfigError;

/// Ignore patterns applied unless the built-in list is disabled.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
  // don't touch .git
  r"\.git/",
  // third party
  r"node_modules/xmldom/",
  r"programs/.*/cordova-[0-9.]*\.js$",
  r".*/sencha-touch\.js$",
  r".*/JSLint\.js$",
];

/// A compiled set of exclusion patterns.
///
/// # Examples
///
/// ```rust
/// use licfix::exclusion::ExclusionSet;
///
/// # fn main() -> anyhow::Result<()> {
/// let exclusions = ExclusionSet::new(&[r"node_modules/xmldom/", r".*/JSLint\.js$"])?;
///
/// assert!(exclusions.is_excluded("node_modules/xmldom/dom.js"));
/// assert!(exclusions.is_excluded("tools/lint/JSLint.js"));
/// assert!(!exclusions.is_excluded("lib/odf/OdfContainer.js"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
  patterns: Vec<Regex>,
}

impl ExclusionSet {
  /// Compiles the given patterns.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::InvalidPattern`] for the first pattern that is not
  /// a valid regular expression.
  pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
    let patterns = patterns
      .iter()
      .map(|pattern| {
        let pattern = pattern.as_ref();
        // Anchor at the start only; the pattern decides about the end.
        Regex::new(&format!("^(?:{pattern})")).map_err(|source| ConfigError::InvalidPattern {
          pattern: pattern.to_string(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self { patterns })
  }

  /// The built-in exclusions.
  pub fn with_defaults() -> Result<Self, ConfigError> {
    Self::new(DEFAULT_IGNORE_PATTERNS)
  }

  /// Checks a root-relative path with `/` separators against every pattern.
  pub fn is_excluded(&self, relative_path: &str) -> bool {
    self.patterns.iter().any(|pattern| pattern.is_match(relative_path))
  }

  /// Checks a path below `root`.
  ///
  /// Paths that are not below `root` are matched as given.
  pub fn is_excluded_path(&self, path: &Path, root: &Path) -> bool {
    self.is_excluded(&relative_path_string(path, root))
  }

  pub fn len(&self) -> usize {
    self.patterns.len()
  }

  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}

/// Renders `path` relative to `root` using `/` separators.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
  let relative = path.strip_prefix(root).unwrap_or(path);
  relative.to_string_lossy().replace('\\', "/")
}
