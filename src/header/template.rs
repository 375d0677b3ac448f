//! # License Template
//!
//! Extracts the license block from a template file (usually the project's
//! `LICENSE`). The block is reused verbatim for every target file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::{HeaderError, is_end_marker, is_start_marker};

/// The license block lines, from the start marker through the end marker.
///
/// Each line keeps its terminator, so joining the lines reproduces the block
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTemplate {
  lines: Vec<String>,
}

impl LicenseTemplate {
  /// Reads the license block out of the file at `path`.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or does not contain a
  /// complete license block.
  pub fn load(path: &Path) -> Result<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read license template: {}", path.display()))?;

    let template = Self::parse(&content).with_context(|| format!("Invalid license template: {}", path.display()))?;

    debug!("Loaded {} license lines from {}", template.len(), path.display());

    Ok(template)
  }

  /// Extracts the license block from template text.
  ///
  /// Collection starts at the first start marker line and stops after the
  /// first end marker line that follows it. Everything outside is ignored.
  pub fn parse(content: &str) -> Result<Self, HeaderError> {
    let mut lines = Vec::new();
    let mut start_line = None;

    for (index, line) in content.split_inclusive('\n').enumerate() {
      if start_line.is_none() && is_start_marker(line.as_bytes()) {
        start_line = Some(index + 1);
      }

      if start_line.is_some() {
        lines.push(line.to_string());
        // The start marker never matches the end marker, so this can't close
        // the block on its first line.
        if is_end_marker(line.as_bytes()) {
          if let Some(last) = lines.last_mut()
            && !last.ends_with('\n')
          {
            last.push('\n');
          }
          return Ok(Self { lines });
        }
      }
    }

    match start_line {
      None => Err(HeaderError::EmptyTemplate),
      Some(start_line) => Err(HeaderError::UnterminatedTemplate { start_line }),
    }
  }

  /// Builds a template from already extracted lines.
  ///
  /// The lines must form a complete block: the first is a start marker and
  /// the last is an end marker.
  pub fn from_lines<I, S>(lines: I) -> Result<Self, HeaderError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
    Self::parse(&lines.concat())
  }

  /// The block lines, each with its line terminator.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}
