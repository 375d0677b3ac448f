//! # Diff Module
//!
//! Line diffs between a file's current content and the content licfix would
//! write, for `--show-diff` and `--save-diff`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Renders and records diffs of license header changes.
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Print diffs to stderr.
  pub show_diff: bool,

  /// Append diffs to this file.
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file so a run starts with an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      std::fs::write(path, "").with_context(|| format!("Failed to create diff file: {}", path.display()))?;
    }
    Ok(())
  }

  /// Shows and/or saves the diff between `original` and `new` for `path`.
  ///
  /// Diffs from several files are appended to the same save file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let diff = render_diff(path, original, new);

    if self.show_diff {
      for line in diff.lines() {
        let colored = if line.starts_with('+') {
          line.if_supports_color(Stream::Stderr, |l| l.green()).to_string()
        } else if line.starts_with('-') {
          line.if_supports_color(Stream::Stderr, |l| l.red()).to_string()
        } else {
          line.to_string()
        };
        eprintln!("{colored}");
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(diff.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}

/// Renders a line diff with a `Diff for <path>:` heading.
pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
  let mut rendered = format!("Diff for {}:\n", path.display());

  for change in TextDiff::from_lines(original, new).iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => '-',
      ChangeTag::Insert => '+',
      ChangeTag::Equal => ' ',
    };
    rendered.push(sign);
    rendered.push_str(change.value());
    if change.missing_newline() {
      rendered.push('\n');
    }
  }

  rendered.push('\n');
  rendered
}
