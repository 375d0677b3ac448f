//! # File Collector Module
//!
//! This module walks the root directory, keeps the files with a target
//! extension and splits them into candidates and excluded files.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::exclusion::{ExclusionSet, relative_path_string};

/// Files found under the root, split by the exclusion predicate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
  /// Absolute paths to rewrite, sorted.
  pub candidates: Vec<PathBuf>,
  /// Absolute paths matching an ignore pattern, sorted.
  pub skipped: Vec<PathBuf>,
}

/// File collector for directory traversal and extension matching.
pub struct FileCollector {
  /// Absolute root directory
  root: PathBuf,

  /// Extensions to collect, without the leading dot
  extensions: Vec<String>,
}

impl FileCollector {
  /// Creates a collector for `root`, which is made absolute.
  pub fn new(root: &Path, extensions: Vec<String>) -> Result<Self> {
    Ok(Self {
      root: absolutize_path(root)?,
      extensions,
    })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Checks whether `path` has one of the target extensions.
  pub fn has_target_extension(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(OsStr::to_str)
      .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
  }

  /// Traverses the root recursively and collects the target files.
  ///
  /// Symlinks are not followed. Unreadable directories are reported and
  /// skipped.
  pub fn traverse_directory(&self) -> Vec<PathBuf> {
    debug!("Scanning directory: {}", self.root.display());
    let start_time = std::time::Instant::now();

    let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
      .follow_links(false)
      .into_iter()
      .filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
          warn!("Error reading directory entry: {}", e);
          None
        }
      })
      .filter(|entry| entry.file_type().is_file() && self.has_target_extension(entry.path()))
      .map(walkdir::DirEntry::into_path)
      .collect();
    files.sort();

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    files
  }

  /// Collects the target files and applies the exclusion predicate.
  pub fn select(&self, exclusions: &ExclusionSet) -> Selection {
    let (skipped, candidates): (Vec<PathBuf>, Vec<PathBuf>) = self
      .traverse_directory()
      .into_iter()
      .partition(|path| exclusions.is_excluded(&relative_path_string(path, &self.root)));

    Selection { candidates, skipped }
  }
}

/// Walks `root` for files with one of `extensions` and filters them through
/// `exclusions`.
pub fn select_candidates(root: &Path, extensions: &[String], exclusions: &ExclusionSet) -> Result<Selection> {
  let collector = FileCollector::new(root, extensions.to_vec())?;
  Ok(collector.select(exclusions))
}

/// Converts a potentially relative path to a lexically normalized absolute
/// path.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  let absolute = if path.is_absolute() {
    path.to_path_buf()
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    current_dir.join(path)
  };

  let mut normalized = PathBuf::new();
  for component in absolute.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        normalized.pop();
      }
      other => normalized.push(other.as_os_str()),
    }
  }

  Ok(normalized)
}

/// Normalizes a path to be relative to `base`, for display.
pub fn normalize_relative_path(path: &Path, base: &Path) -> PathBuf {
  if let Ok(stripped) = path.strip_prefix(base) {
    return stripped.to_path_buf();
  }

  pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}
