//! # Processor Module
//!
//! This module drives a run: it selects the candidate files under the root
//! and rewrites their license headers one file at a time.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and exclusion
//!
//! Files are handled strictly in sequence. Each file is read, rewritten and
//! written back before the next one is opened, and the first error stops the
//! run.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
pub use file_collector::{FileCollector, Selection, absolutize_path, normalize_relative_path, select_candidates};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::config::ConfigError;
use crate::diff::DiffManager;
use crate::exclusion::ExclusionSet;
use crate::header::{DEFAULT_COPYRIGHT, LicenseTemplate, RewriteAction, rewrite};
use crate::info_log;
use crate::report::{FileReport, RunSummary};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Directory to scan
  pub root: PathBuf,
  /// License block written into every file
  pub template: LicenseTemplate,
  /// Copyright written for files without one; `None` disables it
  pub default_copyright: Option<String>,
  /// Extensions of the files to process
  pub extensions: Vec<String>,
  /// Paths left alone
  pub exclusions: ExclusionSet,
  /// Report what would change without writing
  pub check_only: bool,
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a config with the built-in copyright, extensions and ignore
  /// patterns.
  ///
  /// # Errors
  ///
  /// Returns an error if the built-in ignore patterns fail to compile.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(root, template)?
  /// }
  /// ```
  pub fn new(root: PathBuf, template: LicenseTemplate) -> Result<Self, ConfigError> {
    Ok(Self {
      root,
      template,
      default_copyright: Some(DEFAULT_COPYRIGHT.to_string()),
      extensions: vec!["js".to_string()],
      exclusions: ExclusionSet::with_defaults()?,
      check_only: false,
      diff_manager: None,
    })
  }
}

/// Processor for applying the license block to files.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
///
/// use licfix::header::LicenseTemplate;
/// use licfix::processor::{Processor, ProcessorConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// let template = LicenseTemplate::load("LICENSE".as_ref())?;
/// let processor = Processor::new(ProcessorConfig::new(PathBuf::from("."), template)?)?;
///
/// let summary = processor.process()?;
/// println!("{} files updated", summary.changed().count());
/// # Ok(())
/// # }
/// ```
pub struct Processor {
  template: LicenseTemplate,
  default_copyright: Option<String>,
  exclusions: ExclusionSet,
  check_only: bool,
  diff_manager: DiffManager,
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the root cannot be made absolute.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let file_collector = FileCollector::new(&config.root, config.extensions)?;

    Ok(Self {
      template: config.template,
      default_copyright: config.default_copyright,
      exclusions: config.exclusions,
      check_only: config.check_only,
      diff_manager: config.diff_manager.unwrap_or_default(),
      file_collector,
    })
  }

  /// Absolute root directory of the run.
  pub fn root(&self) -> &Path {
    self.file_collector.root()
  }

  /// Finds the candidate files without touching them.
  pub fn select(&self) -> Selection {
    self.file_collector.select(&self.exclusions)
  }

  /// Selects the candidate files, reports the excluded ones and rewrites the
  /// rest.
  ///
  /// # Errors
  ///
  /// Stops at the first file that cannot be read, rewritten or written.
  /// Files handled before it keep their new content.
  pub fn process(&self) -> Result<RunSummary> {
    let selection = self.select();

    for path in &selection.skipped {
      info_log!("skipping: {}", path.display());
    }

    let mut summary = self.process_files(&selection.candidates)?;
    summary.skipped = selection.skipped;
    Ok(summary)
  }

  /// Rewrites the given files in order.
  pub fn process_files(&self, files: &[PathBuf]) -> Result<RunSummary> {
    debug!("Processing {} files", files.len());
    let start_time = Instant::now();

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
      let action = self.process_file(path)?;
      reports.push(FileReport {
        path: path.clone(),
        action,
      });
    }

    debug!(
      "Processed {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(RunSummary {
      files: reports,
      skipped: Vec::new(),
      check_only: self.check_only,
      elapsed: start_time.elapsed(),
    })
  }

  /// Rewrites the license header of a single file.
  ///
  /// The file is only written when its content changes, and never in
  /// check-only mode.
  pub fn process_file(&self, path: &Path) -> Result<RewriteAction> {
    let content = FileIO::read_content(path)?;

    let result = rewrite(&content, &self.template, self.default_copyright.as_deref())
      .with_context(|| format!("Failed to update license header in {}", path.display()))?;

    trace!("{}: {:?}", path.display(), result.action);

    if !result.is_changed() {
      return Ok(result.action);
    }

    if self.diff_manager.is_enabled() {
      self.diff_manager.display_diff(
        path,
        &String::from_utf8_lossy(&content),
        &String::from_utf8_lossy(&result.content),
      )?;
    }

    if !self.check_only {
      FileIO::write_content(path, &result.content)?;
    }

    Ok(result.action)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  const COPYRIGHT: &str = " * Copyright (C) 2012 X\n\n";

  fn template() -> LicenseTemplate {
    LicenseTemplate::from_lines([" * @licstart\n", " * LICENSE BODY\n", " */\n"]).unwrap()
  }

  fn processor(root: &Path, check_only: bool) -> Processor {
    Processor::new(ProcessorConfig {
      default_copyright: Some(COPYRIGHT.to_string()),
      check_only,
      ..ProcessorConfig::new(root.to_path_buf(), template()).unwrap()
    })
    .unwrap()
  }

  #[test]
  fn test_process_file_inserts_header() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("a.js");
    fs::write(&path, "var a = 1;\n")?;

    let action = processor(temp_dir.path(), false).process_file(&path)?;

    assert_eq!(action, RewriteAction::Inserted);
    assert_eq!(
      fs::read_to_string(&path)?,
      "/**\n * Copyright (C) 2012 X\n\n * @licstart\n * LICENSE BODY\n */\nvar a = 1;\n"
    );
    Ok(())
  }

  #[test]
  fn test_check_only_does_not_write() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("a.js");
    fs::write(&path, "var a = 1;\n")?;

    let action = processor(temp_dir.path(), true).process_file(&path)?;

    assert_eq!(action, RewriteAction::Inserted);
    assert_eq!(fs::read_to_string(&path)?, "var a = 1;\n");
    Ok(())
  }

  #[test]
  fn test_unterminated_header_leaves_file_untouched() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("broken.js");
    let original = "/**\n * @licstart\n * never closed\nvar a;\n";
    fs::write(&path, original)?;

    let err = processor(temp_dir.path(), false).process_file(&path).unwrap_err();

    assert!(err.to_string().contains("broken.js"));
    assert_eq!(fs::read_to_string(&path)?, original);
    Ok(())
  }

  #[test]
  fn test_process_skips_excluded_files() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("lib"))?;
    fs::create_dir_all(root.join("node_modules/xmldom"))?;
    fs::write(root.join("lib/a.js"), "var a;\n")?;
    fs::write(root.join("node_modules/xmldom/dom.js"), "var dom;\n")?;

    let summary = processor(root, false).process()?;

    assert_eq!(summary.inserted(), 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].ends_with("node_modules/xmldom/dom.js"));
    assert_eq!(fs::read_to_string(root.join("node_modules/xmldom/dom.js"))?, "var dom;\n");
    Ok(())
  }

  #[test]
  fn test_process_stops_at_first_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::write(root.join("a.js"), "/**\n * @licstart\nvar a;\n")?;
    fs::write(root.join("b.js"), "var b;\n")?;

    assert!(processor(root, false).process().is_err());
    // a.js sorts first, so b.js is never reached
    assert_eq!(fs::read_to_string(root.join("b.js"))?, "var b;\n");
    Ok(())
  }

  #[test]
  fn test_default_config_carries_builtin_exclusions() -> Result<()> {
    let config = ProcessorConfig::new(PathBuf::from("/w"), template())?;
    assert_eq!(config.exclusions.len(), crate::exclusion::DEFAULT_IGNORE_PATTERNS.len());
    assert!(config.exclusions.is_excluded("node_modules/xmldom/dom.js"));
    Ok(())
  }

  #[test]
  fn test_process_handles_non_utf8_files() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::write(root.join("a.js"), b"// caf\xe9\nvar a;\n")?;
    fs::write(root.join("b.js"), "var b;\n")?;

    let summary = processor(root, false).process()?;

    assert_eq!(summary.inserted(), 2);
    assert_eq!(
      fs::read(root.join("a.js"))?,
      b"/**\n * Copyright (C) 2012 X\n\n * @licstart\n * LICENSE BODY\n */\n// caf\xe9\nvar a;\n"
    );
    assert!(fs::read_to_string(root.join("b.js"))?.ends_with(" */\nvar b;\n"));
    Ok(())
  }

  #[test]
  fn test_empty_file_is_not_written() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("empty.js");
    fs::write(&path, "")?;

    let action = processor(temp_dir.path(), false).process_file(&path)?;

    assert_eq!(action, RewriteAction::Unchanged);
    assert!(fs::read(&path)?.is_empty());
    Ok(())
  }
}
