//! # Report Module
//!
//! Per-file outcomes of a run and the summary built from them.

use std::path::PathBuf;
use std::time::Duration;

use crate::header::RewriteAction;

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  pub path: PathBuf,
  pub action: RewriteAction,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
  /// Candidate files in processing order.
  pub files: Vec<FileReport>,
  /// Files excluded by an ignore pattern.
  pub skipped: Vec<PathBuf>,
  /// Whether files were written or only checked.
  pub check_only: bool,
  pub elapsed: Duration,
}

impl RunSummary {
  fn count(&self, action: RewriteAction) -> usize {
    self.files.iter().filter(|report| report.action == action).count()
  }

  pub fn inserted(&self) -> usize {
    self.count(RewriteAction::Inserted)
  }

  pub fn replaced(&self) -> usize {
    self.count(RewriteAction::Replaced)
  }

  pub fn unchanged(&self) -> usize {
    self.count(RewriteAction::Unchanged)
  }

  /// Files whose content differs from the composed content.
  pub fn changed(&self) -> impl Iterator<Item = &FileReport> {
    self
      .files
      .iter()
      .filter(|report| report.action != RewriteAction::Unchanged)
  }

  pub fn has_changes(&self) -> bool {
    self.changed().next().is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report(path: &str, action: RewriteAction) -> FileReport {
    FileReport {
      path: PathBuf::from(path),
      action,
    }
  }

  #[test]
  fn test_counts() {
    let summary = RunSummary {
      files: vec![
        report("a.js", RewriteAction::Inserted),
        report("b.js", RewriteAction::Replaced),
        report("c.js", RewriteAction::Unchanged),
        report("d.js", RewriteAction::Inserted),
      ],
      skipped: vec![PathBuf::from("e.js")],
      ..RunSummary::default()
    };

    assert_eq!(summary.inserted(), 2);
    assert_eq!(summary.replaced(), 1);
    assert_eq!(summary.unchanged(), 1);
    assert_eq!(summary.changed().count(), 3);
    assert!(summary.has_changes());
  }

  #[test]
  fn test_empty_summary_has_no_changes() {
    let summary = RunSummary {
      files: vec![report("c.js", RewriteAction::Unchanged)],
      ..RunSummary::default()
    };
    assert!(!summary.has_changes());
  }
}
