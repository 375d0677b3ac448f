//! # Output Module
//!
//! This module centralizes the user-facing output printed after a run:
//! the list of changed files and the summary line. Everything here respects
//! quiet mode except the changed-file list in check mode, which is kept so
//! scripts can consume it.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::header::RewriteAction;
use crate::logging::{is_quiet, is_verbose};
use crate::processor::normalize_relative_path;
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Nothing to do
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// File needs a header
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header inserted or replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files listed before truncating, outside verbose mode.
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Prints the files that were (or in check mode would be) changed.
pub fn print_changed_files(summary: &RunSummary, root: &Path) {
  let changed: Vec<_> = summary.changed().collect();
  if changed.is_empty() {
    return;
  }

  if is_quiet() {
    // Bare paths, and only when they signal a failed check
    if summary.check_only {
      for report in &changed {
        println!("{}", normalize_relative_path(&report.path, root).display());
      }
    }
    return;
  }

  let count = changed.len();
  let files_word = if count == 1 { "file" } else { "files" };
  let header = if summary.check_only {
    format!(
      "{} {} {} need license header updates:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      count,
      files_word
    )
  } else {
    format!(
      "{} Updated license headers in {} {}:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.green()),
      count,
      files_word
    )
  };
  println!("{header}");

  let limit = if is_verbose() { count } else { DEFAULT_FILE_LIST_LIMIT };
  for report in changed.iter().take(limit) {
    let verb = match report.action {
      RewriteAction::Inserted => "insert",
      RewriteAction::Replaced => "replace",
      RewriteAction::Unchanged => "keep",
    };
    println!("  {:<8}{}", verb, normalize_relative_path(&report.path, root).display());
  }

  if count > limit {
    println!("  ... and {} more (use -v to see all)", count - limit);
  }
}

/// Formats the one-line summary of a run.
pub fn format_summary(summary: &RunSummary) -> String {
  let (inserted, replaced) = if summary.check_only {
    ("to insert", "to replace")
  } else {
    ("inserted", "replaced")
  };

  format!(
    "{} {}, {} {}, {} unchanged, {} skipped in {}ms",
    summary.inserted(),
    inserted,
    summary.replaced(),
    replaced,
    summary.unchanged(),
    summary.skipped.len(),
    summary.elapsed.as_millis()
  )
}

/// Prints the summary line, or a success line when nothing needed changing.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  if !summary.has_changes() {
    println!(
      "{} All files have current license headers",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
    );
  }
  println!("{}", format_summary(summary));

  if summary.check_only && summary.has_changes() {
    println!(
      "{}",
      "Run without --check to apply the changes.".if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
}
