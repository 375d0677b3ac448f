//! # Header Module
//!
//! This module holds the license block conventions and the two pieces that work
//! with them:
//! - [`template`] - Loading the license block out of a template file
//! - [`rewriter`] - Inserting or replacing the license block in a target file
//! - [`copyright`] - The default copyright line written for files without one
//!
//! A license block is the run of lines from the start marker (` * @licstart`)
//! through the end marker (` */`). Markers are compared after trimming
//! trailing whitespace only, so the leading space is significant.
//!
//! Target files are handled as raw bytes. The markers and the copyright
//! prefix are ASCII, so files in any ASCII-compatible encoding are spliced
//! without being decoded.

pub mod copyright;
pub mod rewriter;
pub mod template;

pub use copyright::{CopyrightData, DEFAULT_COPYRIGHT, render_copyright};
pub use rewriter::{HeaderScan, Rewrite, RewriteAction, rewrite, scan};
pub use template::LicenseTemplate;

/// Trimmed content of the first line of a license block.
pub const START_MARKER: &str = " * @licstart";

/// Trimmed content of the last line of a license block.
pub const END_MARKER: &str = " */";

/// Prefix identifying an existing copyright statement. Compared untrimmed.
pub const COPYRIGHT_PREFIX: &str = " * Copyright (C) ";

/// Line opening the comment block when a header is inserted into a file that
/// has none.
pub const OPENING_COMMENT: &str = "/**\n";

/// Errors raised while loading a template or rewriting a file.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HeaderError {
  /// The template contains no start marker line.
  #[error("license template has no '* @licstart' line")]
  EmptyTemplate,

  /// The template starts a license block but never closes it.
  #[error("license template block starting at line {start_line} has no closing '*/' line")]
  UnterminatedTemplate { start_line: usize },

  /// A target file starts a license block but never closes it.
  #[error("license block starting at line {start_line} has no closing '*/' line")]
  MissingEndMarker { start_line: usize },
}

pub(crate) fn is_start_marker(line: &[u8]) -> bool {
  line.trim_ascii_end() == START_MARKER.as_bytes()
}

pub(crate) fn is_end_marker(line: &[u8]) -> bool {
  line.trim_ascii_end() == END_MARKER.as_bytes()
}

pub(crate) fn is_copyright(line: &[u8]) -> bool {
  line.starts_with(COPYRIGHT_PREFIX.as_bytes())
}
