//! # Header Rewriter
//!
//! Composes the new content of a target file from its current content, the
//! license template and an optional default copyright line.
//!
//! The rewrite is a single forward pass driven by a small state machine:
//!
//! ```text
//! AwaitingHeader --(no header in file: prepend)--------------------> Passthrough
//! AwaitingHeader --(start marker: emit template)--> ReplacingHeader --(end marker)--> Passthrough
//! ```
//!
//! The prepend happens before the first line, so a file with no lines at all
//! stays empty. Running out of input while still in `ReplacingHeader` is an
//! error; the file is left untouched rather than truncated.
//!
//! Content is handled as bytes and never decoded.

use super::{HeaderError, LicenseTemplate, OPENING_COMMENT, is_copyright, is_end_marker, is_start_marker};

/// What a single scan of a file found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderScan {
  /// Some line is a start marker.
  pub has_header: bool,
  /// Some line, anywhere in the file, starts with the copyright prefix.
  pub has_copyright: bool,
}

/// Classifies a file by scanning all of its lines once.
pub fn scan(content: &[u8]) -> HeaderScan {
  lines(content).fold(HeaderScan::default(), |scan, line| HeaderScan {
    has_header: scan.has_header || is_start_marker(line),
    has_copyright: scan.has_copyright || is_copyright(line),
  })
}

/// How the rewrite changed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteAction {
  /// The file had no license block; one was prepended.
  Inserted,
  /// An existing license block was replaced with different content.
  Replaced,
  /// The file already carries the current license block.
  Unchanged,
}

/// The composed file content and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  pub content: Vec<u8>,
  pub action: RewriteAction,
}

impl Rewrite {
  pub const fn is_changed(&self) -> bool {
    !matches!(self.action, RewriteAction::Unchanged)
  }
}

#[derive(Debug, Clone, Copy)]
enum State {
  AwaitingHeader,
  ReplacingHeader { start_line: usize },
  Passthrough,
}

/// Inserts or replaces the license block in `content`.
///
/// `default_copyright` is written in front of the template unless the file
/// already contains a copyright statement. It should start with
/// [`COPYRIGHT_PREFIX`](super::COPYRIGHT_PREFIX), otherwise the next run
/// does not see it and adds it again. Only the first license block is
/// replaced; lines outside it are kept byte for byte.
///
/// # Errors
///
/// Returns [`HeaderError::MissingEndMarker`] if the file opens a license
/// block that is never closed.
pub fn rewrite(
  content: &[u8],
  template: &LicenseTemplate,
  default_copyright: Option<&str>,
) -> Result<Rewrite, HeaderError> {
  let found = scan(content);
  let copyright = if found.has_copyright { None } else { default_copyright };

  let header_len = OPENING_COMMENT.len()
    + copyright.map_or(0, str::len)
    + template.lines().iter().map(String::len).sum::<usize>();
  let mut output = Vec::with_capacity(content.len() + header_len);

  let mut state = State::AwaitingHeader;
  if !found.has_header && !content.is_empty() {
    output.extend_from_slice(OPENING_COMMENT.as_bytes());
    write_header(&mut output, template, copyright);
    state = State::Passthrough;
  }

  for (index, line) in lines(content).enumerate() {
    state = match state {
      State::AwaitingHeader if is_start_marker(line) => {
        write_header(&mut output, template, copyright);
        State::ReplacingHeader { start_line: index + 1 }
      }
      State::ReplacingHeader { .. } if is_end_marker(line) => State::Passthrough,
      State::ReplacingHeader { start_line } => State::ReplacingHeader { start_line },
      State::AwaitingHeader | State::Passthrough => {
        output.extend_from_slice(line);
        state
      }
    };
  }

  if let State::ReplacingHeader { start_line } = state {
    return Err(HeaderError::MissingEndMarker { start_line });
  }

  let action = if output == content {
    RewriteAction::Unchanged
  } else if found.has_header {
    RewriteAction::Replaced
  } else {
    RewriteAction::Inserted
  };

  Ok(Rewrite { content: output, action })
}

/// Lines of `content`, each with its `\n` terminator if it has one.
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
  content.split_inclusive(|byte| *byte == b'\n')
}

fn write_header(output: &mut Vec<u8>, template: &LicenseTemplate, copyright: Option<&str>) {
  if let Some(copyright) = copyright {
    output.extend_from_slice(copyright.as_bytes());
  }
  for line in template.lines() {
    output.extend_from_slice(line.as_bytes());
  }
}
