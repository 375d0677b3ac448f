//! Default copyright line handling.

/// Copyright written in front of the license block of files that have none.
/// The trailing blank line separates it from the block.
pub const DEFAULT_COPYRIGHT: &str = " * Copyright (C) 2012 KO GmbH <copyright@kogmbh.com>\n\n";

/// Data used to fill out a configured copyright line.
#[derive(Debug, Clone)]
pub struct CopyrightData {
  /// The year substituted for `{{year}}`.
  pub year: String,
}

/// Renders a configured copyright line.
///
/// Replaces `{{year}}` and makes sure the result ends with a newline so the
/// license block starts on its own line.
pub fn render_copyright(raw: &str, data: &CopyrightData) -> String {
  let mut rendered = raw.replace("{{year}}", &data.year);
  if !rendered.ends_with('\n') {
    rendered.push('\n');
  }
  rendered
}

#[cfg(test)]
mod tests {
  use super::*;

  fn data() -> CopyrightData {
    CopyrightData {
      year: "2025".to_string(),
    }
  }

  #[test]
  fn test_render_year() {
    assert_eq!(
      render_copyright(" * Copyright (C) {{year}} Acme", &data()),
      " * Copyright (C) 2025 Acme\n"
    );
  }

  #[test]
  fn test_render_keeps_existing_newlines() {
    assert_eq!(render_copyright(DEFAULT_COPYRIGHT, &data()), DEFAULT_COPYRIGHT);
  }
}
