//! # File I/O Module
//!
//! Whole-file reads and writes for the processor. Each call opens and closes
//! its own handle, so nothing stays open between files or on error paths.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete file as raw bytes, whatever its encoding.
  pub fn read_content(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replaces the complete file content.
  pub fn write_content(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
