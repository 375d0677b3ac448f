#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;

/// License file shaped like a real project's `LICENSE`: text around the block
/// that must not be copied.
pub const LICENSE_FILE: &str = "\
/**
 * Copyright (C) 2013 KO GmbH <copyright@kogmbh.com>
 *
 * @licstart
 * This file is part of WebODF.
 *
 * WebODF is free software: you can redistribute it and/or modify it
 * under the terms of the GNU Affero General Public License (GNU AGPL).
 * @licend
 */

Full license text follows.
";

/// The block `LICENSE_FILE` yields.
pub const LICENSE_BLOCK: &str = "\
 * @licstart
 * This file is part of WebODF.
 *
 * WebODF is free software: you can redistribute it and/or modify it
 * under the terms of the GNU Affero General Public License (GNU AGPL).
 * @licend
 */
";

pub const DEFAULT_COPYRIGHT: &str = " * Copyright (C) 2012 KO GmbH <copyright@kogmbh.com>\n\n";

/// Writes `content` to `relative` below `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  Ok(fs::read_to_string(root.join(relative))?)
}

/// Creates a small project with a `LICENSE` and a mix of files.
pub fn setup_project(root: &Path) -> Result<()> {
  write_file(root, "LICENSE", LICENSE_FILE)?;
  write_file(root, "lib/plain.js", "var a = 1;\n")?;
  write_file(
    root,
    "lib/old.js",
    "/**\n * Copyright (C) 2011 Y\n *\n * @licstart\n * Old license text.\n */\n\nvar b = 2;\n",
  )?;
  write_file(root, "lib/notes.txt", "not a source file\n")?;
  write_file(root, "node_modules/xmldom/dom.js", "var dom;\n")?;
  write_file(root, "tools/JSLint.js", "var lint;\n")?;
  Ok(())
}
