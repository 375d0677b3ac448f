//! # licfix
//!
//! A tool that makes every source file in a project tree carry the project's
//! standard license block.
//!
//! The license block is the run of lines from ` * @licstart` through ` */`,
//! taken verbatim from a template file (usually `LICENSE`). For each target
//! file licfix either prepends a fresh `/**` comment holding the block, or
//! replaces the block the file already has. Files without a
//! ` * Copyright (C) ` line also get a default copyright line in front of the
//! block. Running it twice changes nothing the second time.
//!
//! ## Usage as a Library
//!
//! ```rust
//! use licfix::header::{LicenseTemplate, RewriteAction, rewrite};
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = LicenseTemplate::parse(" * @licstart\n * LICENSE BODY\n */\n")?;
//!
//! let result = rewrite(b"var a = 1;\n", &template, Some(" * Copyright (C) 2012 X\n\n"))?;
//! assert_eq!(result.action, RewriteAction::Inserted);
//! assert_eq!(
//!   result.content,
//!   b"/**\n * Copyright (C) 2012 X\n\n * @licstart\n * LICENSE BODY\n */\nvar a = 1;\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - License block loading and rewriting
//! * [`processor`] - Candidate selection and per-file processing
//! * [`exclusion`] - Ignore patterns
//! * [`logging`] - Logging utilities for verbose output

pub mod cli;
pub mod config;
pub mod diff;
pub mod exclusion;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
