//! # Fix Command
//!
//! This module implements the only command: insert or replace the license
//! block in every candidate file below the root, or just report what would
//! change with `--check`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::config::{Config, ConfigError, load_config, validate_copyright};
use crate::diff::DiffManager;
use crate::exclusion::{DEFAULT_IGNORE_PATTERNS, ExclusionSet};
use crate::header::{CopyrightData, DEFAULT_COPYRIGHT, LicenseTemplate, render_copyright};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_changed_files, print_summary};
use crate::processor::{Processor, ProcessorConfig, absolutize_path};

/// Template file used when neither the CLI nor the config names one.
pub const DEFAULT_LICENSE_FILE: &str = "LICENSE";

/// Extension processed when neither the CLI nor the config names any.
pub const DEFAULT_EXTENSION: &str = "js";

/// Arguments for the fix command
#[derive(Args, Debug, Default)]
pub struct FixArgs {
  /// Root directory to scan
  #[arg(default_value = ".")]
  pub root: PathBuf,

  /// License template file [default: LICENSE in the root]
  #[arg(long, short = 'f', value_name = "FILE")]
  pub license_file: Option<PathBuf>,

  /// Copyright line written into files that have none ({{year}} is replaced)
  #[arg(long, value_name = "LINE")]
  pub copyright: Option<String>,

  /// Never write a default copyright line
  #[arg(long, conflicts_with = "copyright")]
  pub no_copyright: bool,

  /// Year substituted for {{year}} in the copyright line
  #[arg(long)]
  pub year: Option<String>,

  /// Extensions of the files to process (repeatable) [default: js]
  #[arg(long, short = 'e', value_name = "EXT")]
  pub ext: Vec<String>,

  /// Extra ignore patterns, regular expressions matched from the start of
  /// the root-relative path (repeatable)
  #[arg(long, short = 'i', value_name = "REGEX")]
  pub ignore: Vec<String>,

  /// Do not apply the built-in ignore patterns
  #[arg(long)]
  pub no_default_ignores: bool,

  /// Only report files that would change; exit with 1 if there are any
  #[arg(long)]
  pub check: bool,

  /// Print a diff of every change to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Append a diff of every change to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Path to config file (default: .licfix.toml in the root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Effective settings after layering CLI flags over the config file over the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub license_file: PathBuf,
  pub default_copyright: Option<String>,
  pub extensions: Vec<String>,
  pub ignore_patterns: Vec<String>,
}

impl Settings {
  /// Resolves the settings for a run rooted at `root`.
  ///
  /// A license file given on the command line is taken as is; one from the
  /// config file or the default is relative to the root.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::InvalidCopyright`] if the rendered copyright line
  /// does not start with the copyright prefix.
  pub fn resolve(args: &FixArgs, config: Option<&Config>, root: &Path, year: &str) -> Result<Self, ConfigError> {
    let license_file = match (&args.license_file, config.and_then(|c| c.license_file.as_ref())) {
      (Some(path), _) => path.clone(),
      (None, Some(path)) => root.join(path),
      (None, None) => root.join(DEFAULT_LICENSE_FILE),
    };

    let data = CopyrightData { year: year.to_string() };
    let default_copyright = if args.no_copyright {
      None
    } else {
      let raw = args
        .copyright
        .as_deref()
        .or_else(|| config.and_then(|c| c.copyright.as_deref()))
        .unwrap_or(DEFAULT_COPYRIGHT);
      let rendered = render_copyright(raw, &data);
      validate_copyright(&rendered)?;
      Some(rendered)
    };

    let extensions = if !args.ext.is_empty() {
      args
        .ext
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
    } else if let Some(extensions) = config.and_then(|c| c.extensions.clone()) {
      extensions
    } else {
      vec![DEFAULT_EXTENSION.to_string()]
    };

    let use_defaults = !args.no_default_ignores && config.and_then(|c| c.default_ignores).unwrap_or(true);
    let mut ignore_patterns: Vec<String> = if use_defaults {
      DEFAULT_IGNORE_PATTERNS.iter().map(|p| (*p).to_string()).collect()
    } else {
      Vec::new()
    };
    if let Some(config) = config {
      ignore_patterns.extend(config.ignore.iter().cloned());
    }
    ignore_patterns.extend(args.ignore.iter().cloned());

    Ok(Self {
      license_file,
      default_copyright,
      extensions,
      ignore_patterns,
    })
  }
}

/// Run the fix command with the given arguments.
///
/// Returns `true` when `--check` found files that would change.
pub fn run_fix(args: FixArgs) -> Result<bool> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = absolutize_path(&args.root)?;
  if !root.is_dir() {
    anyhow::bail!("Root is not a directory: {}", root.display());
  }
  debug!("Using root: {}", root.display());

  let config = load_config(args.config.as_deref(), &root, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file");
  }

  let year = args
    .year
    .clone()
    .unwrap_or_else(|| chrono::Local::now().year().to_string());
  let settings = Settings::resolve(&args, config.as_ref(), &root, &year)?;
  debug!("Resolved settings: {:?}", settings);

  let template = LicenseTemplate::load(&settings.license_file)?;
  let exclusions = ExclusionSet::new(&settings.ignore_patterns).context("Failed to compile ignore patterns")?;

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let processor = Processor::new(ProcessorConfig {
    default_copyright: settings.default_copyright,
    extensions: settings.extensions,
    exclusions,
    check_only: args.check,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(root, template)?
  })?;

  let summary = processor.process()?;

  print_changed_files(&summary, processor.root());
  print_summary(&summary);

  Ok(args.check && summary.has_changes())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args() -> FixArgs {
    FixArgs {
      root: PathBuf::from("."),
      ..FixArgs::default()
    }
  }

  #[test]
  fn test_resolve_defaults() {
    let settings = Settings::resolve(&args(), None, Path::new("/w"), "2025").unwrap();

    assert_eq!(settings.license_file, PathBuf::from("/w/LICENSE"));
    assert_eq!(settings.default_copyright.as_deref(), Some(DEFAULT_COPYRIGHT));
    assert_eq!(settings.extensions, vec!["js".to_string()]);
    assert_eq!(settings.ignore_patterns.len(), DEFAULT_IGNORE_PATTERNS.len());
  }

  #[test]
  fn test_resolve_config_over_defaults() {
    let config = Config {
      license_file: Some(PathBuf::from("COPYING")),
      copyright: Some(" * Copyright (C) {{year}} Acme".to_string()),
      extensions: Some(vec!["mjs".to_string()]),
      ignore: vec!["build/".to_string()],
      default_ignores: Some(false),
    };

    let settings = Settings::resolve(&args(), Some(&config), Path::new("/w"), "2025").unwrap();

    assert_eq!(settings.license_file, PathBuf::from("/w/COPYING"));
    assert_eq!(settings.default_copyright.as_deref(), Some(" * Copyright (C) 2025 Acme\n"));
    assert_eq!(settings.extensions, vec!["mjs".to_string()]);
    assert_eq!(settings.ignore_patterns, vec!["build/".to_string()]);
  }

  #[test]
  fn test_resolve_cli_over_config() {
    let config = Config {
      license_file: Some(PathBuf::from("COPYING")),
      extensions: Some(vec!["mjs".to_string()]),
      ignore: vec!["build/".to_string()],
      ..Config::default()
    };
    let cli = FixArgs {
      license_file: Some(PathBuf::from("other/LICENSE")),
      no_copyright: true,
      ext: vec![".js".to_string(), "jsx".to_string()],
      ignore: vec!["dist/".to_string()],
      no_default_ignores: true,
      ..args()
    };

    let settings = Settings::resolve(&cli, Some(&config), Path::new("/w"), "2025").unwrap();

    assert_eq!(settings.license_file, PathBuf::from("other/LICENSE"));
    assert_eq!(settings.default_copyright, None);
    assert_eq!(settings.extensions, vec!["js".to_string(), "jsx".to_string()]);
    assert_eq!(settings.ignore_patterns, vec!["build/".to_string(), "dist/".to_string()]);
  }

  #[test]
  fn test_resolve_rejects_unrecognizable_copyright() {
    for copyright in [" * (c) 2024 Acme", "", "Copyright (C) 2024 Acme"] {
      let cli = FixArgs {
        copyright: Some(copyright.to_string()),
        ..args()
      };
      let err = Settings::resolve(&cli, None, Path::new("/w"), "2025").unwrap_err();
      assert!(matches!(err, ConfigError::InvalidCopyright { .. }), "accepted {copyright:?}");
    }
  }

  #[test]
  fn test_resolved_custom_copyright_is_stable() {
    let cli = FixArgs {
      copyright: Some(" * Copyright (C) {{year}} Acme".to_string()),
      ..args()
    };
    let settings = Settings::resolve(&cli, None, Path::new("/w"), "2024").unwrap();
    let template = LicenseTemplate::parse(" * @licstart\n * BODY\n */\n").unwrap();
    let copyright = settings.default_copyright.as_deref();

    let once = crate::header::rewrite(b"var a;\n", &template, copyright).unwrap();
    let twice = crate::header::rewrite(&once.content, &template, copyright).unwrap();

    assert_eq!(once.content, b"/**\n * Copyright (C) 2024 Acme\n * @licstart\n * BODY\n */\nvar a;\n");
    assert_eq!(twice.content, once.content);
    assert!(!twice.is_changed());
  }
}
