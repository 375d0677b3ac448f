//! # Logging Module
//!
//! This module provides logging utilities for the licfix tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Plain info logging for machine-readable lines
//! - Structured diagnostics through `tracing`
//!
//! Verbose logs go to stderr and info logs go to stdout, so the `skipping:`
//! lines and the run summary can be piped on their own.
//!
//! ## Example
//!
//! ```rust
//! use licfix::logging::{ColorMode, set_verbose};
//! use licfix::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Processing file: {}", "lib/runtime.js");
//!
//! // Goes to stdout
//! info_log!("skipping: {}", "node_modules/xmldom/dom.js");
//! ```

mod modes;

pub use modes::{ColorMode, default_filter, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// Uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info line to stdout.
///
/// Never colored, whatever the color mode, so the lines stay parseable.
/// Used by the [`info_log!`] macro.
pub fn print_info_log(message: &str) {
  println!("{message}");
}
