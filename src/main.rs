//! # licfix
//!
//! Inserts or refreshes the standard license block in every source file of a
//! project tree.

use std::process::ExitCode;

use licfix::cli::{Cli, run_fix};

fn main() -> ExitCode {
  let cli = Cli::parse_args();

  match run_fix(cli.fix_args) {
    Ok(false) => ExitCode::SUCCESS,
    // --check found files that need changes
    Ok(true) => ExitCode::FAILURE,
    Err(e) => {
      eprintln!("ERROR: {e:#}");
      ExitCode::FAILURE
    }
  }
}
