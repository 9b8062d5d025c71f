// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! Parses the single positional argument, prints the banner, and acts as the
//! one error boundary: every failure becomes one printed line and a non-zero
//! exit status.

use crate::config::{BANNER_RULE_WIDTH, BANNER_TITLE};
use crate::error::{Error, Result};
use crate::icons;
use crate::paths;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Parsed command-line arguments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub source: Option<OsString>,
}

impl Flags {
    /// Extracts flags from `args`. Positional arguments after the first are ignored.
    pub fn from_args(mut args: pico_args::Arguments) -> Self {
        let help = args.contains(["-h", "--help"]);
        Self {
            help,
            source: args.finish().into_iter().next(),
        }
    }
}

/// Usage text shown for `--help` and when the source path is missing.
pub fn usage() -> String {
    format!(
        "Usage: {PROGRAM_NAME} <source-image-path>\n\nExample:\n  {PROGRAM_NAME} ~/Desktop/new-icon.png"
    )
}

/// Resolves the source argument, expanding a leading `~`.
///
/// Arguments that are not valid UTF-8 are used as-is.
pub fn resolve_source(source: OsString) -> PathBuf {
    match source.into_string() {
        Ok(text) => paths::expand_home(&text),
        Err(raw) => PathBuf::from(raw),
    }
}

/// Runs the icon updater for `flags`.
///
/// # Errors
///
/// Returns [`Error::Usage`] before touching the filesystem when no source
/// path was given; otherwise whatever [`icons::create_icons`] reports.
pub fn run(flags: Flags) -> Result<()> {
    if flags.help {
        println!("{}", usage());
        return Ok(());
    }

    let source = flags.source.ok_or_else(|| Error::Usage(usage()))?;
    let source_path = resolve_source(source);

    println!("{BANNER_TITLE}");
    println!("{}", "=".repeat(BANNER_RULE_WIDTH));

    icons::create_icons(&source_path)
}

/// Prints `err` once and converts it into the process exit status.
pub fn report(err: &Error) -> ExitCode {
    match err {
        Error::Usage(text) => println!("{text}"),
        other => println!("✗ Error: {other}"),
    }
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_from(args: &[&str]) -> Flags {
        let args = args.iter().map(OsString::from).collect();
        Flags::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn first_positional_is_the_source() {
        let flags = flags_from(&["logo.png", "ignored.png"]);
        assert!(!flags.help);
        assert_eq!(flags.source, Some(OsString::from("logo.png")));
    }

    #[test]
    fn no_arguments_leaves_source_empty() {
        assert_eq!(flags_from(&[]), Flags::default());
    }

    #[test]
    fn help_flag_is_recognized() {
        assert!(flags_from(&["--help"]).help);
        assert!(flags_from(&["-h"]).help);
    }

    #[test]
    fn missing_source_is_usage_error() {
        match run(Flags::default()) {
            Err(Error::Usage(text)) => assert!(text.starts_with("Usage: ")),
            other => panic!("expected Usage, got {:?}", other),
        }
    }

    #[test]
    fn help_succeeds_without_source() {
        let flags = Flags {
            help: true,
            source: None,
        };
        assert!(run(flags).is_ok());
    }

    #[test]
    fn usage_mentions_example_invocation() {
        let text = usage();
        assert!(text.contains("<source-image-path>"));
        assert!(text.contains("Example:"));
    }

    #[test]
    fn plain_source_is_used_unchanged() {
        assert_eq!(
            resolve_source(OsString::from("assets/logo.png")),
            PathBuf::from("assets/logo.png")
        );
    }
}
