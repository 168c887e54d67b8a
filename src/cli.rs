//! CLI - Command Line Interface for Jizz
//!
//! No arguments are needed: the config is read from `jizz.yml` in the
//! working directory and everything else happens at the interactive prompt.
//!
//! # Examples
//!
//! ```bash
//! jizz
//! jizz --config ~/.config/jizz.yml --verbose
//! ```

use clap::Parser;
use std::error::Error as _;
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::DEFAULT_CONFIG_PATH;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes, one per failure class (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Normal exit, or interrupted at the search prompt
    Success = 0,
    /// Jackett did not hand out a magnet link
    InvalidMagnet = 1,
    /// Transmission unreachable or credentials rejected
    TorrentClientUnavailable = 2,
    /// Jackett answered something other than 200
    SearchProxyUnavailable = 3,
    /// Config file missing or unparsable
    ConfigLoad = 4,
    /// Transmission refused the torrent
    SubmissionFailed = 5,
    /// Jackett answered with an unusable body
    MalformedResponse = 6,
    /// Terminal read/write failed
    Io = 7,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Jizz - search Jackett, queue in Transmission
#[derive(Parser, Debug)]
#[command(
    name = "jizz",
    version,
    about = "Use Jackett and Transmission together",
    long_about = "Search every Jackett indexer, pick a result, and hand its \
                  magnet link to Transmission.\n\n\
                  Ctrl-C at the search prompt quits.\n\
                  Ctrl-C at the selection prompt, or while waiting on Jackett\n\
                  or Transmission, cancels the current search."
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Debug logging and full error chains
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for fatal errors
pub struct Output {
    pub verbose: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
        }
    }

    /// Print the `[ERROR]` line and return the error's exit code
    pub fn error(&self, err: &AppError) -> ExitCode {
        eprintln!("[ERROR] {}", err);
        if self.verbose {
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
        }
        err.exit_code()
    }
}

// =============================================================================
// Tests
// =============================================================================
