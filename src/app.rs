//! Startup checks and the interactive search loop
//!
//! The loop is a small state machine:
//!
//! ```text
//! Ready -> Searching -> Presenting -> Selecting -> Submitting -> Ready
//! ```
//!
//! Ctrl-C at the search prompt ends the program; Ctrl-C at the selection
//! prompt, or while a request is in flight, only abandons the current
//! search. Every other failure is fatal and carries its own exit code.

use std::io::{self, Write};
use thiserror::Error;

use crate::api::jackett::{JackettClient, JackettError, MagnetError};
use crate::api::transmission::{TorrentSink, TransmissionClient, TransmissionError};
use crate::cli::ExitCode;
use crate::config::{Config, ConfigError};
use crate::models::{MagnetLink, ResultSet};
use crate::ui::{render_results, Prompt, Prompted};

pub const SEARCH_PROMPT: &str = "Search: ";
pub const SELECTION_PROMPT: &str = "Selection [0-9] > ";

// =============================================================================
// Errors
// =============================================================================

/// Fatal errors, one per exit code
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}. API key correct?")]
    SearchProxyUnreachable(#[source] JackettError),

    #[error("Issue fetching Transmission session info. Bad credentials? ({0})")]
    TorrentClientAuth(#[source] TransmissionError),

    #[error("{0}")]
    MagnetResolution(#[from] MagnetError),

    #[error("Couldn't add torrent in Transmission: {0}")]
    TorrentSubmission(#[source] TransmissionError),

    #[error("{0}")]
    MalformedResponse(#[source] JackettError),

    #[error("Couldn't talk to the terminal: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Classify a failed search: a bad body is malformed, anything else
    /// means Jackett itself is not answering properly
    pub fn from_search(err: JackettError) -> Self {
        match err {
            JackettError::MalformedResponse(_) => AppError::MalformedResponse(err),
            _ => AppError::SearchProxyUnreachable(err),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Config(_) => ExitCode::ConfigLoad,
            AppError::SearchProxyUnreachable(_) => ExitCode::SearchProxyUnavailable,
            AppError::TorrentClientAuth(_) => ExitCode::TorrentClientUnavailable,
            AppError::MagnetResolution(_) => ExitCode::InvalidMagnet,
            AppError::TorrentSubmission(_) => ExitCode::SubmissionFailed,
            AppError::MalformedResponse(_) => ExitCode::MalformedResponse,
            AppError::Io(_) => ExitCode::Io,
        }
    }
}

// =============================================================================
// Startup
// =============================================================================

/// Check Jackett, then Transmission. Transmission is not contacted when
/// the Jackett check fails.
pub async fn startup(
    config: &Config,
    out: &mut impl Write,
) -> Result<(JackettClient, TransmissionClient), AppError> {
    let jackett = JackettClient::new(config.jackett.endpoint.as_str())
        .map_err(AppError::SearchProxyUnreachable)?;
    jackett
        .check()
        .await
        .map_err(AppError::SearchProxyUnreachable)?;
    writeln!(out, "[INFO] Got 200 from Jackett")?;

    let transmission = TransmissionClient::connect(&config.transmission)
        .await
        .map_err(AppError::TorrentClientAuth)?;
    writeln!(out, "[INFO] Got session info from Transmission")?;

    Ok((jackett, transmission))
}

// =============================================================================
// Interactive Loop
// =============================================================================

/// Position in the search/select/submit cycle
#[derive(Debug)]
enum LoopState {
    Ready,
    Searching(String),
    Presenting(ResultSet),
    Selecting(ResultSet),
    Submitting(MagnetLink),
    Done,
}

/// Interactive search-and-queue session
pub struct App<P, S, W> {
    jackett: JackettClient,
    sink: S,
    prompt: P,
    out: W,
}

impl<P: Prompt, S: TorrentSink, W: Write> App<P, S, W> {
    pub fn new(jackett: JackettClient, sink: S, prompt: P, out: W) -> Self {
        Self {
            jackett,
            sink,
            prompt,
            out,
        }
    }

    /// Run until interrupted at the search prompt (`Ok`) or a fatal error
    pub async fn run(&mut self) -> Result<(), AppError> {
        let mut state = LoopState::Ready;
        loop {
            state = match state {
                LoopState::Done => return Ok(()),
                other => self.step(other).await?,
            };
        }
    }

    async fn step(&mut self, state: LoopState) -> Result<LoopState, AppError> {
        let next = match state {
            LoopState::Ready => match self.prompt.read_line(SEARCH_PROMPT).await? {
                Prompted::Line(query) => LoopState::Searching(query),
                Prompted::Interrupted => {
                    writeln!(self.out, "\nRatio 0.00")?;
                    LoopState::Done
                }
            },

            LoopState::Searching(query) => {
                let results = tokio::select! {
                    biased;
                    signal = self.prompt.interrupted() => {
                        signal?;
                        return self.cancel();
                    }
                    results = self.jackett.search(&query) => results,
                };
                LoopState::Presenting(results.map_err(AppError::from_search)?)
            }

            LoopState::Presenting(results) => {
                write!(self.out, "{}", render_results(&results))?;
                LoopState::Selecting(results)
            }

            LoopState::Selecting(results) => {
                let pick = match self.prompt.read_line(SELECTION_PROMPT).await? {
                    Prompted::Line(pick) => pick,
                    Prompted::Interrupted => return self.cancel(),
                };

                match results.select(&pick) {
                    Ok(result) => {
                        tracing::debug!(title = %result.title, "resolving magnet");
                        let magnet = tokio::select! {
                            biased;
                            signal = self.prompt.interrupted() => {
                                signal?;
                                return self.cancel();
                            }
                            magnet = self.jackett.resolve_magnet(result) => magnet,
                        };
                        LoopState::Submitting(magnet?)
                    }
                    Err(e) => {
                        writeln!(self.out, "[ERROR] {}", e)?;
                        LoopState::Ready
                    }
                }
            }

            LoopState::Submitting(magnet) => {
                let added = tokio::select! {
                    biased;
                    signal = self.prompt.interrupted() => {
                        signal?;
                        return self.cancel();
                    }
                    added = self.sink.add_magnet(&magnet) => added,
                };
                added.map_err(AppError::TorrentSubmission)?;
                writeln!(self.out, "Torrent added to Transmission")?;
                LoopState::Ready
            }

            LoopState::Done => LoopState::Done,
        };
        Ok(next)
    }

    /// Abandon the current search and go back to the search prompt
    fn cancel(&mut self) -> Result<LoopState, AppError> {
        writeln!(self.out, "\nCancelled.")?;
        Ok(LoopState::Ready)
    }
}
