//! Jizz - search Jackett, download with Transmission
//!
//! An interactive loop: type a search, pick one of the ten best seeded
//! results, and the magnet link lands in Transmission.
//!
//! # Modules
//!
//! - `config` - YAML config (`jizz.yml`)
//! - `models` - Search results, result sets, magnet links
//! - `api` - Jackett and Transmission clients
//! - `ui` - Result list, splash, interruptible prompts
//! - `app` - Startup checks and the interactive loop
//! - `cli` - Arguments, exit codes, error output

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod models;
pub mod telemetry;
pub mod ui;

// Re-export commonly used types
pub use models::{format_size, MagnetLink, ResultSet, SearchResult};

pub use api::{JackettClient, TorrentSink, TransmissionClient};
pub use app::{App, AppError};
pub use config::Config;
