//! Data structures and types for Jizz
//!
//! - **Search**: Jackett search results and the capped, seeder-ordered result set
//! - **Magnet**: validated magnet URIs handed to Transmission

use std::fmt;
use thiserror::Error;

/// Maximum number of results kept from a single search
pub const MAX_RESULTS: usize = 10;

/// Prefix every usable magnet URI starts with
pub const MAGNET_PREFIX: &str = "magnet:";

// =============================================================================
// Search Models (Jackett)
// =============================================================================

/// A single torrent returned by a Jackett search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub seeders: u64,
    pub size_bytes: u64,
    /// Jackett download link, or the magnet URI itself for magnet-only indexers
    pub link: String,
}

impl SearchResult {
    /// Human readable size for display
    pub fn format_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Reasons a selection typed at the prompt cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid selection {0:?}, expected a result number")]
    NotANumber(String),

    #[error("Invalid selection {index}, only {len} result(s) available")]
    OutOfRange { index: usize, len: usize },
}

/// Search results ordered by seeders (descending), at most [`MAX_RESULTS`] long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    results: Vec<SearchResult>,
}

impl ResultSet {
    /// Sort by seeders descending and keep the top entries.
    ///
    /// The sort is stable, so entries with equal seeders keep the indexer's order.
    pub fn from_results(mut results: Vec<SearchResult>) -> Self {
        results.sort_by(|a, b| b.seeders.cmp(&a.seeders));
        results.truncate(MAX_RESULTS);
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.results.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter()
    }

    /// Resolve user input like `"2"` to an entry
    pub fn select(&self, input: &str) -> Result<&SearchResult, SelectionError> {
        let trimmed = input.trim();
        let index: usize = trimmed
            .parse()
            .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

        self.results.get(index).ok_or(SelectionError::OutOfRange {
            index,
            len: self.results.len(),
        })
    }
}

// =============================================================================
// Magnet Models
// =============================================================================

/// A value that was expected to be a magnet URI but is not one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0:?} is not a magnet link")]
pub struct InvalidMagnet(pub String);

/// A URI known to start with `magnet:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetLink(String);

impl MagnetLink {
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidMagnet> {
        let value = value.into();
        if value.starts_with(MAGNET_PREFIX) {
            Ok(Self(value))
        } else {
            Err(InvalidMagnet(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagnetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Formatting
// =============================================================================

const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with base-1024 units, e.g. `1536` -> `"1.50 KB"`.
///
/// The scaled value is always below 1024 in the chosen unit. Zero is `"0B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // 1023.999 KB rounds to 1024.00, which belongs to the next unit
    let mut rounded = (value * 100.0).round() / 100.0;
    if rounded >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        unit += 1;
        rounded = ((value / 1024.0) * 100.0).round() / 100.0;
    }

    format!("{:.2} {}", rounded, SIZE_UNITS[unit])
}

// =============================================================================
// Tests
// =============================================================================
