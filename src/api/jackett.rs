//! Jackett search proxy client
//!
//! Health check, search, and magnet resolution against a Jackett
//! `indexers/all/results` endpoint. Jackett hands out its own download
//! links; requesting one answers with a redirect to the magnet URI.

use reqwest::header::{HeaderValue, LOCATION};
use reqwest::{redirect, StatusCode};
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::models::{InvalidMagnet, MagnetLink, ResultSet, SearchResult, MAGNET_PREFIX};

/// Jackett API error types
#[derive(Error, Debug)]
pub enum JackettError {
    #[error("Received {0} from Jackett")]
    Status(u16),

    #[error("Request to Jackett failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response from Jackett: {0}")]
    MalformedResponse(String),
}

/// Magnet resolution error types
#[derive(Error, Debug)]
pub enum MagnetError {
    #[error("Jackett didn't return magnet link: {0}")]
    NotMagnet(#[from] InvalidMagnet),

    #[error("Jackett didn't return magnet link (HTTP {0} without a redirect)")]
    MissingLocation(u16),

    #[error("Jackett didn't return magnet link (Location header is not valid UTF-8)")]
    InvalidLocation,

    #[error("Jackett didn't return magnet link: {0}")]
    Request(#[source] reqwest::Error),
}

/// Jackett search response
#[derive(Debug, Deserialize)]
struct JackettResponse {
    #[serde(rename = "Results")]
    results: Vec<JackettResult>,
}

/// Individual result from Jackett
#[derive(Debug, Deserialize)]
struct JackettResult {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Seeders", default)]
    seeders: Option<u64>,
    #[serde(rename = "Size", default)]
    size: Option<u64>,
    #[serde(rename = "Link", default)]
    link: Option<String>,
    #[serde(rename = "MagnetUri", default)]
    magnet_uri: Option<String>,
}

impl JackettResult {
    /// Convert API response to our SearchResult model.
    ///
    /// Magnet-only indexers leave `Link` empty and fill `MagnetUri`.
    fn into_search_result(self) -> Option<SearchResult> {
        let link = self
            .link
            .filter(|l| !l.is_empty())
            .or(self.magnet_uri.filter(|m| !m.is_empty()))?;

        Some(SearchResult {
            title: self.title,
            seeders: self.seeders.unwrap_or(0),
            size_bytes: self.size.unwrap_or(0),
            link,
        })
    }
}

/// Jackett client
pub struct JackettClient {
    endpoint: String,
    client: reqwest::Client,
    /// Never follows redirects, so the magnet `Location` can be read
    no_redirect: reqwest::Client,
}

impl JackettClient {
    /// Create a client for the configured search endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self, JackettError> {
        Ok(Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::builder().build()?,
            no_redirect: reqwest::Client::builder()
                .redirect(redirect::Policy::none())
                .build()?,
        })
    }

    /// Check the endpoint answers 200 (a wrong API key gets a 4xx)
    pub async fn check(&self) -> Result<(), JackettError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "jackett health check");
        if status != StatusCode::OK {
            return Err(JackettError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Build the search URL: endpoint + `=<query>&_=<timestamp>`
    pub fn search_url(&self, query: &str) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        format!(
            "{}={}&_={}",
            self.endpoint,
            urlencoding::encode(query),
            timestamp
        )
    }

    /// Search all indexers, returning the best seeded results first
    pub async fn search(&self, query: &str) -> Result<ResultSet, JackettError> {
        let url = self.search_url(query);
        tracing::debug!(%query, "searching jackett");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(JackettError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let results = parse_results(&text)?;
        tracing::debug!(count = results.len(), "jackett returned results");

        Ok(ResultSet::from_results(results))
    }

    /// Follow a result's link one hop to get its magnet URI
    pub async fn resolve_magnet(&self, result: &SearchResult) -> Result<MagnetLink, MagnetError> {
        if result.link.starts_with(MAGNET_PREFIX) {
            return Ok(MagnetLink::parse(result.link.as_str())?);
        }

        let response = self
            .no_redirect
            .get(&result.link)
            .send()
            .await
            .map_err(MagnetError::Request)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "jackett link response");

        magnet_from_location(status.as_u16(), response.headers().get(LOCATION))
    }
}

/// Read the magnet URI out of a redirect's `Location` header.
///
/// Magnet display names may carry raw UTF-8, which `HeaderValue::to_str`
/// refuses, so the bytes are decoded directly.
fn magnet_from_location(
    status: u16,
    location: Option<&HeaderValue>,
) -> Result<MagnetLink, MagnetError> {
    let location = location.ok_or(MagnetError::MissingLocation(status))?;
    let location =
        std::str::from_utf8(location.as_bytes()).map_err(|_| MagnetError::InvalidLocation)?;
    Ok(MagnetLink::parse(location)?)
}

/// Parse a Jackett response body into search results.
///
/// Entries with neither a download link nor a magnet URI are skipped.
fn parse_results(body: &str) -> Result<Vec<SearchResult>, JackettError> {
    let data: JackettResponse = serde_json::from_str(body)
        .map_err(|e| JackettError::MalformedResponse(format!("JSON parse error: {}", e)))?;

    Ok(data
        .results
        .into_iter()
        .filter_map(|r| {
            let title = r.title.clone();
            let converted = r.into_search_result();
            if converted.is_none() {
                tracing::warn!(%title, "skipping result without a link");
            }
            converted
        })
        .collect())
}
