//! Transmission RPC client
//!
//! Validates the session at startup and queues magnet links.
//! The RPC handshake (`X-Transmission-Session-Id`) is handled by `transmission-rpc`.

use thiserror::Error;
use transmission_rpc::types::{BasicAuth, TorrentAddArgs};
use transmission_rpc::TransClient;
use url::Url;

use crate::config::TransmissionConfig;
use crate::models::MagnetLink;

/// Path Transmission serves RPC on unless configured otherwise
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";

/// Transmission RPC error types
#[derive(Error, Debug)]
pub enum TransmissionError {
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("Transmission answered {0:?}")]
    Rejected(String),
}

/// Anything that can queue a magnet link for download
#[allow(async_fn_in_trait)]
pub trait TorrentSink {
    async fn add_magnet(&mut self, magnet: &MagnetLink) -> Result<(), TransmissionError>;
}

/// Transmission client holding the one RPC session used for the whole run
pub struct TransmissionClient {
    url: Url,
    client: TransClient,
}

impl TransmissionClient {
    /// Connect and fetch session info to prove the endpoint and credentials work
    pub async fn connect(config: &TransmissionConfig) -> Result<Self, TransmissionError> {
        let url = rpc_url(&config.endpoint)?;

        let client = match config.credentials() {
            Some((user, password)) => {
                TransClient::with_auth(url.clone(), BasicAuth { user, password })
            }
            None => TransClient::new(url.clone()),
        };

        let mut this = Self { url, client };
        this.session_check().await?;
        Ok(this)
    }

    async fn session_check(&mut self) -> Result<(), TransmissionError> {
        let response = self
            .client
            .session_get()
            .await
            .map_err(|e| TransmissionError::Rpc(e.to_string()))?;

        tracing::debug!(url = %self.url, result = %response.result, "transmission session-get");
        if !response.is_ok() {
            return Err(TransmissionError::Rejected(response.result));
        }
        Ok(())
    }
}

impl TorrentSink for TransmissionClient {
    async fn add_magnet(&mut self, magnet: &MagnetLink) -> Result<(), TransmissionError> {
        let add = TorrentAddArgs {
            filename: Some(magnet.to_string()),
            ..TorrentAddArgs::default()
        };

        let response = self
            .client
            .torrent_add(add)
            .await
            .map_err(|e| TransmissionError::Rpc(e.to_string()))?;

        tracing::debug!(result = %response.result, "transmission torrent-add");
        if !response.is_ok() {
            return Err(TransmissionError::Rejected(response.result));
        }
        Ok(())
    }
}

/// Turn a configured endpoint (`host:port` or a URL) into the RPC URL
pub fn rpc_url(endpoint: &str) -> Result<Url, TransmissionError> {
    let endpoint = endpoint.trim();
    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| TransmissionError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if url.path().is_empty() || url.path() == "/" {
        url.set_path(DEFAULT_RPC_PATH);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_host_port() {
        let url = rpc_url("localhost:9091").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9091/transmission/rpc");
    }

    #[test]
    fn test_rpc_url_keeps_custom_path() {
        let url = rpc_url("https://seedbox.example:8443/custom/rpc").unwrap();
        assert_eq!(url.as_str(), "https://seedbox.example:8443/custom/rpc");
    }

    #[test]
    fn test_rpc_url_fills_root_path() {
        let url = rpc_url("http://nas:9091/").unwrap();
        assert_eq!(url.path(), DEFAULT_RPC_PATH);
    }

    #[test]
    fn test_rpc_url_invalid() {
        let err = rpc_url("http://").unwrap_err();
        assert!(matches!(err, TransmissionError::InvalidEndpoint { .. }));
    }
}
