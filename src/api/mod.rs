//! Clients for the two external services
//!
//! - Jackett: search proxy over every configured indexer
//! - Transmission: torrent client RPC

pub mod jackett;
pub mod transmission;

pub use jackett::JackettClient;
pub use transmission::{TorrentSink, TransmissionClient};
