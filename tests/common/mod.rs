//! Canned Transmission RPC answers shared by the integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

pub const RPC_PATH: &str = "/transmission/rpc";

/// `session-get` arguments as sent by a Transmission 4.0 daemon
pub fn session_arguments() -> Value {
    json!({
        "alt-speed-down": 50,
        "alt-speed-enabled": false,
        "alt-speed-time-begin": 540,
        "alt-speed-time-day": 127,
        "alt-speed-time-enabled": false,
        "alt-speed-time-end": 1020,
        "alt-speed-up": 50,
        "blocklist-enabled": false,
        "blocklist-size": 0,
        "blocklist-url": "http://www.example.com/blocklist",
        "cache-size-mb": 4,
        "config-dir": "/var/lib/transmission-daemon/.config/transmission-daemon",
        "default-trackers": "",
        "dht-enabled": true,
        "download-dir": "/downloads/complete",
        "download-dir-free-space": 102_400_000_000u64,
        "download-queue-enabled": true,
        "download-queue-size": 5,
        "encryption": "preferred",
        "idle-seeding-limit": 30,
        "idle-seeding-limit-enabled": false,
        "incomplete-dir": "/downloads/incomplete",
        "incomplete-dir-enabled": true,
        "lpd-enabled": false,
        "peer-limit-global": 200,
        "peer-limit-per-torrent": 50,
        "peer-port": 51413,
        "peer-port-random-on-start": false,
        "pex-enabled": true,
        "port-forwarding-enabled": false,
        "queue-stalled-enabled": true,
        "queue-stalled-minutes": 30,
        "rename-partial-files": true,
        "rpc-version": 17,
        "rpc-version-minimum": 14,
        "rpc-version-semver": "5.3.0",
        "script-torrent-added-enabled": false,
        "script-torrent-added-filename": "",
        "script-torrent-done-enabled": false,
        "script-torrent-done-filename": "",
        "script-torrent-done-seeding-enabled": false,
        "script-torrent-done-seeding-filename": "",
        "seed-queue-enabled": false,
        "seed-queue-size": 10,
        "seedRatioLimit": 2,
        "seedRatioLimited": false,
        "session-id": "Kk1hBtMbCKyv4JzWDBWqEivqQsNdTn8KOYzBBmVtfScaIA0P",
        "speed-limit-down": 100,
        "speed-limit-down-enabled": false,
        "speed-limit-up": 100,
        "speed-limit-up-enabled": false,
        "start-added-torrents": true,
        "trash-original-torrent-files": false,
        "units": {
            "memory-bytes": 1024,
            "memory-units": ["KiB", "MiB", "GiB", "TiB"],
            "size-bytes": 1000,
            "size-units": ["kB", "MB", "GB", "TB"],
            "speed-bytes": 1000,
            "speed-units": ["kB/s", "MB/s", "GB/s", "TB/s"]
        },
        "utp-enabled": true,
        "version": "4.0.5 (a6fe2a64aa)"
    })
}

/// Full `session-get` response body with the given result string
pub fn session_get_response(result: &str) -> String {
    json!({ "arguments": session_arguments(), "result": result }).to_string()
}

/// Matches a JSON-RPC request body by method name
pub fn rpc_method(method: &str) -> mockito::Matcher {
    mockito::Matcher::PartialJson(json!({ "method": method }))
}
