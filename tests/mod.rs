//! Integration tests for Jizz
//!
//! Tests are organized by component:
//! - jackett_test: Jackett health check, search, magnet resolution
//! - transmission_test: Transmission connection failures
//! - app_test: startup sequence and the interactive loop

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
