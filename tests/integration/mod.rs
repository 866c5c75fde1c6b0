//! Shared helpers for tests that talk to a mock HTTP server

pub mod mock_server;
