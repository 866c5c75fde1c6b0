//! Blocking HTTPS transport

pub mod http;

pub use http::{HttpReply, HttpTransport, TransportError};
