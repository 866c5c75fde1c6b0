//! Chat-completions client and its configuration

pub mod config;
pub mod core;

pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use self::core::ChatClient;
