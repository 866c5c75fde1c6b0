//! # prompt-chat
//!
//! Minimal blocking client for OpenAI-compatible chat completions, plus a
//! loader for named system prompts kept in a YAML file.
//!
//! ## Overview
//!
//! - [`ChatClient`] sends one system + user exchange and returns the first
//!   completion. One HTTPS POST per call, no retry, no streaming, no history.
//! - [`PromptStore`] maps prompt names to prompt text, loaded once from disk.
//!
//! The two are independent: a prompt is just a string handed to the client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompt_chat::{load_system_prompts, ChatClient};
//!
//! fn main() -> prompt_chat::Result<()> {
//!     let client = ChatClient::new("your-api-key", "gpt-4o-mini", 0.7)?;
//!     let prompts = load_system_prompts("system_prompts.yaml")?;
//!
//!     let Some(system) = prompts.get("default") else {
//!         eprintln!("no `default` prompt");
//!         return Ok(());
//!     };
//!     let answer = client.send_chat(system, "Who was the first person to go to space?", None)?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Chat client and its configuration |
//! | [`prompts`] | YAML system prompt store |
//! | [`transport`] | Blocking HTTP transport |
//! | [`types`] | Request/response wire types |

pub mod client;
pub mod prompts;
pub mod transport;
pub mod types;

pub use client::{ChatClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use prompts::{load_system_prompts, PromptStore};
pub use types::{ChatRequest, ChatResponse, Choice, Message, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
