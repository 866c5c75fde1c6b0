//! # Types Module
//!
//! Wire types for the chat-completions exchange.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and text content |
//! | [`MessageRole`] | Message role (system, user, assistant) |
//! | [`ChatRequest`] | Request body sent to the provider |
//! | [`ChatResponse`] | Parsed response body with candidate choices |
//!
//! ## Example
//!
//! ```rust
//! use prompt_chat::types::{ChatRequest, MessageRole};
//!
//! let req = ChatRequest::single_turn("gpt-4o-mini", "You are terse.", "Hi", 0.7);
//! assert_eq!(req.messages[0].role, MessageRole::System);
//! assert_eq!(req.messages[1].role, MessageRole::User);
//! ```

pub mod chat;
pub mod message;

pub use chat::{ChatRequest, ChatResponse, Choice};
pub use message::{Message, MessageRole};
