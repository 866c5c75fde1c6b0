//! Reusable system prompts loaded from a YAML file

pub mod store;

pub use store::{load_system_prompts, PromptStore};
