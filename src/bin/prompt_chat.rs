//! prompt-chat CLI: send one question using a named system prompt
//!
//! Usage:
//!     prompt-chat [OPTIONS] [USER_PROMPT]
//!
//! Environment Variables:
//!     OPENAI_API_KEY: API key sent as a bearer token
//!     OPENAI_BASE_URL: API root (default: https://api.openai.com/v1)
//!     OPENAI_MODEL: model name (default: gpt-4o-mini)
//!     RUST_LOG: log filter (default: warn)

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use prompt_chat::{load_system_prompts, ChatClient, ClientConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ask a chat model one question using a system prompt from a YAML file
#[derive(Parser, Debug)]
#[command(name = "prompt-chat", version)]
#[command(after_help = r#"Examples:
    # Use the `default` prompt from ./system_prompts.yaml
    prompt-chat "Who was the first person to go to space?"

    # Pick another prompt and model
    prompt-chat --prompts prompts.yaml --prompt-name terse --model gpt-4o "Why is the sky blue?"
"#)]
struct Cli {
    /// YAML file mapping prompt names to prompt text
    #[arg(long, default_value = "system_prompts.yaml")]
    prompts: PathBuf,

    /// Name of the system prompt to use
    #[arg(long, default_value = "default")]
    prompt_name: String,

    /// Model name (empty selects gpt-4o-mini)
    #[arg(long, env = "OPENAI_MODEL", default_value = "")]
    model: String,

    /// Client temperature (0 selects 0.7)
    #[arg(long, default_value_t = 0.0)]
    temperature: f64,

    /// Per-request temperature override, sent as given (0 allowed)
    #[arg(long)]
    temperature_override: Option<f64>,

    /// API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API root URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = prompt_chat::DEFAULT_BASE_URL)]
    base_url: String,

    /// Question to ask
    #[arg(default_value = "Who was the first person to go to space?")]
    user_prompt: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prompts = load_system_prompts(&cli.prompts).context("Error loading system prompts")?;

    let system_prompt = prompts.get(&cli.prompt_name).ok_or_else(|| {
        anyhow!(
            "System prompt '{}' not found in {}",
            cli.prompt_name,
            cli.prompts.display()
        )
    })?;

    let config = ClientConfig::new(cli.api_key, cli.model, cli.temperature)
        .with_base_url(cli.base_url);
    let client = ChatClient::from_config(config)?;

    let response = client
        .send_chat(system_prompt, &cli.user_prompt, cli.temperature_override)
        .context("Error sending request")?;

    println!("{response}");
    Ok(())
}
