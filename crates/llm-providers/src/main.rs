use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use llm_providers::config::Config;
use llm_providers::llm::{ChatRequest, ProviderId, ProviderRegistry};
use llm_providers::{MessageInput, get_messages};

/// Send a single prompt to a configured provider.
#[derive(Parser)]
#[command(name = "llm-providers", version, about)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "llm-providers.yaml")]
    config: PathBuf,

    /// Provider to use (defaults to `default_provider` from the config)
    #[arg(short, long)]
    provider: Option<ProviderId>,

    /// Model id (defaults to the provider's default model)
    #[arg(short, long)]
    model: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,

    /// Upper bound on generated tokens
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Print the request as JSON instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Prompt text
    prompt: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let registry = if config.providers.qwen.is_some() {
        ProviderRegistry::from_config(&config)?
    } else {
        ProviderRegistry::from_env()?
    };

    let id = cli.provider.unwrap_or(config.default_provider);
    let provider = registry
        .get(id)
        .with_context(|| format!("provider `{id}` is not configured"))?;

    let messages = get_messages(&MessageInput::from_prompt(cli.prompt))?;
    let model = provider.resolve_model(cli.model.as_deref());
    debug!(provider = provider.name(), %model, "Resolved model");

    let mut request = ChatRequest::new(model, messages);
    if let Some(temperature) = cli.temperature {
        request = request.with_temperature(temperature);
    }
    if let Some(max_tokens) = cli.max_tokens {
        request = request.with_max_tokens(max_tokens);
    }

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let response = provider.chat_client().chat(request).await?;
    println!("{}", response.content().unwrap_or_default());

    Ok(())
}
