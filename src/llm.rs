use crate::config::Config;
use crate::log_debug;
use crate::providers::Provider;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use llm::{
    LLMProvider,
    builder::{LLMBackend, LLMBuilder},
    chat::{ChatMessage, ChatResponse},
};
use std::str::FromStr;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;

/// How long a single completion attempt may run before it is abandoned
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// One request to the text-generation service: system instructions, the user
/// prompt, and a cap on the response size. No streaming, no multi-turn state.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(system_prompt: String, user_prompt: String, max_tokens: u32) -> Self {
        Self {
            system_prompt,
            user_prompt,
            max_tokens,
        }
    }
}

/// The text-generation capability, injected so everything downstream of the
/// remote call (extraction, persistence, prompts) is testable without network
/// access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Production [`TextGenerator`] backed by a configured LLM provider
pub struct ProviderGenerator {
    config: Config,
    provider: Provider,
}

impl ProviderGenerator {
    pub fn new(config: Config, provider: Provider) -> Self {
        Self { config, provider }
    }
}

#[async_trait]
impl TextGenerator for ProviderGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        get_response(&self.config, self.provider, request).await
    }
}

/// Issues one completion request using the given configuration
pub async fn get_response(
    config: &Config,
    provider: Provider,
    request: &GenerationRequest,
) -> Result<String> {
    log_debug!("Generating response using provider: {}", provider);
    log_debug!("System prompt: {}", request.system_prompt);
    log_debug!("User prompt: {}", request.user_prompt);

    // Parse the provider type
    let backend =
        LLMBackend::from_str(provider.name()).map_err(|e| anyhow!("Invalid provider: {}", e))?;

    // Build the provider client
    let mut builder = LLMBuilder::new().backend(backend);

    builder = builder.model(config.resolve_model(provider));
    builder = builder.system(request.system_prompt.clone());

    // Set API key if needed
    if provider.requires_api_key() {
        let api_key = config.resolve_api_key(provider).ok_or_else(|| {
            anyhow!(
                "API key required for provider '{}'. Set one with 'dotforge config --provider {} --api-key <KEY>'{}",
                provider,
                provider,
                provider
                    .api_key_env()
                    .map(|var| format!(" or export {var}"))
                    .unwrap_or_default()
            )
        })?;
        builder = builder.api_key(api_key);
    }

    let provider_config = config.get_provider_config(provider.name());
    let additional_params = provider_config.map(|c| &c.additional_params);

    // Set temperature if specified in additional params
    if let Some(temp) = additional_params.and_then(|p| p.get("temperature"))
        && let Ok(temp_val) = temp.parse::<f32>()
    {
        builder = builder.temperature(temp_val);
    }

    // Set top_p if specified in additional params
    if let Some(top_p) = additional_params.and_then(|p| p.get("top_p"))
        && let Ok(tp_val) = top_p.parse::<f32>()
    {
        builder = builder.top_p(tp_val);
    }

    // Per-call max tokens, overridable from additional params
    if let Some(max_tokens) = additional_params.and_then(|p| p.get("max_tokens")) {
        if let Ok(mt_val) = max_tokens.parse::<u32>() {
            builder = builder.max_tokens(mt_val);
        }
    } else {
        builder = builder.max_tokens(request.max_tokens);
    }

    let client: Box<dyn LLMProvider> = builder
        .build()
        .map_err(|e| anyhow!("Failed to build provider: {}", e))?;

    let retry_strategy = ExponentialBackoff::from_millis(10).factor(2).take(2); // 2 attempts total: initial + 1 retry

    let result = Retry::spawn(retry_strategy, || async {
        log_debug!("Attempting to generate response");

        let messages = vec![ChatMessage::user().content(request.user_prompt.clone()).build()];

        match tokio::time::timeout(REQUEST_TIMEOUT, client.chat(&messages)).await {
            Ok(Ok(response)) => {
                log_debug!("Received response from provider");
                Ok(response.text().unwrap_or_default())
            }
            Ok(Err(e)) => {
                log_debug!("Provider error: {}", e);
                Err(anyhow!("Provider error: {}", e))
            }
            Err(_) => {
                log_debug!("Provider timed out");
                Err(anyhow!("Provider timed out"))
            }
        }
    })
    .await;

    match result {
        Ok(text) => {
            log_debug!("Generated response successfully ({} bytes)", text.len());
            Ok(text)
        }
        Err(e) => {
            log_debug!("Failed to generate response after retries: {}", e);
            Err(anyhow!("Failed to generate response: {}", e))
        }
    }
}

/// Validates the provider configuration without issuing a request
pub fn validate_provider_config(config: &Config, provider: Provider) -> Result<()> {
    if provider.requires_api_key() && config.resolve_api_key(provider).is_none() {
        return Err(anyhow!(
            "API key required for provider: {}. Set one with 'dotforge config --provider {} --api-key <KEY>'",
            provider,
            provider
        ));
    }

    Ok(())
}
