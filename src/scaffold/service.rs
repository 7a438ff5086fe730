use anyhow::Result;
use std::sync::Arc;

use super::extractor::extract_files;
use super::prompt::{
    create_file_system_prompt, create_file_user_prompt, create_project_system_prompt,
    create_project_user_prompt, create_views_system_prompt, create_views_user_prompt,
};
use super::types::{FileSet, ProjectKind};
use crate::config::Config;
use crate::llm::{GenerationRequest, ProviderGenerator, TextGenerator, validate_provider_config};
use crate::log_debug;
use crate::providers::Provider;
use crate::token_optimizer::TokenOptimizer;

/// Response budget for whole-project and view-set generation
const SCAFFOLD_MAX_TOKENS: u32 = 4096;
/// Response budget for single-file generation
const SINGLE_FILE_MAX_TOKENS: u32 = 2048;

/// Headroom reserved for the response when budgeting the prompt itself
const PROMPT_BUFFER_TOKENS: usize = 1000;

/// Service turning scaffold requests into generated files.
///
/// Each operation is one strictly sequential construct-prompt, call, extract
/// sequence; the service keeps no state across invocations.
pub struct ScaffoldService {
    config: Config,
    provider: Provider,
    generator: Arc<dyn TextGenerator>,
}

impl ScaffoldService {
    /// Create a service backed by the configured LLM provider
    pub fn new(config: Config) -> Result<Self> {
        let provider: Provider = config.default_provider.parse()?;
        validate_provider_config(&config, provider)?;

        let generator = Arc::new(ProviderGenerator::new(config.clone(), provider));
        Ok(Self {
            config,
            provider,
            generator,
        })
    }

    /// Create a service with an injected generator (mainly for testing purposes)
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        let provider: Provider = config.default_provider.parse()?;
        Ok(Self {
            config,
            provider,
            generator,
        })
    }

    /// Generate the file set for a whole project scaffold
    pub async fn generate_project(&self, kind: ProjectKind, name: &str) -> Result<FileSet> {
        let system_prompt = create_project_system_prompt(&self.config);
        let user_prompt = create_project_user_prompt(kind, name);
        let user_prompt = self.enforce_prompt_budget(&system_prompt, user_prompt);

        let response = self
            .generator
            .generate(&GenerationRequest::new(
                system_prompt,
                user_prompt,
                SCAFFOLD_MAX_TOKENS,
            ))
            .await?;

        let files = extract_files(&response);
        log_debug!(
            "Extracted {} files for {} project '{}'",
            files.len(),
            kind.display_name(),
            name
        );
        Ok(files)
    }

    /// Generate the file set of CRUD views (plus controller and models) for an entity
    pub async fn generate_views(&self, entity_name: &str, project_name: &str) -> Result<FileSet> {
        let system_prompt = create_views_system_prompt(&self.config);
        let user_prompt = create_views_user_prompt(entity_name, project_name);
        let user_prompt = self.enforce_prompt_budget(&system_prompt, user_prompt);

        let response = self
            .generator
            .generate(&GenerationRequest::new(
                system_prompt,
                user_prompt,
                SCAFFOLD_MAX_TOKENS,
            ))
            .await?;

        let files = extract_files(&response);
        log_debug!("Extracted {} files for entity '{}'", files.len(), entity_name);
        Ok(files)
    }

    /// Generate one file's raw content from free-form specifications
    pub async fn generate_single_file(
        &self,
        file_type: &str,
        file_name: &str,
        specifications: &str,
    ) -> Result<String> {
        let system_prompt = create_file_system_prompt(&self.config);
        let user_prompt = create_file_user_prompt(file_type, file_name, specifications);
        let user_prompt = self.enforce_prompt_budget(&system_prompt, user_prompt);

        self.generator
            .generate(&GenerationRequest::new(
                system_prompt,
                user_prompt,
                SINGLE_FILE_MAX_TOKENS,
            ))
            .await
    }

    /// Truncate the user prompt if system + user would blow the provider's
    /// context window. Only free-form specification text realistically grows
    /// that large.
    fn enforce_prompt_budget(&self, system_prompt: &str, user_prompt: String) -> String {
        let token_limit = self.config.resolve_token_limit(self.provider);
        let optimizer = TokenOptimizer::new(token_limit);

        let system_tokens = optimizer.count_tokens(system_prompt);
        let user_tokens = optimizer.count_tokens(&user_prompt);
        log_debug!(
            "Prompt budget: limit {}, system {}, user {}",
            token_limit,
            system_tokens,
            user_tokens
        );

        if system_tokens + user_tokens + PROMPT_BUFFER_TOKENS <= token_limit {
            return user_prompt;
        }

        let max_user_tokens = token_limit.saturating_sub(system_tokens + PROMPT_BUFFER_TOKENS);
        log_debug!(
            "Prompt exceeds token limit {}, truncating user prompt to {} tokens",
            token_limit,
            max_user_tokens
        );
        optimizer.truncate_string(&user_prompt, max_user_tokens)
    }
}
