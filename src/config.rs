use crate::instruction_presets::get_instruction_preset_library;
use crate::log_debug;
use crate::providers::Provider;

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Configuration structure for the Dotforge application
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Default LLM provider
    pub default_provider: String,
    /// Provider-specific configurations
    pub providers: HashMap<String, ProviderConfig>,
    /// Custom instructions appended to every system prompt
    #[serde(default)]
    pub instructions: String,
    #[serde(default = "default_instruction_preset")]
    pub instruction_preset: String,
    #[serde(skip)]
    pub temp_instructions: Option<String>,
    #[serde(skip)]
    pub temp_preset: Option<String>,
    /// Flag indicating if this config is from a project file
    #[serde(skip)]
    pub is_project_config: bool,
}

/// Provider-specific configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ProviderConfig {
    /// API key for the provider
    pub api_key: String,
    /// Model to request scaffolds from
    pub model: String,
    /// Additional parameters for the provider (temperature, top_p, max_tokens, ...)
    #[serde(default)]
    pub additional_params: HashMap<String, String>,
    /// Token limit, if set by the user
    pub token_limit: Option<usize>,
}

// Default instruction preset to use
fn default_instruction_preset() -> String {
    "default".to_string()
}

/// Project configuration filename, looked up in the working directory
pub const PROJECT_CONFIG_FILENAME: &str = ".dotforge.toml";

impl Config {
    /// Load the configuration from the file
    pub fn load() -> Result<Self> {
        // First load personal config
        let config_path = Self::get_config_path()?;
        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        // Then try to load and merge project config if available
        if let Ok(project_config) = Self::load_project_config() {
            config.merge_with_project_config(project_config);
        }

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load project-specific configuration from the working directory
    pub fn load_project_config() -> Result<Self> {
        let config_path = Self::get_project_config_path()?;
        if !config_path.exists() {
            return Err(anyhow!("Project configuration file not found"));
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: Self = toml::from_str(&config_str).map_err(|e| {
            anyhow!(
                "Invalid project configuration file format: {}. Please check your {} file for syntax errors.",
                e,
                PROJECT_CONFIG_FILENAME
            )
        })?;

        config.is_project_config = true;
        Ok(config)
    }

    /// Get the path to the project configuration file
    pub fn get_project_config_path() -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Unable to determine working directory")?;
        Ok(cwd.join(PROJECT_CONFIG_FILENAME))
    }

    /// Merge this config with project-specific config, with project config taking precedence
    /// But never allow API keys from project config
    pub fn merge_with_project_config(&mut self, project_config: Self) {
        log_debug!("Merging with project configuration");

        // Override default provider if set in project config
        if project_config.default_provider != Self::default().default_provider {
            self.default_provider = project_config.default_provider;
        }

        // Merge provider configs, but never allow API keys from project config
        for (provider, proj_provider_config) in project_config.providers {
            let entry = self.providers.entry(provider).or_default();

            if !proj_provider_config.model.is_empty() {
                entry.model = proj_provider_config.model;
            }

            entry
                .additional_params
                .extend(proj_provider_config.additional_params);

            if proj_provider_config.token_limit.is_some() {
                entry.token_limit = proj_provider_config.token_limit;
            }
        }

        // Always override instructions field if set in project config
        if !project_config.instructions.is_empty() {
            self.instructions = project_config.instructions.clone();
        }

        // Override preset
        if project_config.instruction_preset != default_instruction_preset() {
            self.instruction_preset = project_config.instruction_preset;
        }
    }

    /// Save the configuration to the file
    pub fn save(&self) -> Result<()> {
        // Don't save project configs to personal config file
        if self.is_project_config {
            return Ok(());
        }

        let config_path = Self::get_config_path()?;
        let config_content = toml::to_string(self)?;
        fs::write(config_path, config_content)?;
        log_debug!("Configuration saved: {:?}", self);
        Ok(())
    }

    /// Save the configuration as a project-specific configuration
    pub fn save_as_project_config(&self) -> Result<()> {
        let config_path = Self::get_project_config_path()?;

        // Before saving, create a copy that excludes API keys
        let mut project_config = self.clone();
        for provider_config in project_config.providers.values_mut() {
            provider_config.api_key.clear();
        }
        project_config.is_project_config = true;

        let config_str = toml::to_string_pretty(&project_config)?;
        fs::write(config_path, config_str)?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("dotforge");
        std::fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    pub fn set_temp_instructions(&mut self, instructions: Option<String>) {
        self.temp_instructions = instructions;
    }

    pub fn set_temp_preset(&mut self, preset: Option<String>) {
        self.temp_preset = preset;
    }

    /// Get the effective preset name, preferring `temp_preset` over `instruction_preset`
    pub fn get_effective_preset_name(&self) -> &str {
        self.temp_preset
            .as_deref()
            .unwrap_or(&self.instruction_preset)
    }

    pub fn get_effective_instructions(&self) -> String {
        let preset_library = get_instruction_preset_library();
        let preset_instructions = self
            .temp_preset
            .as_ref()
            .or(Some(&self.instruction_preset))
            .and_then(|p| preset_library.get_preset(p))
            .map(|p| p.instructions.clone())
            .unwrap_or_default();

        let custom_instructions = self
            .temp_instructions
            .as_ref()
            .unwrap_or(&self.instructions);

        format!("{preset_instructions}\n\n{custom_instructions}")
            .trim()
            .to_string()
    }

    /// Update the configuration with new values
    pub fn update(
        &mut self,
        provider: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        additional_params: Option<HashMap<String, String>>,
        instructions: Option<String>,
        token_limit: Option<usize>,
    ) -> Result<()> {
        if let Some(provider) = provider {
            let parsed: Provider = provider.parse()?;
            self.default_provider = parsed.name().to_string();
            self.providers
                .entry(parsed.name().to_string())
                .or_insert_with(|| ProviderConfig::default_for(parsed));
        }

        let provider_config = self
            .providers
            .get_mut(&self.default_provider)
            .context("Could not get default provider")?;

        if let Some(key) = api_key {
            provider_config.api_key = key;
        }
        if let Some(model) = model {
            provider_config.model = model;
        }
        if let Some(params) = additional_params {
            provider_config.additional_params.extend(params);
        }
        if let Some(instr) = instructions {
            self.instructions = instr;
        }
        if let Some(limit) = token_limit {
            provider_config.token_limit = Some(limit);
        }

        log_debug!("Configuration updated: {:?}", self);
        Ok(())
    }

    /// Get the configuration for a specific provider
    pub fn get_provider_config(&self, provider: &str) -> Option<&ProviderConfig> {
        // Special case: redirect "claude" to "anthropic"
        let provider_to_lookup = if provider.to_lowercase() == "claude" {
            "anthropic"
        } else {
            provider
        };

        self.providers
            .get(provider_to_lookup)
            .or_else(|| self.providers.get(&provider_to_lookup.to_lowercase()))
    }

    /// Resolve the API key for a provider, falling back to its environment variable
    pub fn resolve_api_key(&self, provider: Provider) -> Option<String> {
        if let Some(config) = self.get_provider_config(provider.name())
            && !config.api_key.is_empty()
        {
            return Some(config.api_key.clone());
        }

        provider
            .api_key_env()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }

    /// Resolve the model for a provider, falling back to the provider default
    pub fn resolve_model(&self, provider: Provider) -> String {
        self.get_provider_config(provider.name())
            .map(|c| c.model.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    /// Token limit for a provider, from config or the provider default
    pub fn resolve_token_limit(&self, provider: Provider) -> usize {
        self.get_provider_config(provider.name())
            .and_then(|c| c.token_limit)
            .unwrap_or_else(|| provider.default_token_limit())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut providers = HashMap::new();
        for provider in Provider::ALL {
            providers.insert(
                provider.name().to_string(),
                ProviderConfig::default_for(*provider),
            );
        }

        Self {
            default_provider: Provider::default().name().to_string(),
            providers,
            instructions: String::new(),
            instruction_preset: default_instruction_preset(),
            temp_instructions: None,
            temp_preset: None,
            is_project_config: false,
        }
    }
}

impl ProviderConfig {
    /// Create a default provider configuration for a given provider
    pub fn default_for(provider: Provider) -> Self {
        Self {
            api_key: String::new(),
            model: provider.default_model().to_string(),
            additional_params: HashMap::new(),
            token_limit: None,
        }
    }
}
