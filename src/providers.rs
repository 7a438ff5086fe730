//! LLM provider registry.
//!
//! Single source of truth for supported providers and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    #[default]
    Anthropic,
    Google,
    Ollama,
}

impl Provider {
    /// All available providers
    pub const ALL: &'static [Provider] = &[
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Ollama,
    ];

    /// Provider name as used in config files and CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Ollama => "ollama",
        }
    }

    /// Default model used when the provider config does not name one
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-5.1",
            Self::Anthropic => "claude-sonnet-4-5-20250929",
            Self::Google => "gemini-2.5-pro",
            Self::Ollama => "llama3",
        }
    }

    /// Context window size (max tokens)
    pub const fn default_token_limit(&self) -> usize {
        match self {
            Self::OpenAI | Self::Ollama => 128_000,
            Self::Anthropic => 200_000,
            Self::Google => 1_000_000,
        }
    }

    /// Environment variable consulted when no API key is configured
    pub const fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
            Self::Google => Some("GOOGLE_API_KEY"),
            Self::Ollama => None,
        }
    }

    /// Whether the provider needs an API key at all
    pub const fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama)
    }

    /// Get all provider names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // Handle legacy "claude" alias
        let normalized = if lower == "claude" {
            "anthropic"
        } else {
            &lower
        };

        Self::ALL
            .iter()
            .find(|p| p.name() == normalized)
            .copied()
            .ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors raised while resolving a provider name
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider '{0}'")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers() {
        assert_eq!(
            "anthropic".parse::<Provider>().ok(),
            Some(Provider::Anthropic)
        );
        assert_eq!("OpenAI".parse::<Provider>().ok(), Some(Provider::OpenAI));
        assert_eq!("ollama".parse::<Provider>().ok(), Some(Provider::Ollama));
    }

    #[test]
    fn claude_is_an_alias_for_anthropic() {
        assert_eq!("claude".parse::<Provider>().ok(), Some(Provider::Anthropic));
    }

    #[test]
    fn rejects_unknown_provider() {
        assert!("copilot".parse::<Provider>().is_err());
    }

    #[test]
    fn ollama_needs_no_api_key() {
        assert!(!Provider::Ollama.requires_api_key());
        assert!(Provider::Anthropic.requires_api_key());
        assert!(Provider::Ollama.api_key_env().is_none());
    }
}
