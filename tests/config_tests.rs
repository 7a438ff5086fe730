use dotforge::config::{Config, ProviderConfig};
use dotforge::providers::Provider;
use std::collections::HashMap;

#[test]
fn test_default_config_knows_every_provider() {
    let config = Config::default();

    assert_eq!(config.default_provider, "anthropic");
    for provider in Provider::ALL {
        let provider_config = config
            .get_provider_config(provider.name())
            .expect("default config should cover every provider");
        assert_eq!(provider_config.model, provider.default_model());
    }
}

#[test]
fn test_update_switches_provider_and_sets_values() {
    let mut config = Config::default();

    config
        .update(
            Some("openai".to_string()),
            Some("sk-test".to_string()),
            Some("gpt-custom".to_string()),
            None,
            Some("Prefer minimal APIs".to_string()),
            Some(42_000),
        )
        .expect("update should succeed");

    assert_eq!(config.default_provider, "openai");
    let provider_config = config.get_provider_config("openai").expect("openai config");
    assert_eq!(provider_config.api_key, "sk-test");
    assert_eq!(provider_config.model, "gpt-custom");
    assert_eq!(provider_config.token_limit, Some(42_000));
    assert_eq!(config.instructions, "Prefer minimal APIs");
}

#[test]
fn test_update_merges_additional_params() {
    let mut config = Config::default();
    let mut params = HashMap::new();
    params.insert("temperature".to_string(), "0.2".to_string());

    config
        .update(None, None, None, Some(params), None, None)
        .expect("update should succeed");

    let provider_config = config
        .get_provider_config(&config.default_provider)
        .expect("default provider config");
    assert_eq!(
        provider_config.additional_params.get("temperature"),
        Some(&"0.2".to_string())
    );
}

#[test]
fn test_claude_lookup_redirects_to_anthropic() {
    let config = Config::default();
    assert!(config.get_provider_config("claude").is_some());
    assert!(config.get_provider_config("CLAUDE").is_some());
}

#[test]
fn test_effective_instructions_combine_preset_and_custom() {
    let mut config = Config::default();
    config.instruction_preset = "minimal".to_string();
    config.instructions = "Target .NET 8 only".to_string();

    let effective = config.get_effective_instructions();
    assert!(effective.contains("Keep every file as small as possible"));
    assert!(effective.contains("Target .NET 8 only"));
}

#[test]
fn test_temp_instructions_override_saved_ones() {
    let mut config = Config::default();
    config.instructions = "saved instructions".to_string();
    config.set_temp_instructions(Some("temporary instructions".to_string()));

    let effective = config.get_effective_instructions();
    assert!(effective.contains("temporary instructions"));
    assert!(!effective.contains("saved instructions"));
}

#[test]
fn test_project_config_merge_never_imports_api_keys() {
    let mut personal = Config::default();
    personal
        .providers
        .get_mut("anthropic")
        .expect("anthropic config")
        .api_key = "personal-key".to_string();

    let mut project = Config::default();
    let project_anthropic = project
        .providers
        .get_mut("anthropic")
        .expect("anthropic config");
    project_anthropic.api_key = "leaked-key".to_string();
    project_anthropic.model = "claude-project-model".to_string();
    project.instructions = "Project-wide style".to_string();

    personal.merge_with_project_config(project);

    let merged = personal
        .get_provider_config("anthropic")
        .expect("anthropic config");
    assert_eq!(merged.api_key, "personal-key");
    assert_eq!(merged.model, "claude-project-model");
    assert_eq!(personal.instructions, "Project-wide style");
}

#[test]
fn test_config_survives_a_toml_round_trip() {
    let mut config = Config::default();
    config.instructions = "Round-trip me".to_string();
    config
        .providers
        .get_mut("openai")
        .expect("openai config")
        .token_limit = Some(9000);

    let serialized = toml::to_string(&config).expect("serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("deserialize");

    assert_eq!(deserialized.instructions, "Round-trip me");
    assert_eq!(
        deserialized
            .get_provider_config("openai")
            .expect("openai config")
            .token_limit,
        Some(9000)
    );
}

#[test]
fn test_resolve_model_falls_back_to_provider_default() {
    let mut config = Config::default();
    config
        .providers
        .get_mut("ollama")
        .expect("ollama config")
        .model = String::new();

    assert_eq!(config.resolve_model(Provider::Ollama), "llama3");
}

#[test]
fn test_resolve_token_limit_prefers_configured_value() {
    let mut config = Config::default();
    assert_eq!(
        config.resolve_token_limit(Provider::Anthropic),
        Provider::Anthropic.default_token_limit()
    );

    config
        .providers
        .get_mut("anthropic")
        .expect("anthropic config")
        .token_limit = Some(1234);
    assert_eq!(config.resolve_token_limit(Provider::Anthropic), 1234);
}

#[test]
fn test_provider_config_default_for_uses_provider_model() {
    let provider_config = ProviderConfig::default_for(Provider::Google);
    assert_eq!(provider_config.model, Provider::Google.default_model());
    assert!(provider_config.api_key.is_empty());
    assert!(provider_config.token_limit.is_none());
}
