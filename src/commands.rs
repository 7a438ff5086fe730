use crate::common::CommonParams;
use crate::config::Config;
use crate::instruction_presets::{get_instruction_preset_library, list_presets_formatted};
use crate::log_debug;
use crate::ui;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::collections::HashMap;

/// Apply common configuration changes to a config object
///
/// Shared by the personal and project configuration commands. Returns true
/// if any changes were made.
fn apply_config_changes(
    config: &mut Config,
    common: &CommonParams,
    api_key: Option<String>,
    model: Option<String>,
    token_limit: Option<usize>,
    param: Option<Vec<String>>,
) -> Result<bool> {
    let mut changes_made = common.apply_to_config(config)?;

    let additional_params = param.map(parse_additional_params).transpose()?;

    if api_key.is_some()
        || model.is_some()
        || token_limit.is_some()
        || additional_params.is_some()
        || common.instructions.is_some()
    {
        config.update(
            common.provider.clone(),
            api_key,
            model,
            additional_params,
            common.instructions.clone(),
            token_limit,
        )?;
        changes_made = true;
    }

    Ok(changes_made)
}

/// Parse `key=value` pairs from the command line
fn parse_additional_params(params: Vec<String>) -> Result<HashMap<String, String>> {
    params
        .into_iter()
        .map(|param| {
            param
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("Invalid parameter format '{}'. Expected key=value", param))
        })
        .collect()
}

/// Handle the `config` command
pub fn handle_config_command(
    common: &CommonParams,
    api_key: Option<String>,
    model: Option<String>,
    token_limit: Option<usize>,
    param: Option<Vec<String>>,
) -> Result<()> {
    log_debug!(
        "Handling 'config' command with common: {:?}, api_key: {:?}, model: {:?}, token_limit: {:?}, param: {:?}",
        common,
        api_key.as_ref().map(|_| "<redacted>"),
        model,
        token_limit,
        param
    );

    let mut config = Config::load()?;
    let changes_made = apply_config_changes(
        &mut config,
        common,
        api_key,
        model,
        token_limit,
        param,
    )?;

    if changes_made {
        config.save()?;
        ui::print_success("Configuration updated successfully.");
    }

    print_configuration(&config);
    Ok(())
}

/// Handle the `project-config` command
pub fn handle_project_config_command(
    common: &CommonParams,
    model: Option<String>,
    token_limit: Option<usize>,
    param: Option<Vec<String>>,
    print: bool,
) -> Result<()> {
    log_debug!(
        "Handling 'project-config' command with common: {:?}, model: {:?}, token_limit: {:?}, param: {:?}, print: {}",
        common,
        model,
        token_limit,
        param,
        print
    );

    if print {
        let config = Config::load_project_config()?;
        print_configuration(&config);
        return Ok(());
    }

    let mut config = match Config::load_project_config() {
        Ok(project_config) => project_config,
        Err(_) => Config::load()?,
    };

    // API keys never go into project config files
    let changes_made =
        apply_config_changes(&mut config, common, None, model, token_limit, param)?;

    config.save_as_project_config()?;
    if changes_made {
        ui::print_success("Project configuration updated successfully.");
    } else {
        ui::print_success("Project configuration file created.");
    }

    Ok(())
}

/// Handle the `list-presets` command
pub fn handle_list_presets_command() -> Result<()> {
    let library = get_instruction_preset_library();
    ui::print_message(&format!(
        "{}\n{}",
        "Available instruction presets:".bright_blue().bold(),
        list_presets_formatted(&library)
    ));
    Ok(())
}

/// Print the current configuration, with API keys masked
fn print_configuration(config: &Config) {
    if ui::is_quiet_mode() {
        return;
    }

    println!();
    println!(
        "{} {}",
        "Default provider:".bright_blue().bold(),
        config.default_provider.green()
    );

    if !config.instruction_preset.is_empty() {
        println!(
            "{} {}",
            "Instruction preset:".bright_blue().bold(),
            config.instruction_preset.green()
        );
    }

    if !config.instructions.is_empty() {
        println!(
            "{} {}",
            "Custom instructions:".bright_blue().bold(),
            config.instructions.green()
        );
    }

    for (name, provider_config) in &config.providers {
        println!();
        println!("{}", format!("[{name}]").yellow().bold());
        let api_key_display = if provider_config.api_key.is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            "****".green().to_string()
        };
        println!("  {} {}", "API key:".cyan(), api_key_display);
        println!("  {} {}", "Model:".cyan(), provider_config.model.green());
        if let Some(limit) = provider_config.token_limit {
            println!("  {} {}", "Token limit:".cyan(), limit.to_string().green());
        }
        for (key, value) in &provider_config.additional_params {
            println!("  {} {} = {}", "Param:".cyan(), key, value.green());
        }
    }
}
