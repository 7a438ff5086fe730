use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::service::ScaffoldService;
use super::types::ProjectKind;
use super::writer::write_file_set;
use crate::common::CommonParams;
use crate::config::Config;
use crate::instruction_presets::PresetType;
use crate::log_debug;
use crate::messages::get_waiting_message;
use crate::ui;

/// Handle the `project` command
pub async fn handle_project_command(
    common: CommonParams,
    kind: ProjectKind,
    name: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    if !common.is_valid_preset_for_type(PresetType::Project) {
        ui::print_warning(
            "The specified preset may not be suitable for project scaffolds. Consider using a project or general preset instead.",
        );
        ui::print_info("Run 'dotforge list-presets' to see available presets.");
    }

    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;

    let name = name.unwrap_or_else(|| kind.default_project_name().to_string());
    let output = output.unwrap_or_else(|| PathBuf::from(kind.default_output_dir()));
    log_debug!(
        "Generating {} project '{}' into {}",
        kind.display_name(),
        name,
        output.display()
    );

    let service = ScaffoldService::new(config)?;

    let spinner = ui::create_spinner(&get_waiting_message().text);
    let files = service.generate_project(kind, &name).await;
    spinner.finish_and_clear();
    let files = files?;

    if files.is_empty() {
        ui::print_warning("The response contained no recognizable files; nothing was written.");
        return Ok(());
    }

    let written = write_file_set(&files, &output)?;

    ui::print_newline();
    ui::print_success(&format!(
        "Generated {} files in {}",
        written.len(),
        output.display()
    ));
    ui::print_info("\nTo run the project:");
    ui::print_info(&format!("  cd {}", output.display()));
    ui::print_info("  dotnet restore");
    ui::print_info("  dotnet run");

    Ok(())
}

/// Handle the `views` command
pub async fn handle_views_command(
    common: CommonParams,
    entity: String,
    project: String,
    output: PathBuf,
) -> Result<()> {
    if !common.is_valid_preset_for_type(PresetType::Views) {
        ui::print_warning(
            "The specified preset may not be suitable for view generation. Consider using a views or general preset instead.",
        );
        ui::print_info("Run 'dotforge list-presets' to see available presets.");
    }

    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;

    log_debug!(
        "Generating CRUD views for entity '{}' (project '{}') into {}",
        entity,
        project,
        output.display()
    );

    let service = ScaffoldService::new(config)?;

    let spinner = ui::create_spinner(&get_waiting_message().text);
    let files = service.generate_views(&entity, &project).await;
    spinner.finish_and_clear();
    let files = files?;

    if files.is_empty() {
        ui::print_warning("The response contained no recognizable files; nothing was written.");
        return Ok(());
    }

    let written = write_file_set(&files, &output)?;

    ui::print_newline();
    ui::print_success(&format!(
        "Generated {} files in {}",
        written.len(),
        output.display()
    ));
    ui::print_info("\nCopy these files into your existing MVC project:");
    for path in files.paths() {
        ui::print_message(&format!("  - {path}"));
    }

    Ok(())
}

/// Handle the `file` command
pub async fn handle_file_command(
    common: CommonParams,
    file_type: String,
    name: String,
    spec: String,
    save: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::load()?;
    common.apply_to_config(&mut config)?;

    log_debug!("Generating single {} file '{}'", file_type, name);

    let service = ScaffoldService::new(config)?;

    let spinner = ui::create_spinner(&get_waiting_message().text);
    let content = service.generate_single_file(&file_type, &name, &spec).await;
    spinner.finish_and_clear();
    let content = content?;

    // The content itself is the deliverable; in quiet mode print it bare
    if ui::is_quiet_mode() {
        println!("{content}");
    } else {
        ui::print_bordered_content(&content);
    }

    if let Some(path) = save {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ui::print_success(&format!("Saved to {}", path.display()));
    }

    Ok(())
}
