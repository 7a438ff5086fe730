use crate::commands;
use crate::common::CommonParams;
use crate::log_debug;
use crate::providers::Provider;
use crate::scaffold::{
    ProjectKind, handle_file_command, handle_project_command, handle_views_command,
};
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;
use std::path::PathBuf;

const LOG_FILE: &str = "dotforge-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Dotforge: AI-powered ASP.NET Core project scaffolding",
    long_about = "Dotforge prompts an LLM provider for complete ASP.NET Core project scaffolds, CRUD view sets, and single files, then writes the generated sources to disk.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, per-file reports, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
#[command(subcommand_negates_reqs = true)]
#[command(subcommand_precedence_over_arg = true)]
pub enum Commands {
    // Feature commands first
    /// Generate a complete project scaffold
    #[command(
        about = "Generate a complete ASP.NET Core project scaffold",
        long_about = "Prompt the configured LLM provider for a complete ASP.NET Core project (csproj, Program.cs, configuration, controllers, models, and for MVC projects the Razor views) and write the generated files to the output directory.",
        after_help = get_dynamic_help()
    )]
    Project {
        #[command(flatten)]
        common: CommonParams,

        /// Kind of project to generate
        #[arg(short, long, value_enum, help = "Kind of project to generate")]
        kind: ProjectKind,

        /// Project name
        #[arg(
            short,
            long,
            help = "Project name (default: MyApiProject or MyMvcProject)"
        )]
        name: Option<String>,

        /// Output directory for the generated files
        #[arg(
            short,
            long,
            help = "Output directory (default: ./GeneratedApiProject or ./GeneratedMvcProject)"
        )]
        output: Option<PathBuf>,
    },

    /// Generate CRUD views for an entity
    #[command(
        about = "Generate CRUD Razor views for an entity",
        long_about = "Prompt the configured LLM provider for the five CRUD Razor views of an entity plus its controller, model, and view model, and write the generated files to the output directory."
    )]
    Views {
        #[command(flatten)]
        common: CommonParams,

        /// Entity name (e.g. Product, Customer)
        #[arg(short, long, help = "Entity name (e.g. Product, Customer)")]
        entity: String,

        /// Project name used for namespaces
        #[arg(
            short,
            long,
            default_value = "MyProject",
            help = "Project name used for namespaces"
        )]
        project: String,

        /// Output directory for the generated files
        #[arg(
            short,
            long,
            default_value = "./GeneratedViews",
            help = "Output directory for the generated files"
        )]
        output: PathBuf,
    },

    /// Generate a single file from a specification
    #[command(
        about = "Generate a single file from a specification",
        long_about = "Prompt the configured LLM provider for one file (Controller, Model, View, Service, Repository, ...) described by free-form specifications. Prints the content; use --save to also write it to disk."
    )]
    File {
        #[command(flatten)]
        common: CommonParams,

        /// File type (Controller, Model, View, Service, Repository, ...)
        #[arg(
            short = 't',
            long = "file-type",
            help = "File type (Controller, Model, View, Service, Repository, ...)"
        )]
        file_type: String,

        /// File name
        #[arg(short, long, help = "File name (e.g. ProductsController.cs)")]
        name: String,

        /// Free-form specifications describing the file
        #[arg(short, long, help = "Free-form specifications describing the file")]
        spec: String,

        /// Save the generated content to this path
        #[arg(long, help = "Save the generated content to this path")]
        save: Option<PathBuf>,
    },

    // Configuration and utility commands
    /// Configure Dotforge settings and providers
    #[command(about = "Configure Dotforge settings and providers")]
    Config {
        #[command(flatten)]
        common: CommonParams,

        /// Set API key for the specified provider
        #[arg(long, help = "Set API key for the specified provider")]
        api_key: Option<String>,

        /// Set model for the specified provider
        #[arg(long, help = "Set model for the specified provider")]
        model: Option<String>,

        /// Set token limit for the specified provider
        #[arg(long, help = "Set token limit for the specified provider")]
        token_limit: Option<usize>,

        /// Set additional parameters for the specified provider
        #[arg(
            long,
            help = "Set additional parameters for the specified provider (key=value)"
        )]
        param: Option<Vec<String>>,
    },

    /// Create or update a project-specific configuration file
    #[command(
        about = "Manage project-specific configuration",
        long_about = "Create or update a project-specific .dotforge.toml file in the working directory. API keys are never written to project configuration files."
    )]
    ProjectConfig {
        #[command(flatten)]
        common: CommonParams,

        /// Set model for the specified provider
        #[arg(long, help = "Set model for the specified provider")]
        model: Option<String>,

        /// Set token limit for the specified provider
        #[arg(long, help = "Set token limit for the specified provider")]
        token_limit: Option<usize>,

        /// Set additional parameters for the specified provider
        #[arg(
            long,
            help = "Set additional parameters for the specified provider (key=value)"
        )]
        param: Option<Vec<String>>,

        /// Print the current project configuration
        #[arg(short, long, help = "Print the current project configuration")]
        print: bool,
    },

    /// List available instruction presets
    #[command(about = "List available instruction presets")]
    ListPresets,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including available LLM providers
fn get_dynamic_help() -> String {
    let mut providers = Provider::all_names();
    providers.sort_unstable();

    let providers_list = providers
        .iter()
        .map(|p| format!("{}", p.bold()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nAvailable LLM Providers: {providers_list}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::init().map_err(|e| anyhow::anyhow!("{e}"))?;
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["dotforge", "--help"]);
        Ok(())
    }
}

/// Dispatch a parsed subcommand
async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Project {
            common,
            kind,
            name,
            output,
        } => {
            log_debug!(
                "Handling 'project' command with common: {:?}, kind: {:?}, name: {:?}, output: {:?}",
                common,
                kind,
                name,
                output
            );
            ui::print_version(crate_version!());
            ui::print_newline();
            handle_project_command(common, kind, name, output).await
        }
        Commands::Views {
            common,
            entity,
            project,
            output,
        } => {
            log_debug!(
                "Handling 'views' command with common: {:?}, entity: {}, project: {}, output: {:?}",
                common,
                entity,
                project,
                output
            );
            ui::print_version(crate_version!());
            ui::print_newline();
            handle_views_command(common, entity, project, output).await
        }
        Commands::File {
            common,
            file_type,
            name,
            spec,
            save,
        } => {
            log_debug!(
                "Handling 'file' command with common: {:?}, file_type: {}, name: {}, save: {:?}",
                common,
                file_type,
                name,
                save
            );
            handle_file_command(common, file_type, name, spec, save).await
        }
        Commands::Config {
            common,
            api_key,
            model,
            token_limit,
            param,
        } => commands::handle_config_command(&common, api_key, model, token_limit, param),
        Commands::ProjectConfig {
            common,
            model,
            token_limit,
            param,
            print,
        } => commands::handle_project_config_command(&common, model, token_limit, param, print),
        Commands::ListPresets => commands::handle_list_presets_command(),
    }
}
