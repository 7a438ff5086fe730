//! Dotforge - AI-powered ASP.NET Core project scaffolding
//!
//! This library prompts an LLM provider for the source files of a web project
//! scaffold, extracts the `FILE:` + fenced-code-block convention from the
//! response, and writes the generated files to disk.

// Allow certain clippy warnings that are either stylistic or from external dependencies
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::future_not_send)] // From llm crate internals, can't fix
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod instruction_presets;
pub mod llm;
pub mod logger;
pub mod messages;
pub mod providers;
pub mod scaffold;
pub mod token_optimizer;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::{Config, ProviderConfig};
pub use providers::Provider;

// Re-exports from the scaffold module
pub use scaffold::{FileSet, ProjectKind, ScaffoldService, extract_files, write_file_set};
