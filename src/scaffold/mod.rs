mod cli;
pub mod extractor;
pub mod prompt;
pub mod service;
pub mod types;
pub mod writer;

pub use cli::{handle_file_command, handle_project_command, handle_views_command};
pub use extractor::extract_files;
pub use service::ScaffoldService;
pub use types::{ExtractedFile, FileSet, ProjectKind};
pub use writer::write_file_set;
