use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of project scaffold to request from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// RESTful Web API project
    WebApi,
    /// MVC web application with Razor views
    Mvc,
}

impl ProjectKind {
    /// Human-readable name, as it appears in the prompt text
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WebApi => "Web API",
            Self::Mvc => "MVC Web Application",
        }
    }

    /// MVC projects also get Razor views and static assets
    pub const fn includes_views(&self) -> bool {
        matches!(self, Self::Mvc)
    }

    /// Controller requested in the scaffold file list
    pub const fn controller_file(&self) -> &'static str {
        match self {
            Self::WebApi => "WeatherForecastController.cs",
            Self::Mvc => "HomeController.cs",
        }
    }

    /// Model requested in the scaffold file list
    pub const fn model_file(&self) -> &'static str {
        match self {
            Self::WebApi => "WeatherForecast.cs",
            Self::Mvc => "ErrorViewModel.cs",
        }
    }

    pub const fn default_project_name(&self) -> &'static str {
        match self {
            Self::WebApi => "MyApiProject",
            Self::Mvc => "MyMvcProject",
        }
    }

    pub const fn default_output_dir(&self) -> &'static str {
        match self {
            Self::WebApi => "./GeneratedApiProject",
            Self::Mvc => "./GeneratedMvcProject",
        }
    }
}

/// One extracted file: a relative path and its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFile {
    pub path: String,
    pub content: String,
}

/// The mapping from relative path to extracted content produced by one
/// extraction pass. Keys are unique; inserting an existing path replaces its
/// content in place. Iteration follows first-insertion order so write
/// reporting is deterministic, but consumers must not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<ExtractedFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; a later insert with the same path overwrites the earlier one
    pub fn insert(&mut self, path: String, content: String) {
        if let Some(existing) = self.files.iter_mut().find(|f| f.path == path) {
            existing.content = content;
        } else {
            self.files.push(ExtractedFile { path, content });
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a ExtractedFile;
    type IntoIter = std::slice::Iter<'a, ExtractedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
