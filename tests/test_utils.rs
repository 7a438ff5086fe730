//! Shared test infrastructure: canned responses and a mock generator.
#![allow(dead_code)] // compiled standalone as its own integration-test crate

use anyhow::Result;
use async_trait::async_trait;
use dotforge::config::Config;
use dotforge::llm::{GenerationRequest, TextGenerator};
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`TextGenerator`] that returns a canned response and records the
/// requests it receives, so service tests run without network access.
pub struct MockGenerator {
    response: String,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Arc<Self> {
        Arc::new(Self {
            response: response.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.lock().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Config pointing at ollama so no API key is needed anywhere in the tests
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.default_provider = "ollama".to_string();
    config
}

/// A small, realistic project-scaffold response: prose, two files, a fence
/// with a language tag
pub fn sample_project_response() -> &'static str {
    "Here is your project scaffold:\n\
     \n\
     FILE: Shop.csproj\n\
     ```xml\n\
     <Project Sdk=\"Microsoft.NET.Sdk.Web\">\n\
     </Project>\n\
     ```\n\
     \n\
     Next, the entry point:\n\
     \n\
     FILE: Program.cs\n\
     ```csharp\n\
     var builder = WebApplication.CreateBuilder(args);\n\
     var app = builder.Build();\n\
     app.Run();\n\
     ```\n\
     \n\
     That completes the scaffold.\n"
}
