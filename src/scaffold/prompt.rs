//! Prompt construction for scaffold generation.
//!
//! Static templates with substituted parameters. The user prompts spell out
//! the `FILE:` + fenced-code-block response format that the extractor
//! recognizes; the system prompts set the generation policy and carry the
//! user's effective instructions.

use super::types::ProjectKind;
use crate::common::get_combined_instructions;
use crate::config::Config;

/// Razor views and static assets added to the file list for MVC projects
const VIEW_FILES: &str = "
7. Views/_ViewStart.cshtml
8. Views/_ViewImports.cshtml
9. Views/Shared/_Layout.cshtml
10. Views/Home/Index.cshtml
11. Views/Home/Privacy.cshtml
12. wwwroot/css/site.css
13. wwwroot/js/site.js";

pub fn create_project_system_prompt(config: &Config) -> String {
    let mut prompt = String::from(
        "You are an expert ASP.NET Core developer specializing in project scaffolding.
When generating files:
- Create complete, working code with no placeholders
- Use proper .NET 8 conventions and modern C# features
- Include all necessary using statements
- Follow RESTful API best practices for Web APIs
- For MVC projects, generate complete Razor views with proper layout and styling
- Include proper dependency injection setup
- Add comprehensive error handling
- Use async/await patterns correctly
- Generate production-ready configuration files
- For Razor views, use Bootstrap 5 for styling and include proper tag helpers",
    );

    prompt.push_str(get_combined_instructions(config).as_str());

    prompt
}

pub fn create_project_user_prompt(kind: ProjectKind, project_name: &str) -> String {
    let view_files = if kind.includes_views() { VIEW_FILES } else { "" };

    format!(
        r#"Generate a {} ASP.NET Core project named '{}'.

For each file, use this exact format:
FILE: <relative/path/to/file>
```
<file content>
```

Generate these files:
1. {}.csproj
2. Program.cs
3. appsettings.json
4. appsettings.Development.json
5. Controllers/{}
6. Models/{}{}

Make it production-ready with proper namespaces and .NET 8 patterns."#,
        kind.display_name(),
        project_name,
        project_name,
        kind.controller_file(),
        kind.model_file(),
        view_files
    )
}

pub fn create_views_system_prompt(config: &Config) -> String {
    let mut prompt = String::from(
        "You are an expert ASP.NET Core MVC developer. Generate complete, production-ready Razor views with:
- Bootstrap 5 styling and components
- Proper model binding and tag helpers
- Client and server-side validation
- Responsive design
- Accessibility features (ARIA labels, proper form structure)
- CSRF protection
- Proper error handling and user feedback
- Clean, semantic HTML
- Modern C# and Razor syntax",
    );

    prompt.push_str(get_combined_instructions(config).as_str());

    prompt
}

pub fn create_views_user_prompt(entity_name: &str, project_name: &str) -> String {
    format!(
        r#"Generate complete CRUD Razor views for an entity named '{entity_name}' in ASP.NET Core MVC.

For each file, use this format:
FILE: <filename>
```
<file content>
```

Generate these view files:
1. Views/{entity_name}/Index.cshtml (list all items with search and pagination)
2. Views/{entity_name}/Details.cshtml (show single item details)
3. Views/{entity_name}/Create.cshtml (create form with validation)
4. Views/{entity_name}/Edit.cshtml (edit form with validation)
5. Views/{entity_name}/Delete.cshtml (delete confirmation)

Also generate:
6. Controllers/{entity_name}Controller.cs (full CRUD controller)
7. Models/{entity_name}.cs (model with data annotations)
8. Models/{entity_name}ViewModel.cs (view model for forms)

The files belong to the '{project_name}' project; use its name for namespaces.
Use Bootstrap 5, proper tag helpers, validation, and modern Razor syntax."#
    )
}

pub fn create_file_system_prompt(config: &Config) -> String {
    let mut prompt = String::from(
        "You are an expert ASP.NET Core developer. Generate clean, production-ready code following best practices:
- Use .NET 8 patterns and conventions
- Include proper error handling
- Use async/await correctly
- Follow SOLID principles
- Include necessary using statements
- Use meaningful variable names",
    );

    prompt.push_str(get_combined_instructions(config).as_str());

    prompt
}

pub fn create_file_user_prompt(file_type: &str, file_name: &str, specifications: &str) -> String {
    format!(
        "Generate a {file_type} file named '{file_name}' for ASP.NET Core.

Specifications:
{specifications}

Provide the complete file content with proper namespaces and using statements."
    )
}
