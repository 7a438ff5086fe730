use dotforge::config::Config;
use dotforge::scaffold::ProjectKind;
use dotforge::scaffold::prompt::{
    create_file_system_prompt, create_file_user_prompt, create_project_system_prompt,
    create_project_user_prompt, create_views_system_prompt, create_views_user_prompt,
};

#[test]
fn test_project_prompt_states_the_response_format() {
    let prompt = create_project_user_prompt(ProjectKind::WebApi, "ShopApi");

    assert!(prompt.contains("FILE: <relative/path/to/file>"));
    assert!(prompt.contains("```"));
}

#[test]
fn test_web_api_prompt_requests_api_files() {
    let prompt = create_project_user_prompt(ProjectKind::WebApi, "ShopApi");

    assert!(prompt.contains("Web API"));
    assert!(prompt.contains("ShopApi.csproj"));
    assert!(prompt.contains("Controllers/WeatherForecastController.cs"));
    assert!(prompt.contains("Models/WeatherForecast.cs"));
    assert!(!prompt.contains("Views/"));
}

#[test]
fn test_mvc_prompt_adds_razor_views() {
    let prompt = create_project_user_prompt(ProjectKind::Mvc, "ShopWeb");

    assert!(prompt.contains("MVC Web Application"));
    assert!(prompt.contains("Controllers/HomeController.cs"));
    assert!(prompt.contains("Models/ErrorViewModel.cs"));
    assert!(prompt.contains("Views/Shared/_Layout.cshtml"));
    assert!(prompt.contains("wwwroot/css/site.css"));
    assert!(prompt.contains("wwwroot/js/site.js"));
}

#[test]
fn test_views_prompt_covers_crud_and_supporting_files() {
    let prompt = create_views_user_prompt("Product", "ShopWeb");

    for view in ["Index", "Details", "Create", "Edit", "Delete"] {
        assert!(prompt.contains(&format!("Views/Product/{view}.cshtml")));
    }
    assert!(prompt.contains("Controllers/ProductController.cs"));
    assert!(prompt.contains("Models/Product.cs"));
    assert!(prompt.contains("Models/ProductViewModel.cs"));
    assert!(prompt.contains("ShopWeb"));
}

#[test]
fn test_file_prompt_carries_the_specifications() {
    let prompt = create_file_user_prompt(
        "Controller",
        "OrdersController.cs",
        "Expose GET and POST endpoints for orders",
    );

    assert!(prompt.contains("Controller"));
    assert!(prompt.contains("OrdersController.cs"));
    assert!(prompt.contains("Expose GET and POST endpoints for orders"));
}

#[test]
fn test_system_prompts_include_custom_instructions() {
    let mut config = Config::default();
    config.instructions = "Always target .NET 8 LTS".to_string();

    for prompt in [
        create_project_system_prompt(&config),
        create_views_system_prompt(&config),
        create_file_system_prompt(&config),
    ] {
        assert!(prompt.contains("Always target .NET 8 LTS"));
    }
}

#[test]
fn test_system_prompts_include_preset_instructions() {
    let mut config = Config::default();
    config.instruction_preset = "minimal".to_string();

    let prompt = create_project_system_prompt(&config);
    assert!(prompt.contains("Keep every file as small as possible"));
}

#[test]
fn test_temp_preset_wins_over_configured_preset() {
    let mut config = Config::default();
    config.instruction_preset = "minimal".to_string();
    config.set_temp_preset(Some("documented".to_string()));

    let prompt = create_project_system_prompt(&config);
    assert!(prompt.contains("XML documentation comments"));
    assert!(!prompt.contains("Keep every file as small as possible"));
}
