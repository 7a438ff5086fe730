use dotforge::scaffold::FileSet;
use dotforge::write_file_set;
use std::fs;
use tempfile::TempDir;

fn file_set(entries: &[(&str, &str)]) -> FileSet {
    let mut files = FileSet::new();
    for (path, content) in entries {
        files.insert((*path).to_string(), (*content).to_string());
    }
    files
}

#[test]
fn test_writes_files_and_creates_nested_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let files = file_set(&[
        ("Shop.csproj", "<Project />"),
        ("Controllers/HomeController.cs", "class HomeController {}"),
        ("Views/Home/Index.cshtml", "<h1>Home</h1>"),
    ]);

    let written = write_file_set(&files, temp_dir.path()).expect("write should succeed");

    assert_eq!(written.len(), 3);
    let controller = temp_dir.path().join("Controllers/HomeController.cs");
    assert_eq!(
        fs::read_to_string(controller).expect("controller should exist"),
        "class HomeController {}"
    );
    let view = temp_dir.path().join("Views/Home/Index.cshtml");
    assert_eq!(
        fs::read_to_string(view).expect("view should exist"),
        "<h1>Home</h1>"
    );
}

#[test]
fn test_overwrites_existing_files_without_confirmation() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let target = temp_dir.path().join("Program.cs");
    fs::write(&target, "old content").expect("seed file");

    let files = file_set(&[("Program.cs", "new content")]);
    write_file_set(&files, temp_dir.path()).expect("write should succeed");

    assert_eq!(
        fs::read_to_string(&target).expect("file should exist"),
        "new content"
    );
}

#[test]
fn test_rejects_parent_directory_traversal() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let files = file_set(&[("../escape.cs", "gotcha")]);

    let result = write_file_set(&files, temp_dir.path());

    assert!(result.is_err());
    assert!(!temp_dir.path().parent().expect("parent").join("escape.cs").exists());
}

#[test]
fn test_rejects_absolute_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let files = file_set(&[("/etc/dotforge-should-not-exist", "nope")]);

    assert!(write_file_set(&files, temp_dir.path()).is_err());
}

#[test]
fn test_partial_output_survives_a_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    // First record is fine, second is rejected; no rollback of the first
    let files = file_set(&[("good.cs", "kept"), ("../bad.cs", "rejected")]);

    let result = write_file_set(&files, temp_dir.path());

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("good.cs")).expect("good.cs should exist"),
        "kept"
    );
}

#[test]
fn test_creates_the_output_root_itself() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let root = temp_dir.path().join("Generated/ApiProject");
    let files = file_set(&[("appsettings.json", "{}")]);

    write_file_set(&files, &root).expect("write should succeed");

    assert!(root.join("appsettings.json").exists());
}

#[test]
fn test_empty_set_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let written = write_file_set(&FileSet::new(), temp_dir.path()).expect("write should succeed");
    assert!(written.is_empty());
}
