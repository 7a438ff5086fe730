//! Persists an extracted [`FileSet`] to disk.
//!
//! Each record is written to `<output_root>/<relative_path>`, creating
//! missing directories and overwriting existing files without confirmation.
//! Relative paths that would land outside the output root are rejected;
//! files written before a failure stay on disk.

use super::types::FileSet;
use crate::log_debug;
use crate::ui;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Write every record of the set under `output_root`, reporting each write.
///
/// Returns the paths written, in set order. Fails on the first bad path or
/// I/O error; earlier files are not rolled back.
pub fn write_file_set(files: &FileSet, output_root: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_root)
        .with_context(|| format!("Failed to create output directory {}", output_root.display()))?;

    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target = resolve_target(output_root, &file.path)
            .with_context(|| format!("Refusing to write '{}'", file.path))?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(&target, &file.content)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        log_debug!("Wrote {} ({} bytes)", target.display(), file.content.len());
        ui::print_success(&format!("✓ Generated: {}", file.path));
        written.push(target);
    }

    Ok(written)
}

/// Resolve a relative path against the output root, rejecting anything that
/// could escape it: empty paths, absolute paths, and parent-directory
/// traversal segments.
fn resolve_target(root: &Path, relative: &str) -> Result<PathBuf> {
    if relative.trim().is_empty() {
        bail!("empty file path");
    }

    let relative_path = Path::new(relative);
    if relative_path.is_absolute() {
        bail!("absolute paths are not allowed");
    }

    for component in relative_path.components() {
        match component {
            Component::ParentDir => bail!("path traversal ('..') is not allowed"),
            Component::Prefix(_) | Component::RootDir => {
                bail!("absolute paths are not allowed")
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(root.join(relative_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_parent_traversal() {
        assert!(resolve_target(Path::new("/tmp/out"), "../escape.cs").is_err());
        assert!(resolve_target(Path::new("/tmp/out"), "a/../../escape.cs").is_err());
    }

    #[test]
    fn rejects_absolute_and_empty_paths() {
        assert!(resolve_target(Path::new("/tmp/out"), "/etc/passwd").is_err());
        assert!(resolve_target(Path::new("/tmp/out"), "").is_err());
        assert!(resolve_target(Path::new("/tmp/out"), "   ").is_err());
    }

    #[test]
    fn accepts_nested_relative_paths() {
        let target = resolve_target(Path::new("/tmp/out"), "Controllers/HomeController.cs")
            .expect("plain relative path");
        assert_eq!(target, PathBuf::from("/tmp/out/Controllers/HomeController.cs"));
    }
}
