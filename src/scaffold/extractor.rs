//! Extracts generated files from a model response.
//!
//! The response interleaves prose, `FILE: <path>` marker lines, and fenced
//! code blocks. A single forward scan with three pieces of state (current
//! path, line buffer, inside-fence flag) turns it into a [`FileSet`].

use super::types::FileSet;

/// Marker announcing the start of a new output file
const FILE_MARKER: &str = "FILE:";

/// Fenced-code-block delimiter, optionally followed by a language tag
const FENCE: &str = "```";

/// Parse generated files out of a model response.
///
/// Never fails: malformed input degrades to an empty or partial set. A later
/// marker with a path seen before overwrites the earlier record.
pub fn extract_files(response: &str) -> FileSet {
    let mut files = FileSet::new();

    let mut current_path: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_code_block = false;

    for line in response.lines() {
        if let Some(rest) = line.strip_prefix(FILE_MARKER) {
            // A new marker finalizes the previous record
            flush(&mut files, current_path.take(), &buffer);

            current_path = Some(rest.trim().to_string());
            buffer.clear();
            in_code_block = false;
        } else if line.starts_with(FENCE) && current_path.is_some() {
            // Unconditional toggle; delimiter lines are never content
            in_code_block = !in_code_block;
        } else if in_code_block && current_path.is_some() {
            buffer.push(line);
        }
        // Anything else is the model's prose and is discarded
    }

    // Flush the trailing record, terminated or not
    flush(&mut files, current_path, &buffer);

    files
}

/// Store an accumulated record. Records that never accumulated any lines are
/// dropped; accumulated content is trimmed of leading/trailing whitespace.
fn flush(files: &mut FileSet, path: Option<String>, buffer: &[&str]) {
    if let Some(path) = path
        && !buffer.is_empty()
    {
        files.insert(path, buffer.join("\n").trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_inside_code_block_still_starts_a_record() {
        // The marker check precedes the fence-content check
        let response = "FILE: a.cs\n```\nfirst\nFILE: b.cs\n```\nsecond\n```\n";
        let files = extract_files(response);
        assert_eq!(files.get("a.cs"), Some("first"));
        assert_eq!(files.get("b.cs"), Some("second"));
    }

    #[test]
    fn fence_with_language_tag_toggles() {
        let response = "FILE: x.cs\n```csharp\nvar x = 1;\n```\n";
        let files = extract_files(response);
        assert_eq!(files.get("x.cs"), Some("var x = 1;"));
    }

    #[test]
    fn fences_before_any_marker_are_ignored() {
        let response = "```\nloose code\n```\nFILE: x.cs\n```\nreal\n```\n";
        let files = extract_files(response);
        assert_eq!(files.len(), 1);
        assert_eq!(files.get("x.cs"), Some("real"));
    }

    #[test]
    fn blank_only_block_stores_empty_content() {
        let response = "FILE: x.cs\n```\n\n   \n```\n";
        let files = extract_files(response);
        assert_eq!(files.get("x.cs"), Some(""));
    }
}
