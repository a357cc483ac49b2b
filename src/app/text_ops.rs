use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Untitled" if it can't be
/// extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}
