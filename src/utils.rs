/*!
 * Utility functions for dumpmd
 */

use std::path::{Component, Path, PathBuf};

/// Directory under the home directory that receives default output
pub const DEFAULT_OUTPUT_DIR: &str = "Downloads";

/// Turn an input path into a flat file name: drive colons dropped,
/// separators replaced by underscores
pub fn sanitize_output_name(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != ':')
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// `<home>/Downloads/<sanitized input>.md`
pub fn default_output_path(home: &Path, input: &str) -> PathBuf {
    home.join(DEFAULT_OUTPUT_DIR)
        .join(format!("{}.md", sanitize_output_name(input)))
}

/// Header path for a file: the root folder name followed by the relative
/// path, always `/`-separated
pub fn display_path(root_name: &str, rel_path: &Path) -> String {
    let mut out = String::from(root_name);
    for component in rel_path.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
