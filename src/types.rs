use crate::classify::Classification;
use serde::{Deserialize, Serialize};

/// A file that made it into the digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the input directory, `/`-separated.
    pub relative_path: String,
    pub classification: Classification,
    /// Transformed content for text files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileRecord {
    /// Extension without the leading dot, or `""`.
    pub fn extension(&self) -> &str {
        extension_of(&self.relative_path)
            .map(|ext| &ext[1..])
            .unwrap_or("")
    }
}

/// Extension with its leading dot, using the same rules as `Path::extension`:
/// a leading dot on the file name alone (`.env`) is not an extension.
pub(crate) fn extension_of(relative_path: &str) -> Option<&str> {
    let name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Where a single discovered file ended up.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Matched the default patterns, or is the output file itself.
    DefaultIgnored(String),
    /// Matched the project ignore file.
    CustomIgnored(String),
    Included(FileRecord),
    /// Could not be probed or read; the run carries on without it.
    Failed { path: String, reason: String },
}

/// The outcome of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    /// The assembled Markdown document.
    #[serde(skip_serializing, default)]
    pub document_text: String,
    pub total_files_found: usize,
    pub included_count: usize,
    pub default_ignored_count: usize,
    pub custom_ignored_count: usize,
    pub binary_or_svg_count: usize,
    pub failed_count: usize,
    /// Included paths in document order.
    pub included_file_paths: Vec<String>,
    /// `None` when the output exceeded [`MAX_OUTPUT_SIZE`](crate::MAX_OUTPUT_SIZE).
    pub estimated_token_count: Option<usize>,
    pub output_byte_size: u64,
}
