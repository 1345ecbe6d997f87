//! Markdown rendering and run reporting.
//!
//! Each included file becomes one section: a level-1 heading with its relative path,
//! then either a fenced block tagged with the file extension or a one-line type
//! description for binary and SVG files.

use crate::classify::Classification;
use crate::error::DigestError;
use crate::options::{DigestOptions, MAX_OUTPUT_SIZE};
use crate::types::{AggregationResult, FileRecord};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Appends the Markdown section for `record` to `out`.
pub fn push_section(out: &mut String, record: &FileRecord) {
    let _ = write!(out, "# {}\n\n", record.relative_path);
    match &record.classification {
        Classification::Text => {
            let _ = writeln!(out, "```{}", record.extension());
            out.push_str(record.content.as_deref().unwrap_or(""));
            out.push_str("\n```\n\n");
        }
        Classification::SvgImage => {
            let _ = write!(
                out,
                "This is a file of the type: {}\n\n",
                crate::classify::SVG_LABEL
            );
        }
        Classification::Binary(label) => {
            let _ = write!(out, "This is a binary file of the type: {}\n\n", label);
        }
    }
}

/// Writes `document` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_document(path: &Path, document: &str) -> Result<(), DigestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DigestError::io(parent, e))?;
    }
    fs::write(path, document).map_err(|e| DigestError::io(path, e))?;
    Ok(())
}

/// Human-readable summary of a finished run.
pub fn summary_lines(result: &AggregationResult, options: &DigestOptions) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Files aggregated successfully into {}",
            options.output.display()
        ),
        format!("Total files found: {}", result.total_files_found),
        format!("Files included in output: {}", result.included_count),
    ];
    if options.use_default_ignores {
        lines.push(format!(
            "Files ignored by default patterns: {}",
            result.default_ignored_count
        ));
    }
    if result.custom_ignored_count > 0 {
        lines.push(format!(
            "Files ignored by {}: {}",
            options.ignore_file_name, result.custom_ignored_count
        ));
    }
    if result.failed_count > 0 {
        lines.push(format!("Files skipped due to errors: {}", result.failed_count));
    }
    lines.push(format!(
        "Binary and SVG files included: {}",
        result.binary_or_svg_count
    ));
    match result.estimated_token_count {
        Some(tokens) => lines.push(format!("Estimated token count: {}", tokens)),
        None => lines.push(size_warning(result.output_byte_size)),
    }
    lines
}

/// Warning emitted instead of a token estimate for oversized output.
pub fn size_warning(bytes: u64) -> String {
    format!(
        "Warning: Output file size ({:.2} MB) exceeds {} MB.",
        bytes as f64 / 1024.0 / 1024.0,
        MAX_OUTPUT_SIZE / 1024 / 1024
    )
}

/// Numbered listing of the included files.
pub fn included_file_lines(result: &AggregationResult) -> Vec<String> {
    result
        .included_file_paths
        .iter()
        .enumerate()
        .map(|(index, path)| format!("{}. {}", index + 1, path))
        .collect()
}
