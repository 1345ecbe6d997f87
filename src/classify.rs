//! Text/binary classification of files.

use crate::error::DigestError;
use crate::options::BinaryDetection;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PROBE_SIZE: u64 = 4096;

/// Label used for SVG files.
pub const SVG_LABEL: &str = "SVG Image";
/// Label used for binary files with no more specific entry.
pub const GENERIC_BINARY_LABEL: &str = "Binary";

/// How a file is represented in the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Readable content, included inside a fenced code block.
    Text,
    /// Binary content, described by a human-readable type label.
    Binary(String),
    /// SVG markup; always described rather than inlined.
    SvgImage,
}

impl Classification {
    pub fn is_text(&self) -> bool {
        matches!(self, Classification::Text)
    }
}

/// Maps a file extension to a human-readable type label.
///
/// Unknown extensions map to [`GENERIC_BINARY_LABEL`].
pub fn file_type_label(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" => "Image",
        "svg" => SVG_LABEL,
        "wasm" => "WebAssembly",
        "pdf" => "PDF",
        "doc" | "docx" => "Word Document",
        "xls" | "xlsx" => "Excel Spreadsheet",
        "ppt" | "pptx" => "PowerPoint Presentation",
        "zip" | "rar" | "7z" => "Compressed Archive",
        "exe" => "Executable",
        "dll" => "Dynamic-link Library",
        "so" => "Shared Object",
        "dylib" => "Dynamic Library",
        _ => GENERIC_BINARY_LABEL,
    }
}

/// Inspects the leading bytes of `path` and reports whether they look binary.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the file cannot be opened or read.
pub fn is_binary_file(path: &Path, detection: BinaryDetection) -> Result<bool, DigestError> {
    let file = File::open(path).map_err(|e| DigestError::io(path, e))?;
    let mut probe = Vec::with_capacity(PROBE_SIZE as usize);
    file.take(PROBE_SIZE)
        .read_to_end(&mut probe)
        .map_err(|e| DigestError::io(path, e))?;
    let is_binary = match detection {
        BinaryDetection::Simple => probe.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&probe).is_binary(),
    };
    Ok(is_binary)
}

/// Classifies the file at `path`.
///
/// SVG files are always [`Classification::SvgImage`]. Files whose extension has a known
/// binary label are binary even if their bytes look like text; everything else is
/// decided by the byte probe.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the byte probe fails.
pub fn classify(path: &Path, detection: BinaryDetection) -> Result<Classification, DigestError> {
    let is_binary = is_binary_file(path, detection)?;
    let label = file_type_label(path);
    if label == SVG_LABEL {
        return Ok(Classification::SvgImage);
    }
    if is_binary || label != GENERIC_BINARY_LABEL {
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(Classification::Binary(label.to_string()));
    }
    Ok(Classification::Text)
}
