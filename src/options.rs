use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "codebase.md";
/// Name of the project-local ignore file read from the input directory.
pub const DEFAULT_IGNORE_FILE: &str = ".aidigestignore";
/// Output documents larger than this skip token estimation.
pub const MAX_OUTPUT_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the probe chunk marks the file as binary.
    Simple,
    /// Delegate to `content_inspector`.
    Accurate,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub use_default_ignores: bool,
    pub remove_whitespace: bool,
    pub ignore_file_name: String,
    pub binary_detection: BinaryDetection,
    pub follow_links: bool,
}
impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            use_default_ignores: true,
            remove_whitespace: false,
            ignore_file_name: DEFAULT_IGNORE_FILE.to_string(),
            binary_detection: BinaryDetection::Accurate,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DigestBuilder {
    options: DigestOptions,
}
impl DigestBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DigestOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn use_default_ignores(mut self, yes: bool) -> Self {
        self.options.use_default_ignores = yes;
        self
    }
    pub fn remove_whitespace(mut self, yes: bool) -> Self {
        self.options.remove_whitespace = yes;
        self
    }
    pub fn ignore_file_name(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_file_name = name.into();
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DigestOptions {
        self.options
    }
}
