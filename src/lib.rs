//! # aidigest
//!
//! `aidigest` walks a directory tree and concatenates the text files it finds into a
//! single Markdown document, one fenced section per file, so a whole codebase can be
//! handed to a language model or a reviewer in one piece.
//!
//! Each file goes through the same pipeline: it is checked against the built-in ignore
//! list and the project's `.aidigestignore`, probed for binary content, and either
//! sanitised and fenced or summarised with a one-line type description. The run
//! reports per-disposition counts and an approximate token count for the result.
//!
//! # Features
//!
//! - `parallel`: Classifies and reads files on a Rayon pool. Output order is unchanged.
//!
//! # Example
//!
//! ```no_run
//! use aidigest::{DigestBuilder, aggregate};
//!
//! let options = DigestBuilder::new(".")
//!     .output("codebase.md")
//!     .remove_whitespace(true)
//!     .build();
//!
//! let result = aggregate(&options).expect("Failed to aggregate directory");
//!
//! println!("Included {} files", result.included_count);
//! if let Some(tokens) = result.estimated_token_count {
//!     println!("~{} tokens", tokens);
//! }
//! ```

pub mod classify;
mod engine;
mod error;
pub mod ignore_rules;
mod options;
pub mod output;
pub mod sort;
pub mod tokens;
pub mod transform;
mod types;

pub use classify::Classification;
pub use engine::aggregate;
pub use error::DigestError;
pub use ignore_rules::Matcher;
pub use options::{
    BinaryDetection, DEFAULT_IGNORE_FILE, DEFAULT_OUTPUT_FILE, DigestBuilder, DigestOptions,
    MAX_OUTPUT_SIZE,
};
pub use types::{AggregationResult, FileOutcome, FileRecord};
