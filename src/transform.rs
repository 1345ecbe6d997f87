//! Content sanitising applied to text files before they are fenced.
//!
//! Order is fixed: NUL bytes are stripped, triple backticks escaped, then whitespace is
//! optionally collapsed.

/// Extensions (with leading dot) whose meaning depends on whitespace.
pub const WHITESPACE_DEPENDENT_EXTENSIONS: &[&str] = &[
    ".py", ".yaml", ".yml", ".jade", ".haml", ".slim", ".coffee", ".pug", ".styl", ".gd",
];

const FENCE: &str = "```";
const ESCAPED_FENCE: &str = "\\`\\`\\`";

/// Removes every NUL character.
pub fn strip_null_bytes(content: &str) -> String {
    content.replace('\0', "")
}

/// Replaces each literal ```` ``` ```` with backslash-escaped backticks.
pub fn escape_triple_backticks(content: &str) -> String {
    content.replace(FENCE, ESCAPED_FENCE)
}

/// Collapses every run of whitespace to one space and trims both ends.
pub fn collapse_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether whitespace collapsing is allowed for a file with `extension`.
pub fn is_whitespace_dependent(extension: &str) -> bool {
    WHITESPACE_DEPENDENT_EXTENSIONS.contains(&extension)
}

/// Applies the content transforms to `raw`.
///
/// Callers report stripped NUL bytes; this function only removes them.
///
/// `extension` includes the leading dot (`".py"`), or is empty for files without one.
pub fn transform(raw: &str, extension: &str, remove_whitespace: bool) -> String {
    let mut content = escape_triple_backticks(&strip_null_bytes(raw));
    if remove_whitespace && !is_whitespace_dependent(extension) {
        content = collapse_whitespace(&content);
    }
    content
}
