//! Gitignore-style path filtering.
//!
//! Two matchers are built per run: one from [`DEFAULT_IGNORES`] and one from the
//! project-local ignore file. Both are compiled with `ignore`'s gitignore engine, so
//! `*`, `**`, `!negation`, leading `/` anchors and trailing `/` directory rules behave
//! the way they do in a `.gitignore`. Later patterns take precedence over earlier ones.

use crate::error::DigestError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Built-in patterns for VCS metadata, dependency and build directories, lockfiles
/// and environment files.
pub const DEFAULT_IGNORES: &[&str] = &[
    // Node.js
    "node_modules",
    "package-lock.json",
    "npm-debug.log",
    "yarn.lock",
    "yarn-error.log",
    "pnpm-lock.yaml",
    "bun.lockb",
    "deno.lock",
    // PHP
    "vendor",
    "composer.lock",
    // Python
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".Python",
    "pip-log.txt",
    "pip-delete-this-directory.txt",
    ".venv",
    "venv",
    "ENV",
    "env",
    // Godot
    ".godot",
    "*.import",
    // Ruby
    "Gemfile.lock",
    ".bundle",
    // JVM
    "target",
    "*.class",
    ".gradle",
    "build",
    "pom.xml.tag",
    "pom.xml.releaseBackup",
    "pom.xml.versionsBackup",
    "pom.xml.next",
    // .NET
    "bin",
    "obj",
    "*.suo",
    "*.user",
    // Go
    "go.sum",
    // Rust
    "Cargo.lock",
    // VCS and OS metadata
    ".git",
    ".svn",
    ".hg",
    ".DS_Store",
    "Thumbs.db",
    // Environment files
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "*.env",
    "*.env.*",
    // Framework caches and build output
    ".svelte-kit",
    ".next",
    ".nuxt",
    ".vuepress",
    ".cache",
    "dist",
    "tmp",
    ".turbo",
    ".vercel",
    ".netlify",
    // Previous digests and licenses
    "codebase.md",
    "LICENSE",
];

/// A compiled, ordered set of ignore patterns.
#[derive(Debug, Clone)]
pub struct Matcher {
    inner: Gitignore,
}

impl Matcher {
    /// Returns `true` if `relative_path` (a file path relative to the input directory)
    /// or any of its parent directories is ignored.
    ///
    /// Ancestor directories are checked first, outermost to innermost: once a directory
    /// is excluded nothing beneath it can be re-included by a negated pattern.
    pub fn matches(&self, relative_path: &str) -> bool {
        let path = Path::new(relative_path);
        if path.has_root() || self.is_empty() {
            return false;
        }
        let mut ancestors: Vec<&Path> = path
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect();
        ancestors.reverse();
        if ancestors
            .into_iter()
            .any(|dir| self.inner.matched(dir, true).is_ignore())
        {
            return true;
        }
        self.inner.matched(path, false).is_ignore()
    }

    /// Number of patterns that compiled successfully.
    pub fn len(&self) -> usize {
        self.inner.num_ignores() as usize + self.inner.num_whitelists() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compiles `patterns` in order into a [`Matcher`].
///
/// Patterns that fail to parse are logged and skipped; the remaining set still compiles.
///
/// # Errors
///
/// Returns [`DigestError::Pattern`] if the final matcher cannot be built.
pub fn compile<I, S>(patterns: I) -> Result<Matcher, DigestError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GitignoreBuilder::new(".");
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if let Err(e) = builder.add_line(None, pattern) {
            tracing::warn!("Skipping invalid ignore pattern '{}': {}", pattern, e);
        }
    }
    let inner = builder
        .build()
        .map_err(|e| DigestError::Pattern(format!("Failed to build ignore matcher: {}", e)))?;
    Ok(Matcher { inner })
}

/// Compiles the built-in [`DEFAULT_IGNORES`] list.
pub fn default_matcher() -> Result<Matcher, DigestError> {
    compile(DEFAULT_IGNORES)
}

/// Reads the ignore file `file_name` inside `dir`.
///
/// Blank lines and lines starting with `#` are dropped. A missing file yields an empty
/// list.
///
/// # Errors
///
/// Any I/O error other than "not found" is returned as [`DigestError::Io`].
pub fn load_ignore_file(dir: &Path, file_name: &str) -> Result<Vec<String>, DigestError> {
    let path = dir.join(file_name);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No {} file found in {}.", file_name, dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(DigestError::io(path, e)),
    };
    tracing::info!("Found {} file in {}.", file_name, dir.display());
    let patterns: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if !patterns.is_empty() {
        tracing::info!("Ignore patterns from {}:", file_name);
        for pattern in &patterns {
            tracing::info!("  - {}", pattern);
        }
    }
    Ok(patterns)
}
