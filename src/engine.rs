use crate::classify::{Classification, classify};
use crate::error::DigestError;
use crate::ignore_rules::{Matcher, compile, default_matcher, load_ignore_file};
use crate::options::{DigestOptions, MAX_OUTPUT_SIZE};
use crate::output::{push_section, size_warning, write_document};
use crate::sort::natural_cmp;
use crate::tokens;
use crate::transform::transform;
use crate::types::{AggregationResult, FileOutcome, FileRecord, extension_of};
use ignore::WalkBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &DigestOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        Self {
            inner: builder.build(),
        }
    }
    fn collect_files(self) -> Result<Vec<PathBuf>, DigestError> {
        let mut files = Vec::new();
        for result in self.inner {
            let entry = result.map_err(|e| DigestError::Walk(e.to_string()))?;
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
/// Immutable per-run state shared by every file decision.
struct RunContext<'a> {
    options: &'a DigestOptions,
    output_relative: Option<String>,
    ignore_file_relative: String,
    default_ignores: Option<Matcher>,
    custom_ignores: Matcher,
}
impl RunContext<'_> {
    fn dispose(&self, path: &Path, relative: String) -> FileOutcome {
        let _span = tracing::info_span!("file", path = %relative).entered();
        if self.output_relative.as_deref() == Some(relative.as_str())
            || self
                .default_ignores
                .as_ref()
                .is_some_and(|m| m.matches(&relative))
        {
            tracing::debug!("ignored by default patterns");
            return FileOutcome::DefaultIgnored(relative);
        }
        if relative == self.ignore_file_relative || self.custom_ignores.matches(&relative) {
            tracing::debug!("ignored by {}", self.options.ignore_file_name);
            return FileOutcome::CustomIgnored(relative);
        }
        match self.read_record(path, &relative) {
            Ok((classification, content)) => FileOutcome::Included(FileRecord {
                relative_path: relative,
                classification,
                content,
            }),
            Err(e) => {
                tracing::warn!("Error processing file {}: {}", relative, e);
                FileOutcome::Failed {
                    path: relative,
                    reason: e.to_string(),
                }
            }
        }
    }
    fn read_record(
        &self,
        path: &Path,
        relative: &str,
    ) -> Result<(Classification, Option<String>), DigestError> {
        let classification = classify(path, self.options.binary_detection)?;
        if !classification.is_text() {
            return Ok((classification, None));
        }
        let bytes = fs::read(path).map_err(|e| DigestError::io(path, e))?;
        let raw = String::from_utf8_lossy(&bytes);
        if raw.contains('\0') {
            tracing::warn!("File {} contains null bytes; stripping them.", relative);
        }
        let extension = extension_of(relative).unwrap_or("");
        let content = transform(&raw, extension, self.options.remove_whitespace);
        Ok((classification, Some(content)))
    }
}
/// Running totals and the document under construction.
#[derive(Default)]
struct Accumulator {
    document: String,
    included_count: usize,
    default_ignored_count: usize,
    custom_ignored_count: usize,
    binary_or_svg_count: usize,
    failed_count: usize,
    included_file_paths: Vec<String>,
}
impl Accumulator {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::DefaultIgnored(_) => self.default_ignored_count += 1,
            FileOutcome::CustomIgnored(_) => self.custom_ignored_count += 1,
            FileOutcome::Failed { .. } => self.failed_count += 1,
            FileOutcome::Included(record) => {
                push_section(&mut self.document, &record);
                if !record.classification.is_text() {
                    self.binary_or_svg_count += 1;
                }
                self.included_count += 1;
                self.included_file_paths.push(record.relative_path);
            }
        }
    }
}
/// Joins path components with `/` regardless of platform.
fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
fn absolutize(path: &Path) -> Result<PathBuf, DigestError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| DigestError::io(".", e))?;
    Ok(cwd.join(path))
}
/// Resolves the output path the same way the input root is resolved, so the two can
/// be compared even when the output file does not exist yet.
fn resolve_output(path: &Path) -> Result<PathBuf, DigestError> {
    let absolute = absolutize(path)?;
    let file_name = absolute
        .file_name()
        .ok_or_else(|| DigestError::InvalidPath(absolute.display().to_string()))?
        .to_owned();
    match absolute.parent().map(fs::canonicalize) {
        Some(Ok(parent)) => Ok(parent.join(file_name)),
        _ => Ok(absolute),
    }
}
/// Walks `options.root`, builds the Markdown digest, writes it to `options.output` and
/// returns the run statistics.
///
/// Files that cannot be probed or read are logged and skipped.
///
/// # Errors
///
/// Fails if the input directory cannot be resolved or walked, the ignore file exists
/// but cannot be read, or the output cannot be written.
pub fn aggregate(options: &DigestOptions) -> Result<AggregationResult, DigestError> {
    let root = fs::canonicalize(absolutize(&options.root)?)
        .map_err(|e| DigestError::io(&options.root, e))?;
    if !root.is_dir() {
        return Err(DigestError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let output = resolve_output(&options.output)?;
    tracing::debug!("Starting aggregation of {}", root.display());

    let custom_patterns = load_ignore_file(&root, &options.ignore_file_name)?;
    let custom_ignores = compile(&custom_patterns)?;
    if custom_ignores.is_empty() {
        tracing::info!("No custom ignore patterns found.");
    }
    let default_ignores = if options.use_default_ignores {
        tracing::info!("Using default ignore patterns.");
        Some(default_matcher()?)
    } else {
        tracing::info!("Default ignore patterns disabled.");
        None
    };
    if options.remove_whitespace {
        tracing::info!("Whitespace removal enabled (except for whitespace-dependent languages).");
    } else {
        tracing::info!("Whitespace removal disabled.");
    }

    let mut files: Vec<(PathBuf, String)> = Walker::new(&root, options)
        .collect_files()?
        .into_iter()
        .filter_map(|path| {
            let relative = to_slash(path.strip_prefix(&root).ok()?);
            Some((path, relative))
        })
        .collect();
    files.sort_by(|a, b| natural_cmp(&a.1, &b.1));
    let total_files_found = files.len();
    tracing::info!(
        "Found {} files in {}. Applying filters...",
        total_files_found,
        root.display()
    );

    let context = RunContext {
        options,
        output_relative: output.strip_prefix(&root).ok().map(to_slash),
        ignore_file_relative: to_slash(Path::new(&options.ignore_file_name)),
        default_ignores,
        custom_ignores,
    };
    #[cfg(not(feature = "parallel"))]
    let outcomes = process_files(files, &context);
    #[cfg(feature = "parallel")]
    let outcomes = process_files_parallel(files, &context);

    let mut acc = Accumulator::default();
    for outcome in outcomes {
        acc.record(outcome);
    }

    write_document(&output, &acc.document)?;
    let output_byte_size = acc.document.len() as u64;
    let estimated_token_count = if output_byte_size > MAX_OUTPUT_SIZE {
        tracing::warn!("{}", size_warning(output_byte_size));
        None
    } else {
        Some(tokens::estimate(&acc.document))
    };

    Ok(AggregationResult {
        document_text: acc.document,
        total_files_found,
        included_count: acc.included_count,
        default_ignored_count: acc.default_ignored_count,
        custom_ignored_count: acc.custom_ignored_count,
        binary_or_svg_count: acc.binary_or_svg_count,
        failed_count: acc.failed_count,
        included_file_paths: acc.included_file_paths,
        estimated_token_count,
        output_byte_size,
    })
}
#[cfg(not(feature = "parallel"))]
fn process_files(files: Vec<(PathBuf, String)>, context: &RunContext<'_>) -> Vec<FileOutcome> {
    files
        .into_iter()
        .map(|(path, relative)| context.dispose(&path, relative))
        .collect()
}
#[cfg(feature = "parallel")]
fn process_files_parallel(
    files: Vec<(PathBuf, String)>,
    context: &RunContext<'_>,
) -> Vec<FileOutcome> {
    files
        .into_par_iter()
        .map(|(path, relative)| context.dispose(&path, relative))
        .collect()
}
