use aidigest::classify::{classify, file_type_label};
use aidigest::ignore_rules::{compile, default_matcher, load_ignore_file};
use aidigest::sort::natural_cmp;
use aidigest::transform::{collapse_whitespace, escape_triple_backticks, transform};
use aidigest::{BinaryDetection, Classification, tokens};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_escape_triple_backticks() {
    let escaped = escape_triple_backticks("before\n```rust\nfn x() {}\n```\nafter");
    assert!(!escaped.contains("```"));
    assert!(escaped.contains("\\`\\`\\`rust"));
}
#[test]
fn test_transform_strips_null_bytes_before_escaping() {
    let out = transform("a\0b``\0`", ".txt", false);
    assert_eq!(out, "ab\\`\\`\\`");
}
#[test]
fn test_transform_collapses_whitespace() {
    let out = transform("  let x = 1;\n\n\tlet y = 2;  \n", ".js", true);
    assert_eq!(out, "let x = 1; let y = 2;");
}
#[test]
fn test_transform_keeps_whitespace_dependent_extensions() {
    let source = "def f():\n    return 1\n";
    assert_eq!(transform(source, ".py", true), source);
    assert_eq!(transform(source, ".yaml", true), source);
}
#[test]
fn test_transform_leaves_content_when_disabled() {
    let source = "a   b\n\n c";
    assert_eq!(transform(source, ".js", false), source);
    assert_eq!(collapse_whitespace(source), "a b c");
}
#[test]
fn test_natural_cmp() {
    assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
    assert_eq!(natural_cmp("File3", "file10"), Ordering::Less);
    assert_eq!(natural_cmp("a.txt", "B.txt"), Ordering::Less);
    assert_eq!(natural_cmp("v1.10", "v1.9"), Ordering::Greater);
    assert_eq!(natural_cmp("a-b.txt", "a_b.txt"), Ordering::Less);
    let mut names = vec!["file10.txt", "file2.txt", "File1.txt", "dir/a"];
    names.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(names, vec!["dir/a", "File1.txt", "file2.txt", "file10.txt"]);
}
#[test]
fn test_ignore_negation_order() {
    let matcher = compile(["*.log", "!keep.log"]).unwrap();
    assert!(matcher.matches("debug.log"));
    assert!(matcher.matches("logs/debug.log"));
    assert!(!matcher.matches("keep.log"));
    assert!(!matcher.matches("main.rs"));
}
#[test]
fn test_ignore_negation_cannot_reinclude_under_ignored_directory() {
    let matcher = compile(["build", "!build/keep.txt"]).unwrap();
    assert!(matcher.matches("build/keep.txt"));
    assert!(matcher.matches("build/other.txt"));
    let matcher = compile(["logs/", "!logs/keep.log"]).unwrap();
    assert!(matcher.matches("logs/keep.log"));
    let matcher = compile(["logs/*", "!logs/keep.log"]).unwrap();
    assert!(!matcher.matches("logs/keep.log"));
    assert!(matcher.matches("logs/debug.log"));
}
#[test]
fn test_ignore_empty_pattern_set() {
    let matcher = compile(Vec::<String>::new()).unwrap();
    assert!(matcher.is_empty());
    assert!(!matcher.matches("anything.txt"));
    assert_eq!(compile(["*.log", "!keep.log"]).unwrap().len(), 2);
}
#[test]
fn test_ignore_anchors_and_directories() {
    let matcher = compile(["/build", "docs/", "**/gen/*.rs"]).unwrap();
    assert!(matcher.matches("build/out.o"));
    assert!(!matcher.matches("src/build/out.o"));
    assert!(matcher.matches("docs/index.md"));
    assert!(!matcher.matches("docs"));
    assert!(matcher.matches("crates/a/gen/types.rs"));
    assert!(!matcher.matches("crates/a/gen/types.ts"));
}
#[test]
fn test_default_matcher() {
    let matcher = default_matcher().unwrap();
    assert!(matcher.matches("node_modules/x.js"));
    assert!(matcher.matches("web/node_modules/pkg/index.js"));
    assert!(matcher.matches("Cargo.lock"));
    assert!(matcher.matches(".git/HEAD"));
    assert!(matcher.matches(".env.production"));
    assert!(!matcher.matches("src/main.rs"));
}
#[test]
fn test_load_ignore_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".aidigestignore"),
        "# comment\n\n*.png\n   \nsecret/\n",
    )
    .unwrap();
    let patterns = load_ignore_file(dir.path(), ".aidigestignore").unwrap();
    assert_eq!(patterns, vec!["*.png".to_string(), "secret/".to_string()]);
    let missing = load_ignore_file(dir.path(), ".nothing").unwrap();
    assert!(missing.is_empty());
}
#[test]
fn test_classify() {
    let dir = tempdir().unwrap();
    let text = dir.path().join("main.rs");
    let binary = dir.path().join("blob.dat");
    let svg = dir.path().join("logo.svg");
    let png = dir.path().join("fake.png");
    fs::write(&text, "fn main() {}\n").unwrap();
    fs::write(&binary, [0u8, 159, 146, 150, 0, 1, 2]).unwrap();
    fs::write(&svg, "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>").unwrap();
    fs::write(&png, "not really a png").unwrap();
    for detection in [BinaryDetection::Simple, BinaryDetection::Accurate] {
        assert_eq!(classify(&text, detection).unwrap(), Classification::Text);
        assert_eq!(
            classify(&binary, detection).unwrap(),
            Classification::Binary("Binary".into())
        );
        assert_eq!(classify(&svg, detection).unwrap(), Classification::SvgImage);
        assert_eq!(
            classify(&png, detection).unwrap(),
            Classification::Binary("Image".into())
        );
    }
    assert!(classify(&dir.path().join("missing.rs"), BinaryDetection::Accurate).is_err());
}
#[test]
fn test_file_type_label() {
    assert_eq!(file_type_label(Path::new("PHOTO.JPG")), "Image");
    assert_eq!(file_type_label(Path::new("a/b.7z")), "Compressed Archive");
    assert_eq!(file_type_label(Path::new("libx.so")), "Shared Object");
    assert_eq!(file_type_label(Path::new("noext")), "Binary");
}
#[test]
fn test_token_estimate() {
    assert_eq!(tokens::estimate(""), 0);
    assert!(tokens::estimate("fn main() { println!(\"hello world\"); }") > 0);
}
