//! Hygiene: enforces coding standards at test time
//!
//! Scans the crate's production sources for panicking calls and silently
//! discarded errors. Every budget is zero: fix the code rather than raise one.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", why: "panics on the UI thread" },
    Rule { pattern: ".expect(", why: "panics on the UI thread" },
    Rule { pattern: "panic!(", why: "panics on the UI thread" },
    Rule { pattern: "unreachable!(", why: "panics on the UI thread" },
    Rule { pattern: "todo!(", why: "unfinished stub" },
    Rule { pattern: "unimplemented!(", why: "unfinished stub" },
    Rule { pattern: "let _ =", why: "discards a result without inspecting it" },
    Rule { pattern: ".ok()", why: "discards an error without inspecting it" },
    Rule { pattern: "#[allow(dead_code)]", why: "hides unused code" },
];

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(idx, line)| format!("  {}:{}: {}", file.path, idx + 1, line.trim()))
        })
        .collect()
}

#[test]
fn scanner_finds_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "no sources found under src/");
}

#[test]
fn production_code_has_no_banned_patterns() {
    let files = source_files();
    let mut report = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        if !found.is_empty() {
            report.push(format!("`{}` ({}):\n{}", rule.pattern, rule.why, found.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
