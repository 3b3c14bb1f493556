//! The `check` command: verify rulesets are already sorted.
//!
//! Glob patterns are expanded relative to the repo root and each matched
//! file is compared against its own sorted rendition, in parallel. A file
//! that differs (unsorted, or formatted differently) fails the check;
//! unreadable or malformed files are reported as errors.

use crate::sort;
use pathdiff::diff_paths;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
/// Per-file check verdict.
pub struct CheckResult {
    pub file: String,
    pub sorted: bool,
}

/// Check every file matched by `patterns` (relative to `repo_root`).
///
/// Returns one `CheckResult` per readable, well-formed file plus a list
/// of error descriptions for the rest. Targets are sorted first so the
/// parallel map yields deterministic output order.
pub fn run_check(
    repo_root: &Path,
    patterns: &[String],
    indent: usize,
) -> (Vec<CheckResult>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs_glob = repo_root.join(pat);
        match glob::glob(&abs_glob.to_string_lossy()) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(path) => targets.push(path),
                        Err(e) => errors.push(e.to_string()),
                    }
                }
            }
            Err(e) => errors.push(format!("bad pattern '{}': {}", pat, e)),
        }
    }
    targets.sort();
    targets.dedup();

    let outcomes: Vec<Result<CheckResult, String>> = targets
        .par_iter()
        .map(|path| {
            let display = display_path(path, repo_root);
            let text =
                fs::read_to_string(path).map_err(|e| format!("{}: {}", display, e))?;
            let sorted =
                sort::sort_text(&text, indent).map_err(|e| format!("{}: {}", display, e))?;
            Ok(CheckResult {
                file: display,
                sorted: sorted == text,
            })
        })
        .collect();

    let mut results = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(r) => results.push(r),
            Err(e) => errors.push(e),
        }
    }
    (results, errors)
}

fn display_path(path: &Path, root: &Path) -> String {
    diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
