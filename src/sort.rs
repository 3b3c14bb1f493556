//! The `sort` command: read a ruleset, sort it, write or return the text.

use crate::error::{Result, SortError};
use crate::format;
use crate::reorder;
use std::fs;
use std::path::Path;

/// Outcome of one successful sort invocation.
pub struct SortOutcome {
    pub input: String,
    pub output: Option<String>,
    /// The sorted, pretty-printed XML text.
    pub xml: String,
    pub wrote: bool,
}

/// Pure text-to-text pipeline: reorder, then pretty-print.
pub fn sort_text(input: &str, indent: usize) -> Result<String> {
    let doc = reorder::reorder(input)?;
    Ok(format::to_pretty_string(&doc, indent))
}

/// Sort the ruleset at `input_path`.
///
/// With `output_path` the sorted XML is written there (overwriting);
/// without it, the caller is expected to emit `xml` directly. The
/// transform runs to completion in memory before any write starts, so a
/// write failure never leaves a half-transformed destination.
pub fn run_sort(
    input_path: &Path,
    output_path: Option<&Path>,
    indent: usize,
) -> Result<SortOutcome> {
    let text = fs::read_to_string(input_path).map_err(|source| SortError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    let xml = sort_text(&text, indent)?;
    if let Some(path) = output_path {
        fs::write(path, &xml).map_err(|source| SortError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(SortOutcome {
        input: input_path.to_string_lossy().to_string(),
        output: output_path.map(|p| p.to_string_lossy().to_string()),
        xml,
        wrote: output_path.is_some(),
    })
}
