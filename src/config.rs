//! Configuration discovery and effective settings resolution.
//!
//! pmdsort reads `pmdsort.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `format.indent`: 2
//! - `check.patterns`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::format::DEFAULT_INDENT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Formatting-related configuration section under `[format]`.
pub struct FormatCfg {
    pub indent: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Check-related configuration section under `[check]`.
pub struct CheckCfg {
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pmdsort.toml|yaml`.
pub struct PmdsortConfig {
    pub output: Option<String>,
    pub format: Option<FormatCfg>,
    pub check: Option<CheckCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub indent: usize,
    pub check_patterns: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pmdsort.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("pmdsort.toml").exists()
            || cur.join("pmdsort.yaml").exists()
            || cur.join("pmdsort.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PmdsortConfig` from `pmdsort.toml` or `pmdsort.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<PmdsortConfig> {
    let toml_path = root.join("pmdsort.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: PmdsortConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["pmdsort.yaml", "pmdsort.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: PmdsortConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_indent: Option<usize>,
    cli_patterns: Option<Vec<String>>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let indent = cli_indent
        .or_else(|| cfg.format.as_ref().and_then(|f| f.indent))
        .unwrap_or(DEFAULT_INDENT);

    let check_patterns = cli_patterns
        .or_else(|| cfg.check.as_ref().and_then(|c| c.patterns.clone()))
        .unwrap_or_default();

    Effective {
        repo_root,
        output,
        indent,
        check_patterns,
    }
}
