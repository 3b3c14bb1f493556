//! pmdsort core library.
//!
//! This crate sorts the direct children of a PMD ruleset's root element
//! into a deterministic order and pretty-prints the result. The pipeline
//! is text in -> reorder (one key per child, stable sort, rebuilt root)
//! -> pretty-printed text out; file reads and writes sit outside it.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `xml`: Document tree and quick-xml based parser.
//! - `key`: Sort key extraction per root child.
//! - `reorder`: Stable reordering into a rebuilt document.
//! - `format`: Deterministic XML pretty-printing.
//! - `sort`: File-level sort runner.
//! - `check`: Verification that files are already sorted.
//! - `output`: Human/JSON printers for sort/check.
//! - `error`: Error taxonomy for the pipeline.
//! - `utils`: Supporting helpers.
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod key;
pub mod output;
pub mod reorder;
pub mod sort;
pub mod utils;
pub mod xml;
