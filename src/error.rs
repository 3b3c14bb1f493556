//! Error taxonomy for the sort pipeline.
//!
//! Every failure surfaces to the invoker with the failing stage
//! identifiable from the message; nothing is retried or swallowed.

use crate::xml::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed XML.
    #[error("not well-formed XML: {0}")]
    Parse(#[from] ParseError),

    /// A `rule` child of the root has no `ref` attribute to sort by.
    #[error("rule element #{position} has no ref attribute to sort by")]
    MissingRef { position: usize },

    /// The sorted text was produced in memory but the destination was
    /// not written.
    #[error("sorted XML was produced but writing {} failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SortError>;
