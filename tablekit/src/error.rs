//! Error types.
//!
//! Resolving options never fails. These errors come from the edges: reading
//! and writing option documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or serializing table options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The document is not valid JSON or doesn't fit the options shape.
    #[error("invalid options document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The options file couldn't be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
