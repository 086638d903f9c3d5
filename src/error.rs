//! Error types.

use std::path::PathBuf;

/// A page metadata record that violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// A required string is empty or whitespace.
    #[error("metadata field `{0}` is empty")]
    EmptyField(&'static str),

    /// A social block does not mirror the top-level value.
    #[error("metadata field `{0}` does not match the page title/description")]
    Mismatch(&'static str),
}

/// Errors raised while writing the static site.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Could not create or write a file under the output directory.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not read a public asset.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not walk the public asset directory.
    #[error("failed to read public assets: {0}")]
    Walk(#[from] walkdir::Error),

    /// A walked entry did not live under the public directory.
    #[error("asset {0} is outside the public directory")]
    OutsidePublicDir(PathBuf),
}

impl ExportError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
