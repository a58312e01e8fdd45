//! Catalog loading errors
//!
//! Only document-level problems are errors. A missing optional field inside an
//! entry is never reported; it falls back to its default.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document could not be opened or read
    #[error("cannot read technique document '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not JSON, or lacks the required top-level key
    #[error("malformed technique document '{}': {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// None of the candidate paths could be opened
    #[error("no technique document found (tried: {})", display_paths(.tried))]
    NoDocument { tried: Vec<PathBuf> },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
