//! Technique catalog: loading and holding the ordered record list.
//!
//! - [`loader`] — flattens the nested JSON document into [`Technique`] records
//! - [`technique`] — the uniform record type
//! - [`errors`] — [`CatalogError`]
//!
//! A [`Catalog`] is produced once at startup and only read afterwards. A
//! reload replaces it wholesale, and a failed reload leaves it untouched.

pub mod errors;
pub mod loader;
pub mod technique;

pub use errors::CatalogError;
pub use technique::Technique;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Document locations tried after any explicitly configured path
pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "data/techniques.json",
    "../data/techniques.json",
    "src/technique/techniques.json",
    "../src/technique/techniques.json",
];

/// Ordered list of techniques from one successful load
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    techniques: Vec<Technique>,
    source: Option<PathBuf>,
}

impl Catalog {
    pub fn new(techniques: Vec<Technique>) -> Self {
        Catalog {
            techniques,
            source: None,
        }
    }

    /// Load a catalog from a single document.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let techniques = loader::load_file(path)?;
        Ok(Catalog {
            techniques,
            source: Some(path.to_path_buf()),
        })
    }

    /// Try each candidate in order and load the first one that can be read.
    ///
    /// Unreadable candidates are skipped. A readable but malformed document
    /// stops the search and its error is returned.
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, CatalogError> {
        let mut tried = Vec::new();
        for candidate in candidates {
            let path = candidate.as_ref();
            match Catalog::load(path) {
                Ok(catalog) => {
                    info!(path = %path.display(), techniques = catalog.len(), "technique document loaded");
                    return Ok(catalog);
                }
                Err(e) if e.is_not_found() => {
                    debug!(path = %path.display(), "candidate not readable");
                    tried.push(path.to_path_buf());
                }
                Err(e) => return Err(e),
            }
        }
        Err(CatalogError::NoDocument { tried })
    }

    /// Replace the held techniques with the contents of `path`.
    ///
    /// On failure the current techniques are kept as they were.
    pub fn reload(&mut self, path: &Path) -> Result<(), CatalogError> {
        *self = Catalog::load(path)?;
        Ok(())
    }

    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    pub fn get(&self, index: usize) -> Option<&Technique> {
        self.techniques.get(index)
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    /// Path the catalog was loaded from, if it came from a file
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
