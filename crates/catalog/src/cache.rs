//! Load-once access to a catalog file.
//!
//! `CatalogCache` owns the configured path and hands out a shared
//! `Arc<Catalog>`. The file is read at most once per cache: concurrent
//! callers serialize on the slot lock, and whoever arrives first performs the
//! load while the rest receive the stored handle. A failed load leaves the
//! slot empty so the error reaches the caller that triggered it.

use crate::error::Result;
use crate::types::Catalog;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    slot: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    /// Create a cache for the catalog stored at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the catalog, loading it on first use
    pub fn get(&self) -> Result<Arc<Catalog>> {
        // The slot only ever holds a finished catalog, so a poisoned lock
        // still guards consistent data.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(catalog) = slot.as_ref() {
            debug!("Catalog cache hit for {:?}", self.path);
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(Catalog::load_from_csv(&self.path)?);
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Whether a catalog has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
