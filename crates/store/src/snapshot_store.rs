//! The persisted snapshot document.

use std::fs;
use std::path::{Path, PathBuf};

use scoopstock_catalog::Catalog;
use scoopstock_inventory::Snapshot;

use crate::error::{StoreError, StoreResult};

/// Loads and saves the inventory snapshot as a single JSON document.
///
/// The document is always read and written whole; there are no partial or
/// streaming updates.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted snapshot if present, a fresh copy of the catalog
    /// defaults if not.
    ///
    /// A present-but-malformed document is an error: silently replacing it
    /// with defaults would wipe the shop's recorded stock.
    pub fn load(&self, catalog: &Catalog) -> StoreResult<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot on disk, using catalog defaults");
                return Ok(Snapshot::from_catalog(catalog));
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::MalformedSnapshot {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the persisted snapshot.
    ///
    /// Writes a sibling temp file and renames it into place so a crash
    /// mid-write cannot leave a truncated document behind.
    pub fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
            }
        }

        let payload = serde_json::to_string_pretty(snapshot)
            .map_err(|source| StoreError::MalformedSnapshot {
                path: self.path.clone(),
                source,
            })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).map_err(|err| StoreError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| StoreError::io(&self.path, err))?;

        tracing::debug!(path = %self.path.display(), "snapshot persisted");
        Ok(())
    }
}
