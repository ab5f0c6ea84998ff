//! Overlay storage and the idempotent ensure-exists operation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::OverlayResult;
use crate::generator::generate_grid;

/// Storage target for the serialized overlay.
///
/// The overlay is a write-once cache: [`ensure_grid`] consults `exists`
/// before regenerating. Implementations are injectable so tests run against
/// memory instead of real paths.
pub trait OverlayStore {
    /// Whether the overlay was already written.
    fn exists(&self) -> bool;

    /// Persist the serialized feature collection.
    fn write(&mut self, contents: &str) -> OverlayResult<()>;
}

/// Filesystem-backed overlay store.
///
/// Existence is a plain file check, not a lock: two processes generating
/// for the first time concurrently may both write. Acceptable for a
/// single-user interactive tool.
#[derive(Debug, Clone)]
pub struct FsOverlayStore {
    path: PathBuf,
}

impl FsOverlayStore {
    /// Create a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OverlayStore for FsOverlayStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn write(&mut self, contents: &str) -> OverlayResult<()> {
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory overlay store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverlayStore {
    contents: Option<String>,
}

impl MemoryOverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored overlay, if one was written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl OverlayStore for MemoryOverlayStore {
    fn exists(&self) -> bool {
        self.contents.is_some()
    }

    fn write(&mut self, contents: &str) -> OverlayResult<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Generate the overlay into `store` unless it already exists.
///
/// Returns `true` when generation ran, `false` when the existing overlay
/// was kept. Identical node arrays always produce identical contents, so
/// skipping regeneration loses nothing.
pub fn ensure_grid<S: OverlayStore>(
    store: &mut S,
    x_nodes: &[f64],
    y_nodes: &[f64],
) -> OverlayResult<bool> {
    if store.exists() {
        debug!("grid overlay already present, skipping generation");
        return Ok(false);
    }

    let collection = generate_grid(x_nodes, y_nodes)?;
    store.write(&collection.to_json()?)?;
    info!(features = collection.len(), "generated grid overlay");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryOverlayStore::new();
        assert!(!store.exists());

        store.write("{}").unwrap();
        assert!(store.exists());
        assert_eq!(store.contents(), Some("{}"));
    }

    #[test]
    fn test_ensure_grid_generates_once() {
        let mut store = MemoryOverlayStore::new();

        assert!(ensure_grid(&mut store, &[0.0, 5.0], &[0.0, 5.0]).unwrap());
        let first = store.contents().unwrap().to_string();

        assert!(!ensure_grid(&mut store, &[0.0, 5.0], &[0.0, 5.0]).unwrap());
        assert_eq!(store.contents(), Some(first.as_str()));
    }

    #[test]
    fn test_ensure_grid_keeps_existing_contents() {
        let mut store = MemoryOverlayStore::new();
        store.write("sentinel").unwrap();

        assert!(!ensure_grid(&mut store, &[0.0, 5.0], &[0.0, 5.0]).unwrap());
        assert_eq!(store.contents(), Some("sentinel"));
    }
}
