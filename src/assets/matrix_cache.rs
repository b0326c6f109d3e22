use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::assets::sidecar::{SidecarDescriptor, sidecar_path};
use crate::composite::homography::ProjectiveMatrix;
use crate::foundation::error::{CodeshotError, CodeshotResult};

/// Where sidecar bytes come from.
pub trait SidecarSource: Send + Sync {
    /// Read the descriptor at `path`.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads sidecars from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSidecarSource;

impl SidecarSource for FsSidecarSource {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

type Slot = Arc<Mutex<Option<ProjectiveMatrix>>>;

/// Memoized projective matrices keyed by background path.
///
/// Each key owns a slot with its own lock: the map lock is only held to find or create the
/// slot, and the slot lock is held across the first load so concurrent callers for the same
/// background wait for one parse instead of repeating it.
pub struct MatrixCache {
    slots: RwLock<HashMap<PathBuf, Slot>>,
    source: Box<dyn SidecarSource>,
}

impl std::fmt::Debug for MatrixCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for MatrixCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixCache {
    /// An empty cache reading sidecars from disk.
    pub fn new() -> Self {
        Self::with_source(FsSidecarSource)
    }

    /// An empty cache reading sidecars through `source`.
    pub fn with_source(source: impl SidecarSource + 'static) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            source: Box::new(source),
        }
    }

    fn slot(&self, background: &Path) -> Slot {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(background)
        {
            return Arc::clone(slot);
        }
        let mut map = self.slots.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(map.entry(background.to_path_buf()).or_default())
    }

    /// Matrix for `background`, loading its sidecar on first use.
    ///
    /// Fails with [`CodeshotError::Configuration`] when the sidecar is missing, malformed or
    /// does not hold exactly eight coefficients; the key then stays unpopulated.
    pub fn get_matrix(&self, background: &Path) -> CodeshotResult<ProjectiveMatrix> {
        let slot = self.slot(background);
        let mut guard = slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(m) = *guard {
            return Ok(m);
        }

        let matrix = self.load(background)?;
        *guard = Some(matrix);
        tracing::debug!(background = %background.display(), "projective matrix cached");
        Ok(matrix)
    }

    fn load(&self, background: &Path) -> CodeshotResult<ProjectiveMatrix> {
        let path = sidecar_path(background);
        let bytes = self.source.read(&path).map_err(|e| {
            CodeshotError::configuration(format!("read sidecar '{}': {e}", path.display()))
        })?;
        SidecarDescriptor::parse(&bytes, &path)?.matrix(&path)
    }

    /// Seed the cache, replacing any existing value.
    pub fn insert(&self, background: impl Into<PathBuf>, matrix: ProjectiveMatrix) {
        let slot = self.slot(&background.into());
        *slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(matrix);
    }

    /// Whether a matrix is cached for `background`.
    pub fn contains(&self, background: &Path) -> bool {
        let slot = self
            .slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(background)
            .cloned();
        match slot {
            Some(slot) => slot.lock().unwrap_or_else(|e| e.into_inner()).is_some(),
            None => false,
        }
    }

    /// Number of cached matrices.
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = self
            .slots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        slots
            .iter()
            .filter(|slot| slot.lock().unwrap_or_else(|e| e.into_inner()).is_some())
            .count()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/matrix_cache.rs"]
mod tests;
