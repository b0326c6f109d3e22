use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::assets::matrix_cache::MatrixCache;
use crate::foundation::error::{CodeshotError, CodeshotResult};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Backgrounds in a directory whose sidecars load.
#[derive(Clone, Debug, Default)]
pub struct BackgroundPool {
    paths: Vec<PathBuf>,
}

impl BackgroundPool {
    /// Collect usable backgrounds from `dir`, warming `cache` with their matrices.
    ///
    /// Files are visited in sorted order. Images without a valid sidecar are skipped with a
    /// warning.
    pub fn scan(dir: &Path, cache: &MatrixCache) -> CodeshotResult<Self> {
        let rd = std::fs::read_dir(dir).map_err(|e| {
            CodeshotError::io(format!("read backgrounds '{}': {e}", dir.display()))
        })?;

        let mut candidates: Vec<PathBuf> = rd
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && has_image_extension(p))
            .collect();
        candidates.sort();

        let mut paths = Vec::with_capacity(candidates.len());
        for path in candidates {
            match cache.get_matrix(&path) {
                Ok(_) => paths.push(path),
                Err(e) => {
                    tracing::warn!(background = %path.display(), error = %e, "background skipped");
                }
            }
        }
        tracing::debug!(dir = %dir.display(), count = paths.len(), "background pool scanned");
        Ok(Self { paths })
    }

    /// Pool over explicit paths, without checking their sidecars.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// A uniformly random background, or `None` when the pool is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Path> {
        self.paths.choose(rng).map(PathBuf::as_path)
    }

    /// Usable backgrounds in sorted order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of usable backgrounds.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no background is usable.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/background.rs"]
mod tests;
