use std::path::Path;
use std::sync::Arc;

use crate::assets::matrix_cache::MatrixCache;
use crate::composite::blend::{multiply_in_place, warp_perspective};
use crate::composite::homography::ProjectiveMatrix;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::render::raster::CodeCanvas;

/// Places code canvases onto photographs.
#[derive(Clone, Debug)]
pub struct Compositor {
    cache: Arc<MatrixCache>,
}

impl Compositor {
    /// A compositor resolving background matrices through `cache`.
    pub fn new(cache: Arc<MatrixCache>) -> Self {
        Self { cache }
    }

    /// The matrix cache backing this compositor.
    pub fn cache(&self) -> &Arc<MatrixCache> {
        &self.cache
    }

    /// Warp `canvas` into `background`'s perspective and multiply it onto the photo.
    ///
    /// Uses `matrix` when given, otherwise the background's cached sidecar matrix.
    pub fn blend(
        &self,
        canvas: &CodeCanvas,
        background: &Path,
        matrix: Option<&ProjectiveMatrix>,
    ) -> CodeshotResult<image::RgbImage> {
        let mut bg = image::open(background)
            .map_err(|e| {
                CodeshotError::io(format!("read background '{}': {e}", background.display()))
            })?
            .into_rgb8();

        let matrix = match matrix {
            Some(m) => *m,
            None => self.cache.get_matrix(background)?,
        };

        let (w, h) = bg.dimensions();
        let warped = warp_perspective(canvas, w, h, &matrix);
        multiply_in_place(&mut bg, &warped)?;
        Ok(bg)
    }

    /// [`Compositor::blend`] and write the result to `output`, format chosen by extension.
    #[tracing::instrument(level = "debug", skip(self, canvas, matrix), fields(w = canvas.width, h = canvas.height))]
    pub fn composite(
        &self,
        canvas: &CodeCanvas,
        background: &Path,
        matrix: Option<&ProjectiveMatrix>,
        output: &Path,
    ) -> CodeshotResult<()> {
        let out = self.blend(canvas, background, matrix)?;
        out.save(output)
            .map_err(|e| CodeshotError::io(format!("write output '{}': {e}", output.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/compositor.rs"]
mod tests;
