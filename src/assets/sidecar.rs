use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::composite::homography::ProjectiveMatrix;
use crate::foundation::error::{CodeshotError, CodeshotResult};

/// Path of the descriptor that belongs to `background`: same stem, `.json` extension.
pub fn sidecar_path(background: &Path) -> PathBuf {
    background.with_extension("json")
}

/// JSON descriptor stored next to a background image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SidecarDescriptor {
    /// Projective coefficients `(a..h)` mapping background pixels to canvas pixels.
    pub coefficients: Vec<f64>,
    /// Background-space corners the canvas was calibrated against, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quad: Option<[[f64; 2]; 4]>,
}

impl SidecarDescriptor {
    /// Descriptor for a calibrated matrix.
    pub fn new(matrix: &ProjectiveMatrix, quad: Option<[[f64; 2]; 4]>) -> Self {
        Self {
            coefficients: matrix.coefficients().to_vec(),
            quad,
        }
    }

    /// Parse descriptor bytes. `origin` is only used in error messages.
    pub fn parse(bytes: &[u8], origin: &Path) -> CodeshotResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            CodeshotError::configuration(format!("parse sidecar '{}': {e}", origin.display()))
        })
    }

    /// Validate the coefficients into a matrix.
    pub fn matrix(&self, origin: &Path) -> CodeshotResult<ProjectiveMatrix> {
        ProjectiveMatrix::from_coefficients(&self.coefficients).map_err(|e| {
            CodeshotError::configuration(format!("sidecar '{}': {e}", origin.display()))
        })
    }

    /// Write the descriptor as pretty JSON.
    pub fn write(&self, path: &Path) -> CodeshotResult<()> {
        let json = serde_json::to_vec_pretty(self).map_err(anyhow::Error::from)?;
        std::fs::write(path, json)
            .map_err(|e| CodeshotError::io(format!("write sidecar '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sidecar.rs"]
mod tests;
