//! On-disk inputs: fonts, background sidecars and the matrix cache built from them.

pub mod background;
pub mod fonts;
pub mod matrix_cache;
pub mod sidecar;

pub use background::BackgroundPool;
pub use fonts::{FONT_ENV, FontSource, LoadedFont};
pub use matrix_cache::{FsSidecarSource, MatrixCache, SidecarSource};
pub use sidecar::{SidecarDescriptor, sidecar_path};
