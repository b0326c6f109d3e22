//! Drawing token streams into code canvases.
//!
//! Text is shaped with Parley and rasterized with `vello_cpu`; all geometry lives in
//! [`layout`] so it can be reasoned about without a font.

pub mod layout;
pub mod raster;
pub(crate) mod text;

pub use layout::{CanvasLayout, GridMetrics};
pub use raster::{CodeCanvas, Rasterizer};
