//! Placing code canvases into photographs: projective warp followed by multiply blending.

pub mod blend;
pub mod compositor;
pub mod homography;

pub use blend::{multiply, multiply_in_place, warp_perspective};
pub use compositor::Compositor;
pub use homography::ProjectiveMatrix;
