use kurbo::Point;
use rayon::prelude::*;

use crate::composite::homography::ProjectiveMatrix;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::foundation::math::{mul_div255_u8, round_to_u8};
use crate::render::raster::CodeCanvas;

/// Warp `canvas` into an `out_w`×`out_h` image.
///
/// Each output pixel centre is mapped through `matrix` into canvas space and sampled
/// bilinearly. Pixels that land outside the canvas, or where the transform is degenerate,
/// are white so that a later multiply leaves the background untouched.
pub fn warp_perspective(
    canvas: &CodeCanvas,
    out_w: u32,
    out_h: u32,
    matrix: &ProjectiveMatrix,
) -> image::RgbImage {
    let row_len = out_w as usize * 3;
    let mut out = vec![255u8; row_len * out_h as usize];
    if row_len == 0 {
        return image::RgbImage::from_raw(out_w, out_h, out).unwrap_or_default();
    }

    out.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            let centre = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            if let Some(src) = matrix.map_point(centre)
                && let Some(rgb) = sample_bilinear(canvas, src.x, src.y)
            {
                px.copy_from_slice(&rgb);
            }
        }
    });

    image::RgbImage::from_raw(out_w, out_h, out).unwrap_or_default()
}

/// Bilinear sample around canvas point `(x, y)`.
///
/// The point must lie inside the canvas; it is then shifted by half a pixel onto texel
/// centres and neighbours past the edge are clamped.
fn sample_bilinear(canvas: &CodeCanvas, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (canvas.width as usize, canvas.height as usize);
    if !(x >= 0.0 && y >= 0.0 && x < w as f64 && y < h as f64) {
        return None;
    }

    let (sx, sy) = (x - 0.5, y - 0.5);
    let (x0f, y0f) = (sx.floor(), sy.floor());
    let (dx, dy) = (sx - x0f, sy - y0f);
    let clamp_x = |v: f64| v.clamp(0.0, (w - 1) as f64) as usize;
    let clamp_y = |v: f64| v.clamp(0.0, (h - 1) as f64) as usize;
    let (x0, x1) = (clamp_x(x0f), clamp_x(x0f + 1.0));
    let (y0, y1) = (clamp_y(y0f), clamp_y(y0f + 1.0));

    let at = |px: usize, py: usize, c: usize| f64::from(canvas.rgb8[(py * w + px) * 3 + c]);
    let mut out = [0u8; 3];
    for (c, o) in out.iter_mut().enumerate() {
        let top = at(x0, y0, c) + (at(x1, y0, c) - at(x0, y0, c)) * dx;
        let bottom = at(x0, y1, c) + (at(x1, y1, c) - at(x0, y1, c)) * dx;
        *o = round_to_u8(top + (bottom - top) * dy);
    }
    Some(out)
}

/// Multiply `src` into `dst` channel by channel (`a·b/255`, rounded).
pub fn multiply_in_place(dst: &mut [u8], src: &[u8]) -> CodeshotResult<()> {
    if dst.len() != src.len() {
        return Err(CodeshotError::render(
            "multiply expects equal-length rgb8 buffers",
        ));
    }
    dst.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(d, s)| *d = mul_div255_u8(u16::from(*d), u16::from(*s)));
    Ok(())
}

/// Multiply blend of two equally sized images.
pub fn multiply(fg: &image::RgbImage, bg: &image::RgbImage) -> CodeshotResult<image::RgbImage> {
    if fg.dimensions() != bg.dimensions() {
        return Err(CodeshotError::render(format!(
            "multiply size mismatch: {:?} vs {:?}",
            fg.dimensions(),
            bg.dimensions()
        )));
    }
    let mut out = bg.clone();
    multiply_in_place(&mut out, fg)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
