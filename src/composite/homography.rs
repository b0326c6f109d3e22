use kurbo::Point;

use crate::foundation::error::{CodeshotError, CodeshotResult};

/// Eight-coefficient projective transform `(a, b, c, d, e, f, g, h)`.
///
/// Maps an output (background) point `(x, y)` to a source (canvas) point:
///
/// ```text
/// u = (a·x + b·y + c) / (g·x + h·y + 1)
/// v = (d·x + e·y + f) / (g·x + h·y + 1)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectiveMatrix([f64; 8]);

const SINGULAR_EPS: f64 = 1e-12;

impl ProjectiveMatrix {
    /// The transform that maps every point to itself.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);

    /// Build from exactly eight finite coefficients.
    pub fn from_coefficients(coefficients: &[f64]) -> CodeshotResult<Self> {
        let arr: [f64; 8] = coefficients.try_into().map_err(|_| {
            CodeshotError::geometry(format!(
                "expected 8 projective coefficients, got {}",
                coefficients.len()
            ))
        })?;
        if let Some(i) = arr.iter().position(|c| !c.is_finite()) {
            return Err(CodeshotError::geometry(format!(
                "projective coefficient {i} is not finite"
            )));
        }
        Ok(Self(arr))
    }

    /// The coefficients in `(a, b, c, d, e, f, g, h)` order.
    pub fn coefficients(&self) -> [f64; 8] {
        self.0
    }

    /// Map an output point to source coordinates. `None` where the denominator vanishes.
    pub fn map_point(&self, p: Point) -> Option<Point> {
        let [a, b, c, d, e, f, g, h] = self.0;
        let w = g * p.x + h * p.y + 1.0;
        if w.abs() < SINGULAR_EPS {
            return None;
        }
        Some(Point::new(
            (a * p.x + b * p.y + c) / w,
            (d * p.x + e * p.y + f) / w,
        ))
    }

    /// Solve for the transform taking each `dst[i]` onto `src[i]`.
    ///
    /// `src` is usually the canvas rectangle and `dst` the quadrilateral it should cover in the
    /// background, since warping samples the canvas for each background pixel.
    pub fn from_quad(src: [Point; 4], dst: [Point; 4]) -> CodeshotResult<Self> {
        let mut m = [[0.0f64; 9]; 8];
        for i in 0..4 {
            let (x, y) = (dst[i].x, dst[i].y);
            let (u, v) = (src[i].x, src[i].y);
            m[2 * i] = [x, y, 1.0, 0.0, 0.0, 0.0, -x * u, -y * u, u];
            m[2 * i + 1] = [0.0, 0.0, 0.0, x, y, 1.0, -x * v, -y * v, v];
        }
        let solved = solve_augmented(m)
            .ok_or_else(|| CodeshotError::geometry("calibration quad is degenerate"))?;
        Self::from_coefficients(&solved)
    }
}

/// Gauss-Jordan elimination with partial pivoting on an 8×9 augmented matrix.
fn solve_augmented(mut m: [[f64; 9]; 8]) -> Option<[f64; 8]> {
    for col in 0..8 {
        let pivot = (col..8).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot][col].abs() < SINGULAR_EPS {
            return None;
        }
        m.swap(col, pivot);

        let p = m[col][col];
        for k in col..9 {
            m[col][k] /= p;
        }
        for row in 0..8 {
            if row == col {
                continue;
            }
            let factor = m[row][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..9 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut out = [0.0; 8];
    for (i, o) in out.iter_mut().enumerate() {
        *o = m[i][8];
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/homography.rs"]
mod tests;
