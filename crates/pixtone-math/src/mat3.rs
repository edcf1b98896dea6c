//! Row-major 3x3 matrix for RGB transforms.
//!
//! Matrices hold `f64` rows and act on column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! Each output component is summed left to right, so results are
//! reproducible bit for bit across platforms with the same libm.
//!
//! ```rust
//! use pixtone_math::{DVec3, Mat3};
//!
//! let swap_rb = Mat3::from_rows([
//!     [0.0, 0.0, 1.0],
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//! ]);
//! assert_eq!(swap_rb * DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 2.0, 1.0));
//! ```

use glam::DVec3;
use std::ops::Mul;

/// RGB transform matrix, stored as `[row0, row1, row2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows of the matrix.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows(std::array::from_fn(|i| [m[0][i], m[1][i], m[2][i]]))
    }

    /// Applies the matrix to an RGB vector.
    #[inline]
    pub fn transform(&self, v: DVec3) -> DVec3 {
        let [r0, r1, r2] = &self.m;
        DVec3::new(
            r0[0] * v.x + r0[1] * v.y + r0[2] * v.z,
            r1[0] * v.x + r1[1] * v.y + r1[2] * v.z,
            r2[0] * v.x + r2[1] * v.y + r2[2] * v.z,
        )
    }

    /// Matrix product `self * rhs`: applying the result equals applying
    /// `rhs` first, then `self`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self::from_rows(std::array::from_fn(|i| {
            std::array::from_fn(|j| a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j])
        }))
    }
}

impl Mul<DVec3> for Mat3 {
    type Output = DVec3;

    #[inline]
    fn mul(self, rhs: DVec3) -> DVec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}
