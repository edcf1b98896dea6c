//! Hue rotation about the RGB gray axis.
//!
//! Rotating an RGB vector about the neutral axis `(1, 1, 1) / sqrt(3)`
//! shifts hue while leaving the gray component (`R + G + B`) unchanged.
//! With `c = cos(a)`, `s = sin(a) / sqrt(3)` and `k = (1 - c) / 3`:
//!
//! ```text
//! | c+k  k-s  k+s |
//! | k+s  c+k  k-s |
//! | k-s  k+s  c+k |
//! ```
//!
//! This is an approximation of a perceptual hue shift; it needs no HSL
//! round trip and is linear, so it can be applied to unclamped values.

use crate::Mat3;

impl Mat3 {
    /// Builds the gray-axis rotation for an angle in degrees.
    ///
    /// Any angle is accepted. The result is a proper rotation: orthogonal,
    /// with the gray axis as its fixed axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixtone_math::{DVec3, Mat3};
    ///
    /// // Neutral colors stay put
    /// let m = Mat3::hue_rotation(73.0);
    /// let gray = m * DVec3::splat(128.0);
    /// assert!((gray.x - 128.0).abs() < 1e-9);
    /// ```
    pub fn hue_rotation(degrees: f64) -> Self {
        let rad = degrees.to_radians();
        let (sin_a, cos_a) = rad.sin_cos();
        let k = (1.0 - cos_a) / 3.0;
        let s = sin_a / 3.0_f64.sqrt();
        let d = cos_a + k;

        Self::from_rows([
            [d, k - s, k + s],
            [k + s, d, k - s],
            [k - s, k + s, d],
        ])
    }
}
