//! # pixtone-math
//!
//! Math utilities for pixtone color adjustment.
//!
//! - [`Mat3`] - row-major 3x3 `f64` matrices for RGB transforms
//! - [`Mat3::hue_rotation`] - rotation about the RGB gray axis
//!
//! Vectors are [`glam::DVec3`], re-exported as [`DVec3`]. All matrix
//! operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixtone_math::{DVec3, Mat3};
//!
//! let rot = Mat3::hue_rotation(120.0);
//! let green = rot * DVec3::new(255.0, 0.0, 0.0);
//! assert!((green.y - 255.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hue;
mod mat3;

pub use mat3::*;

pub use glam::DVec3;
