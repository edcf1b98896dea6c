//! Error types for pixtone operations.
//!
//! The [`Error`] enum covers the failure modes of raster handling:
//! - Buffer shape validation (length vs. declared width/height)
//! - Invalid parameters for helpers around the color engine (thumbnails)
//!
//! The color engine itself has exactly one failure mode,
//! [`Error::ShapeMismatch`]. All arithmetic paths are total.
//!
//! # Usage
//!
//! ```rust
//! use pixtone_core::{Error, Result};
//!
//! fn check(len: usize, width: u32, height: u32) -> Result<()> {
//!     if len != width as usize * height as usize * 4 {
//!         return Err(Error::shape_mismatch(width, height, len, "bad length"));
//!     }
//!     Ok(())
//! }
//! assert!(check(16, 2, 2).is_ok());
//! assert!(check(15, 2, 2).unwrap_err().is_shape_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pixtone raster operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length is inconsistent with the declared dimensions.
    ///
    /// Returned when `len != width * height * 4`, when either dimension is
    /// zero, or when the size computation overflows. This is a caller
    /// contract violation; nothing is mutated when it is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixtone_core::Error;
    ///
    /// let err = Error::shape_mismatch(10, 10, 399, "expected 400 bytes");
    /// assert!(err.to_string().contains("10x10"));
    /// assert!(err.to_string().contains("399"));
    /// ```
    #[error("shape mismatch: {len} bytes for {width}x{height} RGBA8 ({reason})")]
    ShapeMismatch {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Actual buffer length in bytes
        len: usize,
        /// What was inconsistent
        reason: String,
    },

    /// Invalid parameter value for a raster helper.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(width: u32, height: u32, len: usize, reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            width,
            height,
            len,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns `true` if this is a shape error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}
