//! # pixtone-core
//!
//! Core types for pixtone image adjustment.
//!
//! - [`RasterBuffer`] - Owned, copy-on-write RGBA8 raster
//! - [`pixel`] - Interleaved RGBA8 layout helpers
//! - [`Error`], [`Result`] - Shared error type
//!
//! ## Crate Structure
//!
//! ```text
//! pixtone-core (this crate)
//!    ^
//!    |
//!    +-- pixtone-math (hue rotation matrices)
//!    +-- pixtone-ops (color engine, thumbnails, edit session)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;

pub use error::*;
pub use pixel::{CHANNELS, Rgba8};
pub use raster::{RasterBuffer, validate_shape};

/// Prelude module for convenient imports.
///
/// ```
/// use pixtone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{CHANNELS, Rgba8};
    pub use crate::raster::{RasterBuffer, validate_shape};
}
