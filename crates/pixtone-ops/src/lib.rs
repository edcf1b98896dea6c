//! # pixtone-ops
//!
//! Non-destructive color adjustment for RGBA8 product images.
//!
//! # Modules
//!
//! - [`adjust`] - The masked hue / contrast / exposure engine
//! - [`mask`] - Near-white background classification
//! - [`parallel`] - Row-parallel engine (feature `parallel`)
//! - [`thumbnail`] - Gallery tiles at a fixed display width
//! - [`catalog`] - Per-image adjustment records
//! - [`session`] - Apply-from-original editing session
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RasterBuffer;
//! use pixtone_ops::{render, Adjustments};
//!
//! let original = RasterBuffer::filled(8, 8, [100, 150, 50, 255]);
//! let edited = render(&original, &Adjustments::new(90, 150, 20));
//! assert_eq!(edited.pixel(0, 0), [0, 151, 151, 255]);
//! assert_eq!(original.pixel(0, 0), [100, 150, 50, 255]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Rayon-backed row-parallel processing
//! - `serde` - Serialization for [`Adjustments`] and [`EditCatalog`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod catalog;
pub mod mask;
pub mod session;
pub mod thumbnail;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use adjust::{AdjustPlan, Adjustments};
pub use catalog::{EditCatalog, ImageId};
pub use pixtone_core::{Error, RasterBuffer, Result};
pub use session::EditSession;
pub use thumbnail::{ThumbnailOptions, render_thumbnail};

/// Returns an adjusted copy of `src` using the fastest available engine.
///
/// Both engines produce identical bytes; the parallel one is used when the
/// `parallel` feature is enabled.
pub fn render(src: &RasterBuffer, adj: &Adjustments) -> RasterBuffer {
    #[cfg(feature = "parallel")]
    {
        parallel::apply(src, adj)
    }
    #[cfg(not(feature = "parallel"))]
    {
        adjust::apply(src, adj)
    }
}
