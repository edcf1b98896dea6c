//! RGBA8 raster buffer.
//!
//! [`RasterBuffer`] owns a tightly packed, row-major RGBA8 pixel buffer
//! together with its dimensions. The invariant `data.len() == width *
//! height * 4` (with non-zero dimensions) is checked on construction.
//!
//! Engines that work on caller-owned slices instead of a `RasterBuffer`
//! call [`validate_shape`] before touching any byte.
//!
//! # Memory Management
//!
//! Pixel data lives in an [`Arc<Vec<u8>>`]: cloning is cheap and shares
//! the bytes, and the first mutation through [`RasterBuffer::data_mut`]
//! copies them (copy-on-write).
//!
//! # Usage
//!
//! ```rust
//! use pixtone_core::RasterBuffer;
//!
//! let original = RasterBuffer::filled(4, 2, [100, 150, 50, 255]);
//! let mut edited = original.clone(); // shares bytes
//! edited.set_pixel(0, 0, [0, 0, 0, 255]); // copies on write
//! assert_eq!(original.pixel(0, 0), [100, 150, 50, 255]);
//! assert_eq!(edited.pixel(0, 0), [0, 0, 0, 255]);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::pixel::{self, CHANNELS, Rgba8};
use crate::{Error, Result};

/// Checks that `len` bytes describe a `width` x `height` RGBA8 raster.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if a dimension is zero, the byte size
/// overflows, or `len` differs from `width * height * 4`.
pub fn validate_shape(len: usize, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        debug!(width, height, len, "rejecting raster with zero dimension");
        return Err(Error::shape_mismatch(
            width,
            height,
            len,
            "width and height must be > 0",
        ));
    }

    let expected = pixel::byte_len(width, height).ok_or_else(|| {
        Error::shape_mismatch(width, height, len, "raster dimensions overflow")
    })?;

    if len != expected {
        debug!(width, height, len, expected, "rejecting raster with wrong length");
        return Err(Error::shape_mismatch(
            width,
            height,
            len,
            format!("expected {} bytes", expected),
        ));
    }

    Ok(())
}

/// Owned RGBA8 raster with copy-on-write pixel storage.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl RasterBuffer {
    /// Creates a transparent black raster.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if a dimension is zero or the size overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = pixel::byte_len(width, height).unwrap_or(0);
        let data = vec![0u8; len];
        Self::from_data(width, height, data)
    }

    /// Wraps existing pixel data.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `data.len() != width * height * 4` or a
    /// dimension is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixtone_core::RasterBuffer;
    ///
    /// assert!(RasterBuffer::from_data(2, 2, vec![0; 16]).is_ok());
    /// assert!(RasterBuffer::from_data(2, 2, vec![0; 15]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        validate_shape(data.len(), width, height)?;
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates a raster filled with one pixel value.
    ///
    /// Zero dimensions are clamped to 1 so the result is always valid.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&px);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw bytes mutably, copying them first if shared.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Consumes the raster and returns its bytes.
    pub fn into_data(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Returns `true` if both rasters have the same dimensions.
    #[inline]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut px = [0u8; CHANNELS];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data_mut()[offset..offset + CHANNELS].copy_from_slice(&px);
    }

    /// Returns row `y` as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * pixel::row_len(self.width);
        &self.data[start..start + pixel::row_len(self.width)]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba8)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl std::fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}
