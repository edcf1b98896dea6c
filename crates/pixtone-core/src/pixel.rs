//! RGBA8 pixel layout helpers.
//!
//! A raster stores pixels as interleaved `[R, G, B, A]` bytes, row-major,
//! top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```

/// Number of channels per pixel.
pub const CHANNELS: usize = 4;

/// One RGBA8 pixel.
pub type Rgba8 = [u8; CHANNELS];

/// Returns the byte length of a tightly packed RGBA8 buffer, or `None` on
/// overflow.
#[inline]
pub fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
}

/// Returns the byte length of one row.
#[inline]
pub fn row_len(width: u32) -> usize {
    width as usize * CHANNELS
}
