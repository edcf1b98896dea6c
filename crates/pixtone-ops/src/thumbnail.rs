//! Gallery thumbnails.
//!
//! The gallery shows every image at a fixed display width with its aspect
//! ratio preserved, then runs the same adjustment engine as the full-size
//! editor over the scaled pixels. Narrow sources are scaled up to that
//! width as well, so all tiles line up.
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RasterBuffer;
//! use pixtone_ops::adjust::Adjustments;
//! use pixtone_ops::thumbnail::{render_thumbnail, ThumbnailOptions};
//!
//! let photo = RasterBuffer::filled(1600, 1200, [100, 150, 50, 255]);
//! let adj = Adjustments::new(90, 150, 20);
//! let thumb = render_thumbnail(&photo, &adj, &ThumbnailOptions::default()).unwrap();
//! assert_eq!(thumb.dimensions(), (400, 300));
//! assert_eq!(thumb.pixel(0, 0), [0, 151, 151, 255]);
//! ```

use pixtone_core::{CHANNELS, Error, RasterBuffer, Result};
use tracing::{debug, trace};

use crate::adjust::Adjustments;

/// Width gallery tiles are rendered at.
pub const DISPLAY_WIDTH: u32 = 400;

/// Largest pixel count a resize target may have.
pub const MAX_TARGET_PIXELS: u64 = 1 << 26;

/// Resampling filter for thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation (smooth).
    #[default]
    Bilinear,
}

/// Thumbnail rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailOptions {
    /// Output width; height follows the source aspect ratio.
    pub max_width: u32,
    /// Resampling filter.
    pub filter: Filter,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            max_width: DISPLAY_WIDTH,
            filter: Filter::default(),
        }
    }
}

/// Thumbnail dimensions for a `width x height` source.
///
/// Height is `max_width * (height / width)` in `f64`, truncated, at least 1.
/// This can sit one row below the exact integer quotient when `height /
/// width` is not representable, as canvas sizing does.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `max_width` is 0 or the result exceeds
/// [`MAX_TARGET_PIXELS`], and [`Error::ShapeMismatch`] if a source
/// dimension is 0.
pub fn thumbnail_size(width: u32, height: u32, max_width: u32) -> Result<(u32, u32)> {
    if max_width == 0 {
        return Err(Error::invalid_parameter("thumbnail width must be > 0"));
    }
    if width == 0 || height == 0 {
        return Err(Error::shape_mismatch(width, height, 0, "source has a zero dimension"));
    }
    let aspect = f64::from(height) / f64::from(width);
    let thumb_height = ((f64::from(max_width) * aspect) as u32).max(1);
    check_target(max_width, thumb_height)?;
    Ok((max_width, thumb_height))
}

fn check_target(width: u32, height: u32) -> Result<()> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_TARGET_PIXELS {
        return Err(Error::invalid_parameter(format!(
            "target size {}x{} exceeds {} pixels",
            width, height, MAX_TARGET_PIXELS
        )));
    }
    Ok(())
}

/// Resamples an RGBA8 raster to `dst_w x dst_h`.
///
/// Sample positions use pixel centers; alpha is interpolated like the
/// color channels.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if a target dimension is 0 or the target
/// exceeds [`MAX_TARGET_PIXELS`].
pub fn resize(src: &RasterBuffer, dst_w: u32, dst_h: u32, filter: Filter) -> Result<RasterBuffer> {
    if dst_w == 0 || dst_h == 0 {
        return Err(Error::invalid_parameter(format!(
            "target size {}x{} must be > 0",
            dst_w, dst_h
        )));
    }
    check_target(dst_w, dst_h)?;
    trace!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w,
        dst_h,
        ?filter,
        "thumbnail::resize"
    );

    if src.dimensions() == (dst_w, dst_h) {
        return Ok(src.clone());
    }

    let scale_x = src.width() as f32 / dst_w as f32;
    let scale_y = src.height() as f32 / dst_h as f32;
    let mut data = Vec::with_capacity(dst_w as usize * dst_h as usize * CHANNELS);

    for y in 0..dst_h {
        let sy = (y as f32 + 0.5) * scale_y - 0.5;
        for x in 0..dst_w {
            let sx = (x as f32 + 0.5) * scale_x - 0.5;
            let px = match filter {
                Filter::Nearest => sample_nearest(src, sx, sy),
                Filter::Bilinear => sample_bilinear(src, sx, sy),
            };
            data.extend_from_slice(&px);
        }
    }

    RasterBuffer::from_data(dst_w, dst_h, data)
}

fn sample_nearest(src: &RasterBuffer, sx: f32, sy: f32) -> [u8; CHANNELS] {
    let x = (sx.round().max(0.0) as u32).min(src.width() - 1);
    let y = (sy.round().max(0.0) as u32).min(src.height() - 1);
    src.pixel(x, y)
}

fn sample_bilinear(src: &RasterBuffer, sx: f32, sy: f32) -> [u8; CHANNELS] {
    let max_x = (src.width() - 1) as f32;
    let max_y = (src.height() - 1) as f32;
    let sx = sx.clamp(0.0, max_x);
    let sy = sy.clamp(0.0, max_y);

    let x0 = sx.floor() as u32;
    let y0 = sy.floor() as u32;
    let x1 = (x0 + 1).min(src.width() - 1);
    let y1 = (y0 + 1).min(src.height() - 1);
    let fx = sx - x0 as f32;
    let fy = sy - y0 as f32;

    let p00 = src.pixel(x0, y0);
    let p10 = src.pixel(x1, y0);
    let p01 = src.pixel(x0, y1);
    let p11 = src.pixel(x1, y1);

    let mut out = [0u8; CHANNELS];
    for c in 0..CHANNELS {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        let v = top * (1.0 - fy) + bottom * fy;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Renders a gallery tile: resize to the display width, then adjust.
pub fn render_thumbnail(
    src: &RasterBuffer,
    adj: &Adjustments,
    options: &ThumbnailOptions,
) -> Result<RasterBuffer> {
    let (w, h) = thumbnail_size(src.width(), src.height(), options.max_width)?;
    let scaled = resize(src, w, h, options.filter)?;
    debug!(width = w, height = h, "rendering thumbnail");
    Ok(crate::render(&scaled, adj))
}
