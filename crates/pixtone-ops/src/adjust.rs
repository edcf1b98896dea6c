//! Hue / contrast / exposure adjustment for RGBA8 rasters.
//!
//! Every foreground pixel runs through four stages in a fixed order:
//!
//! 1. **Hue**: rotation about the RGB gray axis ([`Mat3::hue_rotation`]).
//!    Skipped when `hue_degrees == 0`.
//! 2. **Contrast**: `f * (v - 128) + 128` with
//!    `C = (percent - 100) * 2.55` and `f = 259(C + 255) / (255(259 - C))`.
//!    Skipped when `f == 1`, which holds exactly at 100%.
//! 3. **Exposure**: `v + offset`. Skipped when the offset is 0.
//! 4. **Quantize**: clamp to `[0, 255]`, round half to even.
//!
//! Stages 1-3 work on unclamped `f64` values; only stage 4 clamps.
//! Background pixels (see [`crate::mask`]) are never touched and alpha is
//! never modified.
//!
//! The transform is meant to be applied to a fresh copy of the unedited
//! original on every render. Feeding a result back in compounds the
//! adjustments and is not a supported mode.
//!
//! # Example
//!
//! ```rust
//! use pixtone_ops::adjust::{apply_inplace, Adjustments};
//!
//! let mut pixels = vec![100, 150, 50, 255];
//! let adj = Adjustments::new(90, 150, 20);
//! apply_inplace(&mut pixels, 1, 1, &adj).unwrap();
//! assert_eq!(pixels, vec![0, 151, 151, 255]);
//! ```

use std::ops::Range;

use pixtone_core::{CHANNELS, Error, RasterBuffer, Result, Rgba8, pixel, validate_shape};
use pixtone_math::{DVec3, Mat3};
use tracing::{debug, trace};

use crate::mask::is_background;

/// Channel value contrast pivots around.
pub const MID_GRAY: f64 = 128.0;

/// Maps contrast percent offsets onto the roughly -255..255 range.
pub const CONTRAST_SCALE: f64 = 2.55;

/// Neutral contrast percentage.
pub const NEUTRAL_CONTRAST: i32 = 100;

/// Adjustment parameters for one image.
///
/// `Adjustments::IDENTITY` (`{0, 100, 0}`) leaves every pixel unchanged,
/// byte for byte. Values outside the conventional slider ranges are
/// accepted and produce defined, if extreme, results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Adjustments {
    /// Hue rotation in degrees, conventionally -180..=180.
    #[cfg_attr(feature = "serde", serde(rename = "hue"))]
    pub hue_degrees: i32,
    /// Contrast in percent, 100 = neutral, conventionally 0..=200.
    #[cfg_attr(feature = "serde", serde(rename = "contrast"))]
    pub contrast_percent: i32,
    /// Additive exposure offset, conventionally -255..=255.
    #[cfg_attr(feature = "serde", serde(rename = "exposure"))]
    pub exposure_offset: i32,
}

impl Adjustments {
    /// No change.
    pub const IDENTITY: Self = Self {
        hue_degrees: 0,
        contrast_percent: NEUTRAL_CONTRAST,
        exposure_offset: 0,
    };

    /// Creates adjustments from the three slider values.
    #[inline]
    pub const fn new(hue_degrees: i32, contrast_percent: i32, exposure_offset: i32) -> Self {
        Self {
            hue_degrees,
            contrast_percent,
            exposure_offset,
        }
    }

    /// Check if this is identity (no-op).
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.hue_degrees == 0
            && self.contrast_percent == NEUTRAL_CONTRAST
            && self.exposure_offset == 0
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Contrast factor for a percentage.
///
/// Exactly `1.0` at 100%. The denominator vanishes at `C = 259`
/// (about 201.57%), which no integer percentage reaches.
#[inline]
pub fn contrast_factor(contrast_percent: i32) -> f64 {
    let c = (f64::from(contrast_percent) - f64::from(NEUTRAL_CONTRAST)) * CONTRAST_SCALE;
    259.0 * (c + 255.0) / (255.0 * (259.0 - c))
}

/// Converts an intermediate channel value to a byte.
///
/// NaN maps to 0, everything else is clamped to `[0, 255]` and rounded
/// half to even.
#[inline]
pub fn quantize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Stage coefficients precomputed from [`Adjustments`].
///
/// Building the plan once per render keeps trigonometry out of the
/// per-pixel loop. A plan is `Sync` and can be shared across worker threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustPlan {
    hue: Option<Mat3>,
    contrast: Option<f64>,
    exposure: Option<f64>,
}

impl AdjustPlan {
    /// Precomputes the stages that are not no-ops.
    pub fn new(adj: &Adjustments) -> Self {
        let hue = (adj.hue_degrees != 0).then(|| Mat3::hue_rotation(f64::from(adj.hue_degrees)));
        let factor = contrast_factor(adj.contrast_percent);
        let contrast = (factor != 1.0).then_some(factor);
        let exposure = (adj.exposure_offset != 0).then(|| f64::from(adj.exposure_offset));

        Self {
            hue,
            contrast,
            exposure,
        }
    }

    /// Returns true if every stage is skipped.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.hue.is_none() && self.contrast.is_none() && self.exposure.is_none()
    }

    /// Runs stages 1-3 on an RGB triplet without clamping.
    #[inline]
    pub fn apply_rgb(&self, rgb: DVec3) -> DVec3 {
        let mut v = rgb;
        if let Some(m) = &self.hue {
            v = m.transform(v);
        }
        if let Some(factor) = self.contrast {
            v = (v - MID_GRAY) * factor + MID_GRAY;
        }
        if let Some(offset) = self.exposure {
            v += offset;
        }
        v
    }

    /// Runs mask, stages and quantization on one pixel.
    #[inline]
    pub fn apply_pixel(&self, px: Rgba8) -> Rgba8 {
        if is_background(px) {
            return px;
        }
        let rgb = DVec3::new(f64::from(px[0]), f64::from(px[1]), f64::from(px[2]));
        let out = self.apply_rgb(rgb);
        [quantize(out.x), quantize(out.y), quantize(out.z), px[3]]
    }

    /// Applies the plan to every whole pixel in `data`.
    ///
    /// Trailing bytes that do not form a full pixel are left alone.
    pub fn apply_slice(&self, data: &mut [u8]) {
        if self.is_identity() {
            return;
        }
        for chunk in data.chunks_exact_mut(CHANNELS) {
            let px = [chunk[0], chunk[1], chunk[2], chunk[3]];
            chunk.copy_from_slice(&self.apply_pixel(px));
        }
    }
}

/// Applies adjustments to a caller-owned RGBA8 buffer in place.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if `data.len() != width * height * 4` or a
/// dimension is zero. The buffer is not touched in that case.
pub fn apply_inplace(data: &mut [u8], width: u32, height: u32, adj: &Adjustments) -> Result<()> {
    trace!(
        width,
        height,
        hue = adj.hue_degrees,
        contrast = adj.contrast_percent,
        exposure = adj.exposure_offset,
        "adjust::apply_inplace"
    );
    validate_shape(data.len(), width, height)?;

    let plan = AdjustPlan::new(adj);
    if plan.is_identity() {
        debug!("identity adjustments, leaving buffer unchanged");
        return Ok(());
    }
    plan.apply_slice(data);
    Ok(())
}

/// Writes the adjusted `src` into `dst`, leaving `src` untouched.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if either buffer does not match
/// `width x height`. `dst` is not touched in that case.
pub fn apply_into(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    adj: &Adjustments,
) -> Result<()> {
    validate_shape(src.len(), width, height)?;
    validate_shape(dst.len(), width, height)?;
    dst.copy_from_slice(src);
    apply_inplace(dst, width, height, adj)
}

/// Returns an adjusted copy of `src`.
///
/// The source keeps its bytes; the copy is made lazily by the raster's
/// copy-on-write storage and only when a stage actually runs.
pub fn apply(src: &RasterBuffer, adj: &Adjustments) -> RasterBuffer {
    trace!(width = src.width(), height = src.height(), "adjust::apply");
    let plan = AdjustPlan::new(adj);
    let mut out = src.clone();
    if !plan.is_identity() {
        plan.apply_slice(out.data_mut());
    }
    out
}

/// Applies adjustments to rows `rows.start..rows.end` only.
///
/// Pixels have no neighbours in the transform, so processing disjoint row
/// ranges separately gives the same bytes as one whole-buffer call.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the buffer does not match `width x height`
/// or the row range is reversed or extends past `height`.
pub fn apply_rows(
    data: &mut [u8],
    width: u32,
    height: u32,
    rows: Range<u32>,
    adj: &Adjustments,
) -> Result<()> {
    validate_shape(data.len(), width, height)?;
    if rows.start > rows.end || rows.end > height {
        return Err(Error::shape_mismatch(
            width,
            height,
            data.len(),
            format!("row range {}..{} outside 0..{}", rows.start, rows.end, height),
        ));
    }
    trace!(width, height, start = rows.start, end = rows.end, "adjust::apply_rows");

    let row_len = pixel::row_len(width);
    let start = rows.start as usize * row_len;
    let end = rows.end as usize * row_len;
    AdjustPlan::new(adj).apply_slice(&mut data[start..end]);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
