//! Editing session for one image.
//!
//! A session keeps the decoded original untouched and re-renders from it
//! on every slider change. Edits never stack on top of earlier results:
//! each render is a fresh copy of the original run through the engine once.

use pixtone_core::{Error, RasterBuffer, Result};
use tracing::{debug, trace};

use crate::adjust::{AdjustPlan, Adjustments};
use crate::catalog::{EditCatalog, ImageId};

/// Original pixels plus the adjustments currently dialed in.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: ImageId,
    original: RasterBuffer,
    adjustments: Adjustments,
}

impl EditSession {
    /// Opens a session on `original` with the given starting adjustments.
    pub fn new(id: ImageId, original: RasterBuffer, adjustments: Adjustments) -> Self {
        debug!(%id, width = original.width(), height = original.height(), "opening edit session");
        Self {
            id,
            original,
            adjustments,
        }
    }

    /// Opens a session starting from the adjustments stored in `catalog`.
    pub fn from_catalog(id: ImageId, original: RasterBuffer, catalog: &EditCatalog) -> Self {
        Self::new(id, original, catalog.get(id))
    }

    /// Image being edited.
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Unedited pixels.
    pub fn original(&self) -> &RasterBuffer {
        &self.original
    }

    /// Current adjustments.
    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    /// Replaces all adjustments.
    pub fn set_adjustments(&mut self, adjustments: Adjustments) {
        self.adjustments = adjustments;
    }

    /// Sets the hue slider.
    pub fn set_hue(&mut self, degrees: i32) {
        self.adjustments.hue_degrees = degrees;
    }

    /// Sets the contrast slider.
    pub fn set_contrast(&mut self, percent: i32) {
        self.adjustments.contrast_percent = percent;
    }

    /// Sets the exposure slider.
    pub fn set_exposure(&mut self, offset: i32) {
        self.adjustments.exposure_offset = offset;
    }

    /// Puts every slider back to neutral.
    pub fn reset(&mut self) {
        self.adjustments = Adjustments::IDENTITY;
    }

    /// Renders the current adjustments from the original.
    pub fn render(&self) -> RasterBuffer {
        trace!(id = %self.id, "session::render");
        crate::render(&self.original, &self.adjustments)
    }

    /// Renders into a caller-provided raster, reusing its allocation.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `out` differs in size from the original;
    /// `out` is not touched.
    pub fn render_into(&self, out: &mut RasterBuffer) -> Result<()> {
        if !out.same_shape(&self.original) {
            return Err(Error::shape_mismatch(
                out.width(),
                out.height(),
                out.data().len(),
                format!(
                    "render target must be {}x{}",
                    self.original.width(),
                    self.original.height()
                ),
            ));
        }
        let data = out.data_mut();
        data.copy_from_slice(self.original.data());
        AdjustPlan::new(&self.adjustments).apply_slice(data);
        Ok(())
    }

    /// Stores the current adjustments in `catalog`.
    pub fn commit(&self, catalog: &mut EditCatalog) {
        catalog.set(self.id, self.adjustments);
    }
}
