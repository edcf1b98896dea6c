//! Per-image adjustment catalog.
//!
//! Holds one [`Adjustments`] record per editable image. Images without a
//! stored record read as [`Adjustments::IDENTITY`]. With the `serde`
//! feature the catalog serializes as a map from image id to
//! `{hue, contrast, exposure}`; choosing a format and storage is left to
//! the caller.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::adjust::Adjustments;

/// Identifier of an editable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image#{}", self.0)
    }
}

/// Adjustments for a set of images, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EditCatalog {
    edits: BTreeMap<ImageId, Adjustments>,
}

impl EditCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with every listed image at identity.
    pub fn with_images(ids: impl IntoIterator<Item = ImageId>) -> Self {
        let mut catalog = Self::new();
        catalog.ensure(ids);
        catalog
    }

    /// Adds identity entries for listed images that have none.
    ///
    /// Existing entries are kept as they are.
    pub fn ensure(&mut self, ids: impl IntoIterator<Item = ImageId>) {
        for id in ids {
            self.edits.entry(id).or_insert(Adjustments::IDENTITY);
        }
    }

    /// Adjustments for `id`; identity if none are stored.
    pub fn get(&self, id: ImageId) -> Adjustments {
        self.edits.get(&id).copied().unwrap_or_default()
    }

    /// Stores adjustments for `id`, returning the previous record.
    pub fn set(&mut self, id: ImageId, adj: Adjustments) -> Option<Adjustments> {
        debug!(
            %id,
            hue = adj.hue_degrees,
            contrast = adj.contrast_percent,
            exposure = adj.exposure_offset,
            "storing adjustments"
        );
        self.edits.insert(id, adj)
    }

    /// Puts `id` back to identity.
    pub fn reset(&mut self, id: ImageId) {
        self.set(id, Adjustments::IDENTITY);
    }

    /// Returns true if a record is stored for `id`.
    pub fn contains(&self, id: ImageId) -> bool {
        self.edits.contains_key(&id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Iterates over stored records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageId, Adjustments)> + '_ {
        self.edits.iter().map(|(id, adj)| (*id, *adj))
    }
}
