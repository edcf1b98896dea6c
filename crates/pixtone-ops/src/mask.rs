//! Foreground/background classification.
//!
//! Product shots sit on a near-white canvas. A pixel whose R, G and B are
//! all strictly above [`BACKGROUND_THRESHOLD`] is background and is never
//! adjusted; everything else is the subject. A channel at exactly 240
//! counts as foreground.

use pixtone_core::Rgba8;

/// Channel level above which a pixel may be background.
pub const BACKGROUND_THRESHOLD: u8 = 240;

/// Returns true if the pixel belongs to the near-white backdrop.
///
/// Alpha does not take part in the decision.
#[inline]
pub fn is_background(px: Rgba8) -> bool {
    px[0] > BACKGROUND_THRESHOLD && px[1] > BACKGROUND_THRESHOLD && px[2] > BACKGROUND_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(is_background([241, 241, 241, 255]));
        assert!(is_background([255, 255, 255, 0]));
        assert!(!is_background([240, 255, 255, 255]));
        assert!(!is_background([255, 240, 255, 255]));
        assert!(!is_background([255, 255, 240, 255]));
        assert!(!is_background([0, 0, 0, 255]));
    }
}
