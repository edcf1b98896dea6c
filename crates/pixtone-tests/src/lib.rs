//! Integration tests for pixtone crates.
//!
//! End-to-end checks of the adjustment engine through its public APIs:
//! the algebraic properties it guarantees, agreement between the
//! sequential, parallel, row-range and session entry points, and golden
//! hashes of whole-image output.
//!
//! Set `RUST_LOG=pixtone_ops=trace` to see engine tracing while testing.

use pixtone_core::RasterBuffer;

#[cfg(test)]
mod golden;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic test image: a color gradient with a near-white backdrop
/// strip on the right (columns 56 and up).
pub fn gradient_image(width: u32, height: u32) -> RasterBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            if x >= 56 {
                data.extend_from_slice(&[248, 250, 252, 255]);
            } else {
                data.extend_from_slice(&[
                    ((x * 4 + y * 2) % 256) as u8,
                    ((y * 5 + x) % 256) as u8,
                    ((x * 3 + y * 7 + 40) % 256) as u8,
                    ((x + y) % 256) as u8,
                ]);
            }
        }
    }
    RasterBuffer::from_data(width, height, data).expect("gradient shape")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_ops::adjust::{self, AdjustPlan, Adjustments};
    use pixtone_ops::mask::is_background;
    use pixtone_ops::parallel::{self, ParallelOptions};
    use pixtone_ops::{EditCatalog, EditSession, ImageId, ThumbnailOptions, render_thumbnail};

    /// Every foreground level combination on a coarse grid, plus edge levels.
    fn probe_pixels() -> Vec<[u8; 4]> {
        let levels = [0u8, 1, 17, 64, 100, 127, 128, 150, 200, 239, 240, 241, 254, 255];
        let mut out = Vec::new();
        for &r in &levels {
            for &g in &levels {
                for &b in &levels {
                    out.push([r, g, b, r ^ g ^ b]);
                }
            }
        }
        out
    }

    fn run(px: [u8; 4], adj: Adjustments) -> [u8; 4] {
        let mut data = px.to_vec();
        adjust::apply_inplace(&mut data, 1, 1, &adj).unwrap();
        [data[0], data[1], data[2], data[3]]
    }

    #[test]
    fn identity_law() {
        init_tracing();
        let src = gradient_image(64, 48);
        let mut data = src.data().to_vec();
        adjust::apply_inplace(&mut data, 64, 48, &Adjustments::new(0, 100, 0)).unwrap();
        assert_eq!(data, src.data());

        for px in probe_pixels() {
            assert_eq!(run(px, Adjustments::IDENTITY), px);
        }
    }

    #[test]
    fn background_invariance() {
        let settings = [
            Adjustments::new(90, 150, 20),
            Adjustments::new(-180, 0, -255),
            Adjustments::new(33, 200, 255),
            Adjustments::new(720, 60, -1),
        ];
        for r in 241..=255u8 {
            for g in [241u8, 248, 255] {
                for b in [241u8, 250, 255] {
                    for adj in settings {
                        let px = [r, g, b, 77];
                        assert_eq!(run(px, adj), px);
                    }
                }
            }
        }
    }

    #[test]
    fn alpha_never_changes() {
        let adj = Adjustments::new(-100, 170, 60);
        for px in probe_pixels() {
            assert_eq!(run(px, adj)[3], px[3]);
        }
    }

    #[test]
    fn hue_periodicity() {
        for hue in [-170, -90, -45, 1, 45, 90, 135, 180, 359] {
            for px in probe_pixels() {
                let a = run(px, Adjustments::new(hue, 100, 0));
                let b = run(px, Adjustments::new(hue + 360, 100, 0));
                assert_eq!(a, b, "hue {} pixel {:?}", hue, px);
            }
        }
    }

    #[test]
    fn contrast_monotonic_around_mid_gray() {
        let gray = [200, 200, 200, 255];
        let dist = |adj| (i32::from(run(gray, adj)[0]) - 128).abs();
        let neutral = dist(Adjustments::new(0, 100, 0));
        assert_eq!(neutral, 72);
        assert!(dist(Adjustments::new(0, 120, 0)) > neutral);
        assert!(dist(Adjustments::new(0, 150, 0)) > neutral);
        assert!(dist(Adjustments::new(0, 80, 0)) < neutral);
        assert!(dist(Adjustments::new(0, 50, 0)) < neutral);
        assert!(dist(Adjustments::new(0, 50, 0)) < dist(Adjustments::new(0, 80, 0)));
    }

    #[test]
    fn exposure_additive_before_clamp() {
        let px = [100, 100, 100, 255];
        for (e1, e2) in [(10, 20), (-30, 45), (50, -70), (0, 99)] {
            let once = run(px, Adjustments::new(0, 100, e1 + e2));
            let a = run(px, Adjustments::new(0, 100, e1));
            let b = run(px, Adjustments::new(0, 100, e2));
            let step = i32::from(b[0]) - 100;
            assert_eq!(i32::from(once[0]), i32::from(a[0]) + step);
            assert_eq!(once[0], once[1]);
            assert_eq!(once[1], once[2]);
        }
    }

    #[test]
    fn regression_vector() {
        assert_eq!(run([100, 150, 50, 255], Adjustments::new(90, 150, 20)), [0, 151, 151, 255]);
    }

    #[test]
    fn mask_matches_engine() {
        let adj = Adjustments::new(90, 180, -40);
        let plan = AdjustPlan::new(&adj);
        for px in probe_pixels() {
            if is_background(px) {
                assert_eq!(plan.apply_pixel(px), px);
            }
        }
    }

    #[test]
    fn shape_mismatch_leaves_buffer() {
        let mut data = vec![42u8; 4 * 4 * 4 - 1];
        let adj = Adjustments::new(90, 150, 20);
        assert!(adjust::apply_inplace(&mut data, 4, 4, &adj).unwrap_err().is_shape_error());
        assert!(parallel::apply_inplace(&mut data, 4, 4, &adj).unwrap_err().is_shape_error());
        assert!(data.iter().all(|&v| v == 42));

        let mut exact = vec![42u8; 64];
        assert!(adjust::apply_inplace(&mut exact, 0, 16, &adj).is_err());
        assert!(exact.iter().all(|&v| v == 42));
    }

    #[test]
    fn deterministic_across_entry_points() {
        init_tracing();
        let src = gradient_image(64, 48);
        let adj = Adjustments::new(-50, 120, -15);

        let sequential = adjust::apply(&src, &adj);
        let again = adjust::apply(&src, &adj);
        assert_eq!(sequential, again);

        assert_eq!(parallel::apply(&src, &adj), sequential);
        assert_eq!(pixtone_ops::render(&src, &adj), sequential);

        for rows_per_task in [1, 3, 7, 48] {
            let mut data = src.data().to_vec();
            let opts = ParallelOptions { rows_per_task };
            parallel::apply_inplace_with(&mut data, 64, 48, &adj, opts).unwrap();
            assert_eq!(data, sequential.data());
        }

        let mut rows = src.data().to_vec();
        for band in [0..10, 10..11, 11..40, 40..48] {
            adjust::apply_rows(&mut rows, 64, 48, band, &adj).unwrap();
        }
        assert_eq!(rows, sequential.data());

        let mut out = vec![0u8; src.data().len()];
        adjust::apply_into(src.data(), &mut out, 64, 48, &adj).unwrap();
        assert_eq!(out, sequential.data());
    }

    #[test]
    fn session_applies_from_original() {
        let src = gradient_image(64, 48);
        let mut session = EditSession::new(ImageId(0), src.clone(), Adjustments::IDENTITY);
        session.set_hue(90);
        let _ = session.render();
        session.set_contrast(150);
        let _ = session.render();
        session.set_exposure(20);

        let expected = adjust::apply(&src, &Adjustments::new(90, 150, 20));
        assert_eq!(session.render(), expected);
        assert_eq!(session.original(), &src);
    }

    #[test]
    fn thumbnail_uses_same_engine() {
        let photo = RasterBuffer::filled(1200, 900, [64, 128, 192, 255]);
        let adj = Adjustments::new(30, 110, 5);
        let thumb = render_thumbnail(&photo, &adj, &ThumbnailOptions::default()).unwrap();
        assert_eq!(thumb.dimensions(), (400, 300));
        assert_eq!(thumb.pixel(123, 45), run([64, 128, 192, 255], adj));
        assert_eq!(thumb.pixel(0, 0), [88, 88, 223, 255]);
    }

    #[test]
    fn catalog_json_round_trip() {
        let mut catalog = EditCatalog::with_images((0..4).map(ImageId));
        catalog.set(ImageId(2), Adjustments::new(-45, 130, 12));

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"2\":{\"hue\":-45,\"contrast\":130,\"exposure\":12}"));

        let restored: EditCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn catalog_json_fills_missing_fields() {
        let restored: EditCatalog = serde_json::from_str(r#"{"1":{"hue":15}}"#).unwrap();
        assert_eq!(restored.get(ImageId(1)), Adjustments::new(15, 100, 0));

        let mut restored = restored;
        restored.ensure((0..4).map(ImageId));
        assert_eq!(restored.len(), 4);
        assert_eq!(restored.get(ImageId(1)), Adjustments::new(15, 100, 0));
    }
}
