//! Per-sample arithmetic with no neighbor dependency.
//!
//! Results are not clamped; values outside `[0, 1]` survive until encode.
use crate::image::{ImageView, PixelBuffer};

/// Scale every sample by `factor` (`> 1` brightens, `< 1` darkens).
pub fn brighten<I: ImageView>(input: &I, factor: f32) -> PixelBuffer {
    input.map(|v| v * factor)
}

/// Scale every sample's deviation from `mid` by `factor`.
///
/// `mid` is a caller-chosen reference level; it is not derived from the image.
pub fn adjust_contrast<I: ImageView>(input: &I, factor: f32, mid: f32) -> PixelBuffer {
    input.map(|v| (v - mid) * factor + mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> PixelBuffer {
        let data = (0..18).map(|i| i as f32 / 17.0).collect();
        PixelBuffer::from_vec(3, 2, 3, data).unwrap()
    }

    #[test]
    fn unit_factors_are_identity() {
        let img = sample_image();
        assert_eq!(brighten(&img, 1.0), img);
        for mid in [0.0, 0.5, 0.25] {
            let out = adjust_contrast(&img, 1.0, mid);
            for (a, b) in out.as_slice().iter().zip(img.as_slice()) {
                assert!((a - b).abs() < 1e-6, "mid={mid}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn brighten_scales_without_clamping() {
        let img = PixelBuffer::filled(2, 2, 1, 0.8).unwrap();
        let out = brighten(&img, 1.7);
        assert!((out.get(1, 1, 0).unwrap() - 1.36).abs() < 1e-6);
        let dark = brighten(&img, 0.3);
        assert!((dark.get(0, 0, 0).unwrap() - 0.24).abs() < 1e-6);
    }

    #[test]
    fn contrast_expands_and_compresses_around_mid() {
        let mut img = PixelBuffer::new(2, 1, 1).unwrap();
        img.set(0, 0, 0, 0.25).unwrap();
        img.set(1, 0, 0, 0.75).unwrap();

        let up = adjust_contrast(&img, 2.0, 0.5);
        assert_eq!(up.get(0, 0, 0).unwrap(), 0.0);
        assert_eq!(up.get(1, 0, 0).unwrap(), 1.0);

        let down = adjust_contrast(&img, 0.5, 0.5);
        assert_eq!(down.get(0, 0, 0).unwrap(), 0.375);
        assert_eq!(down.get(1, 0, 0).unwrap(), 0.625);
    }
}
