//! Image gradients (Sobel/Scharr) with per-sample magnitude.
//!
//! - Runs a 3×3 kernel pair (`horizontal`, `vertical`) per channel.
//! - Outputs `horizontal`, `vertical` and `magnitude = sqrt(h^2 + v^2)`.
use crate::composite::combine;
use crate::convolve::apply_kernel;
use crate::error::TransformResult;
use crate::image::{ImageView, PixelBuffer};
use crate::kernel::Kernel;
use serde::{Deserialize, Serialize};

/// Kernel family used for the directional pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKernel {
    #[default]
    Sobel,
    /// Better rotational symmetry than Sobel.
    Scharr,
}

impl GradientKernel {
    /// The `(horizontal, vertical)` kernel pair.
    pub fn kernels(self) -> (Kernel, Kernel) {
        match self {
            GradientKernel::Sobel => (Kernel::horizontal_edge(), Kernel::vertical_edge()),
            GradientKernel::Scharr => (Kernel::scharr_horizontal(), Kernel::scharr_vertical()),
        }
    }
}

/// Per-sample directional responses and their magnitude.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Response to the horizontal-edge kernel
    pub horizontal: PixelBuffer,
    /// Response to the vertical-edge kernel
    pub vertical: PixelBuffer,
    /// Euclidean magnitude per sample
    pub magnitude: PixelBuffer,
}

/// Compute both directional responses of `input` and merge them.
pub fn gradients<I: ImageView>(input: &I, kind: GradientKernel) -> TransformResult<Grad> {
    let (kh, kv) = kind.kernels();
    let horizontal = apply_kernel(input, &kh);
    let vertical = apply_kernel(input, &kv);
    let magnitude = combine(&horizontal, &vertical)?;
    Ok(Grad {
        horizontal,
        vertical,
        magnitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(width: usize, height: usize, split_x: usize) -> PixelBuffer {
        let mut img = PixelBuffer::new(width, height, 1).unwrap();
        for y in 0..height {
            for x in split_x..width {
                img.set(x, y, 0, 1.0).unwrap();
            }
        }
        img
    }

    #[test]
    fn flat_image_has_no_interior_gradient() {
        let img = PixelBuffer::filled(8, 6, 3, 0.6).unwrap();
        for kind in [GradientKernel::Sobel, GradientKernel::Scharr] {
            let grad = gradients(&img, kind).unwrap();
            for y in 1..5 {
                for x in 1..7 {
                    for c in 0..3 {
                        let m = grad.magnitude.get(x, y, c).unwrap();
                        assert!(m.abs() < 1e-5, "{kind:?} ({x},{y},{c}) = {m}");
                    }
                }
            }
        }
    }

    #[test]
    fn step_responds_only_at_the_boundary() {
        let img = step_image(10, 6, 5);
        let grad = gradients(&img, GradientKernel::Sobel).unwrap();
        for y in 0..6 {
            for x in 1..9 {
                let h = grad.horizontal.get(x, y, 0).unwrap();
                if x == 4 || x == 5 {
                    // 4·v(x-1) - 4·v(x+1) on full columns
                    assert!(h < -1.0, "({x},{y}) = {h}");
                } else {
                    assert!(h.abs() < 1e-6, "({x},{y}) = {h}");
                }
                let v = grad.vertical.get(x, y, 0).unwrap();
                if y > 0 && y < 5 {
                    assert!(v.abs() < 1e-6, "({x},{y}) = {v}");
                }
            }
        }
        let m = grad.magnitude.get(4, 3, 0).unwrap();
        assert!((m - 4.0).abs() < 1e-6, "m={m}");
    }
}
