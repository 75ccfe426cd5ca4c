//! Box blur over a clamped window.
//!
//! Sums the clamped window directly instead of going through a uniform
//! [`Kernel`](crate::kernel::Kernel). The divisor is selected by
//! [`BlurNormalization`].
use super::window::clamped_window;
use crate::error::TransformResult;
use crate::image::{ImageView, PixelBuffer};
use crate::kernel::validate_size;
use crate::par::fill_rows;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Divisor applied to each blurred window sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurNormalization {
    /// Always divide by `size²`, even when the clamped window is smaller.
    /// Border pixels come out darker than the interior.
    #[default]
    FullWindow,
    /// Divide by the number of samples actually summed (true average).
    SampleCount,
}

/// Box blur with the legacy `size²` divisor.
pub fn blur<I: ImageView>(input: &I, kernel_size: usize) -> TransformResult<PixelBuffer> {
    blur_with(input, kernel_size, BlurNormalization::FullWindow)
}

/// Box blur of odd side `kernel_size` with an explicit divisor policy.
pub fn blur_with<I: ImageView>(
    input: &I,
    kernel_size: usize,
    normalization: BlurNormalization,
) -> TransformResult<PixelBuffer> {
    let area = validate_size(kernel_size)?;
    let start = Instant::now();
    let shape = input.shape();
    let (w, h, ch) = (shape.width, shape.height, shape.channels);
    let r = kernel_size / 2;
    let full = area as f32;
    let mut out = PixelBuffer::zeros(shape);

    fill_rows(out.as_mut_slice(), input.row_len(), |y, dst| {
        let yw = clamped_window(y, r, h);
        for x in 0..w {
            let xw = clamped_window(x, r, w);
            let divisor = match normalization {
                BlurNormalization::FullWindow => full,
                BlurNormalization::SampleCount => (xw.len() * yw.len()) as f32,
            };
            let acc = &mut dst[x * ch..(x + 1) * ch];
            for yi in yw.clone() {
                let src = input.row(yi);
                for xi in xw.clone() {
                    for (a, &s) in acc.iter_mut().zip(&src[xi * ch..(xi + 1) * ch]) {
                        *a += s;
                    }
                }
            }
            for a in acc.iter_mut() {
                *a /= divisor;
            }
        }
    });

    debug!(
        "blur: {} size={} {:?} in {:.3} ms",
        shape,
        kernel_size,
        normalization,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(out)
}
