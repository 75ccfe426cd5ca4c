//! Generic kernel application over a clamped window.
use super::window::{clamped_window, kernel_index};
use crate::image::{ImageView, PixelBuffer};
use crate::kernel::Kernel;
use crate::par::fill_rows;
use log::debug;
use std::time::Instant;

/// Correlate `kernel` with every channel of `input` independently.
///
/// Output `(x, y, c)` is `Σ input(xi, yi, c) · kernel[xi - x + r][yi - y + r]`
/// over the clamped window. Near the borders the window holds fewer than
/// `K²` samples and the missing taps simply do not contribute.
pub fn apply_kernel<I: ImageView>(input: &I, kernel: &Kernel) -> PixelBuffer {
    let start = Instant::now();
    let shape = input.shape();
    let (w, h, ch) = (shape.width, shape.height, shape.channels);
    let r = kernel.radius();
    let mut out = PixelBuffer::zeros(shape);

    fill_rows(out.as_mut_slice(), input.row_len(), |y, dst| {
        let yw = clamped_window(y, r, h);
        for x in 0..w {
            let xw = clamped_window(x, r, w);
            let acc = &mut dst[x * ch..(x + 1) * ch];
            for xi in xw {
                let i = kernel_index(xi, x, r);
                for yi in yw.clone() {
                    let weight = kernel.weight(i, kernel_index(yi, y, r));
                    let src = &input.row(yi)[xi * ch..(xi + 1) * ch];
                    for (a, &s) in acc.iter_mut().zip(src) {
                        *a += s * weight;
                    }
                }
            }
        }
    });

    debug!(
        "apply_kernel: {} with {}x{} kernel in {:.3} ms",
        shape,
        kernel.size(),
        kernel.size(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    out
}
