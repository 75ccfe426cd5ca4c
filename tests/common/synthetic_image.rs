#![allow(dead_code)]

use pixel_transform::PixelBuffer;

/// Single-channel vertical step: `0.0` left of `split_x`, `1.0` from it on.
pub fn step_image(width: usize, height: usize, split_x: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = PixelBuffer::new(width, height, 1).expect("valid shape");
    for y in 0..height {
        for x in split_x..width {
            img.set(x, y, 0, 1.0).expect("in bounds");
        }
    }
    img
}

/// Every sample set to `value`.
pub fn constant_image(width: usize, height: usize, channels: usize, value: f32) -> PixelBuffer {
    PixelBuffer::filled(width, height, channels, value).expect("valid shape")
}

/// Horizontal ramp `x / (width - 1)` in every channel: `0.0` at the left
/// column, `1.0` at the right one, constant down each column.
pub fn ramp_image(width: usize, height: usize, channels: usize) -> PixelBuffer {
    assert!(width > 1, "a ramp needs at least two columns");
    let step = 1.0 / (width - 1) as f32;
    let mut img = PixelBuffer::new(width, height, channels).expect("valid shape");
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                img.set(x, y, c, x as f32 * step).expect("in bounds");
            }
        }
    }
    img
}

/// Deterministic pseudo-random buffer with values in `[-1, 1]`.
pub fn noise_image(width: usize, height: usize, channels: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let data = (0..width * height * channels)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 2001) as f32 / 1000.0 - 1.0
        })
        .collect();
    PixelBuffer::from_vec(width, height, channels, data).expect("valid shape")
}

/// Generates a simple high-contrast checkerboard in `[0, 1]`.
pub fn checkerboard(width: usize, height: usize, channels: usize, cell: usize) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut img = PixelBuffer::new(width, height, channels).expect("valid shape");
    for y in 0..height {
        for x in 0..width {
            let v = if (x / cell + y / cell) & 1 == 0 { 0.125 } else { 0.875 };
            for c in 0..channels {
                img.set(x, y, c, v).expect("in bounds");
            }
        }
    }
    img
}
