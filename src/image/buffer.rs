//! Owned multi-channel f32 buffer in row-major, channel-interleaved layout.
//!
//! Sample `(x, y, c)` lives at `(y * width + x) * channels + c`. The shape is
//! fixed at construction; values are unconstrained reals and are never
//! clamped by the transforms that read or produce them.
use super::traits::ImageView;
use crate::error::{TransformError, TransformResult};
use serde::Serialize;

/// Extents of a [`PixelBuffer`]: width × height × channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl Shape {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Total number of samples (saturates for shapes no buffer can hold).
    #[inline]
    pub fn len(&self) -> usize {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(self.channels)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, c: usize) -> bool {
        x < self.width && y < self.height && c < self.channels
    }

    /// Nonzero extents whose sample count fits in one allocation.
    fn validate(self) -> TransformResult<Self> {
        let invalid = TransformError::InvalidShape {
            width: self.width,
            height: self.height,
            channels: self.channels,
        };
        if self.width == 0 || self.height == 0 || self.channels == 0 {
            return Err(invalid);
        }
        let bytes = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.channels))
            .and_then(|n| n.checked_mul(std::mem::size_of::<f32>()));
        match bytes {
            Some(b) if b <= isize::MAX as usize => Ok(self),
            _ => Err(invalid),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

/// Owned samples; the result type of every transform.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    shape: Shape,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Allocate a zero-initialized buffer of `width × height × channels`.
    pub fn new(width: usize, height: usize, channels: usize) -> TransformResult<Self> {
        Self::filled(width, height, channels, 0.0)
    }

    /// Allocate a buffer with every sample set to `value`.
    pub fn filled(
        width: usize,
        height: usize,
        channels: usize,
        value: f32,
    ) -> TransformResult<Self> {
        let shape = Shape::new(width, height, channels).validate()?;
        Ok(Self {
            shape,
            data: vec![value; shape.len()],
        })
    }

    /// Wrap existing interleaved samples.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> TransformResult<Self> {
        let shape = checked_shape(width, height, channels, data.len())?;
        Ok(Self { shape, data })
    }

    /// Zeroed output buffer for a shape already held by some view.
    pub(crate) fn zeros(shape: Shape) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.len()],
        }
    }

    /// Borrow as a read-only view.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            shape: self.shape,
            data: &self.data,
        }
    }

    /// Bounds-checked read of sample `(x, y, c)`.
    pub fn get(&self, x: usize, y: usize, c: usize) -> TransformResult<f32> {
        let i = sample_index(self.shape, x, y, c)?;
        Ok(self.data[i])
    }

    /// Bounds-checked write of sample `(x, y, c)`.
    pub fn set(&mut self, x: usize, y: usize, c: usize, value: f32) -> TransformResult<()> {
        let i = sample_index(self.shape, x, y, c)?;
        self.data[i] = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl ImageView for PixelBuffer {
    #[inline]
    fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }
}

/// Borrowed, read-only samples in the same layout as [`PixelBuffer`].
///
/// Lets callers run transforms over data they already own (a decoder's
/// output, a slice of a larger arena) without copying it first.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    shape: Shape,
    data: &'a [f32],
}

impl<'a> PixelView<'a> {
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: &'a [f32],
    ) -> TransformResult<Self> {
        let shape = checked_shape(width, height, channels, data.len())?;
        Ok(Self { shape, data })
    }

    /// Bounds-checked read of sample `(x, y, c)`.
    pub fn get(&self, x: usize, y: usize, c: usize) -> TransformResult<f32> {
        let i = sample_index(self.shape, x, y, c)?;
        Ok(self.data[i])
    }
}

impl ImageView for PixelView<'_> {
    #[inline]
    fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }
}

fn checked_shape(
    width: usize,
    height: usize,
    channels: usize,
    actual: usize,
) -> TransformResult<Shape> {
    let shape = Shape::new(width, height, channels).validate()?;
    if actual != shape.len() {
        return Err(TransformError::DataLength {
            expected: shape.len(),
            actual,
        });
    }
    Ok(shape)
}

#[inline]
fn sample_index(shape: Shape, x: usize, y: usize, c: usize) -> TransformResult<usize> {
    if !shape.contains(x, y, c) {
        return Err(TransformError::OutOfBounds { x, y, c, shape });
    }
    Ok((y * shape.width + x) * shape.channels + c)
}
