use super::{PixelBuffer, Shape};

/// Read access to a dense, channel-interleaved f32 image.
///
/// Implementors guarantee `shape()` has nonzero extents and that
/// `row(y)` returns exactly `row_len()` samples for every `y < height()`.
/// Transforms read their inputs through this trait, so owned buffers and
/// borrowed views are processed alike.
pub trait ImageView: Sync {
    fn shape(&self) -> Shape;

    /// Interleaved samples of row `y`.
    fn row(&self, y: usize) -> &[f32];

    #[inline]
    fn width(&self) -> usize {
        self.shape().width
    }

    #[inline]
    fn height(&self) -> usize {
        self.shape().height
    }

    #[inline]
    fn channels(&self) -> usize {
        self.shape().channels
    }

    /// Number of samples in one row (`width * channels`).
    #[inline]
    fn row_len(&self) -> usize {
        self.width() * self.channels()
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Fresh buffer of the same shape with `f` applied to every sample.
    fn map<F>(&self, f: F) -> PixelBuffer
    where
        Self: Sized,
        F: Fn(f32) -> f32 + Sync + Send,
    {
        let mut out = PixelBuffer::zeros(self.shape());
        crate::par::fill_rows(out.as_mut_slice(), self.row_len(), |y, dst| {
            for (d, &s) in dst.iter_mut().zip(self.row(y)) {
                *d = f(s);
            }
        });
        out
    }

    /// Owned copy of the samples.
    fn to_buffer(&self) -> PixelBuffer
    where
        Self: Sized,
    {
        self.map(|v| v)
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
