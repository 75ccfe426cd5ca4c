//! Square, odd-sized convolution weights addressed relative to their centre.
//!
//! A kernel of side `K` has radius `r = K / 2`. `weight(i, j)` is the weight
//! for the input sample at offset `(i - r, j - r)` from the output coordinate:
//! the first index follows x, the second follows y. Kernels are applied in
//! correlation form (never flipped), so the sign of directional kernels is
//! exactly what the rows below spell out.
use crate::error::{TransformError, TransformResult};
use nalgebra::DMatrix;

/// Immutable square weight matrix with an odd side length.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<f32>,
}

impl Kernel {
    /// Build a kernel from `size * size` weights in row-major order, where
    /// row index = x offset and column index = y offset.
    pub fn new(size: usize, weights: &[f32]) -> TransformResult<Self> {
        let area = validate_size(size)?;
        if weights.len() != area {
            return Err(TransformError::InvalidKernel {
                size,
                reason: "weight count must equal size * size",
            });
        }
        Ok(Self {
            weights: DMatrix::from_row_slice(size, size, weights),
        })
    }

    /// Build a kernel from nested rows; every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> TransformResult<Self> {
        let size = rows.len();
        validate_size(size)?;
        if rows.iter().any(|r| r.as_ref().len() != size) {
            return Err(TransformError::InvalidKernel {
                size,
                reason: "kernel must be square",
            });
        }
        let flat: Vec<f32> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(size, &flat)
    }

    /// Uniform kernel whose weights are all `1 / size²`.
    pub fn box_filter(size: usize) -> TransformResult<Self> {
        let area = validate_size(size)?;
        let w = 1.0 / area as f32;
        Ok(Self {
            weights: DMatrix::from_element(size, size, w),
        })
    }

    /// The 1×1 kernel `[[1]]`.
    pub fn identity() -> Self {
        Self {
            weights: DMatrix::from_element(1, 1, 1.0),
        }
    }

    /// Sobel kernel responding to intensity changes along x.
    pub fn horizontal_edge() -> Self {
        Self::fixed3([[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]])
    }

    /// Sobel kernel responding to intensity changes along y.
    pub fn vertical_edge() -> Self {
        Self::fixed3([[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]])
    }

    /// Scharr counterpart of [`Kernel::horizontal_edge`].
    pub fn scharr_horizontal() -> Self {
        Self::fixed3([[3.0, 10.0, 3.0], [0.0, 0.0, 0.0], [-3.0, -10.0, -3.0]])
    }

    /// Scharr counterpart of [`Kernel::vertical_edge`].
    pub fn scharr_vertical() -> Self {
        Self::fixed3([[3.0, 0.0, -3.0], [10.0, 0.0, -10.0], [3.0, 0.0, -3.0]])
    }

    fn fixed3(rows: [[f32; 3]; 3]) -> Self {
        Self {
            weights: DMatrix::from_fn(3, 3, |i, j| rows[i][j]),
        }
    }

    /// Side length `K`.
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Neighbor radius `K / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    /// Weight at `(i, j)`, both in `[0, K)`.
    ///
    /// # Panics
    /// If either index is outside the kernel.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[(i, j)]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.sum()
    }
}

/// Check that `size` is a usable kernel side and return `size²`.
pub(crate) fn validate_size(size: usize) -> TransformResult<usize> {
    if size == 0 {
        return Err(TransformError::InvalidKernel {
            size,
            reason: "size must be > 0",
        });
    }
    if size % 2 == 0 {
        return Err(TransformError::InvalidKernel {
            size,
            reason: "size must be odd so the centre is well-defined",
        });
    }
    size
        .checked_mul(size)
        .filter(|&area| area <= isize::MAX as usize / std::mem::size_of::<f32>())
        .ok_or(TransformError::InvalidKernel {
            size,
            reason: "size * size is too large",
        })
}
