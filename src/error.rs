//! Precondition failures reported by the transform layer.
//!
//! Every operation validates its inputs before allocating any output, so an
//! error always means "nothing was produced".
use crate::image::Shape;

/// Reasons a buffer, kernel or transform call may be rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// Width, height or channel count is zero.
    InvalidShape {
        width: usize,
        height: usize,
        channels: usize,
    },
    /// Backing data does not hold exactly `width * height * channels` samples.
    DataLength { expected: usize, actual: usize },
    /// Kernel side length is zero or even, or its weights are malformed.
    InvalidKernel { size: usize, reason: &'static str },
    /// Two buffers that must share a shape do not.
    ShapeMismatch { left: Shape, right: Shape },
    /// Coordinate access outside the buffer extent.
    OutOfBounds {
        x: usize,
        y: usize,
        c: usize,
        shape: Shape,
    },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::InvalidShape {
                width,
                height,
                channels,
            } => write!(
                f,
                "invalid buffer shape {width}x{height}x{channels} (all extents must be > 0)"
            ),
            TransformError::DataLength { expected, actual } => {
                write!(f, "buffer data length {actual} != expected {expected}")
            }
            TransformError::InvalidKernel { size, reason } => {
                write!(f, "invalid kernel of size {size}: {reason}")
            }
            TransformError::ShapeMismatch { left, right } => {
                write!(f, "shape mismatch ({left} vs {right})")
            }
            TransformError::OutOfBounds { x, y, c, shape } => {
                write!(f, "coordinate ({x}, {y}, {c}) outside buffer {shape}")
            }
        }
    }
}

impl std::error::Error for TransformError {}

pub type TransformResult<T> = Result<T, TransformError>;
