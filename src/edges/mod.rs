//! Directional edge responses and their gradient-magnitude merge.
//!
//! - Applies a horizontal/vertical kernel pair through the generic
//!   convolution engine (clamped borders, correlation form).
//! - Merges the two responses with [`combine`](crate::composite::combine).
//!
//! On a flat image the responses vanish everywhere a full 3×3 window fits.
//! In the outermost 1-pixel frame the clamped window drops taps, so even a
//! constant image produces a nonzero response there.

pub mod grad;

pub use grad::{gradients, Grad, GradientKernel};
