#![doc = include_str!("../README.md")]

// Core buffer + numeric transforms
pub mod composite;
pub mod convolve;
pub mod error;
pub mod image;
pub mod kernel;
pub mod pointwise;

// Built on top of the primitives
pub mod edges;
pub mod ops;

// Tooling support (JSON configs for the bundled binary)
pub mod config;

mod par;

// --- High-level re-exports -------------------------------------------------

pub use crate::composite::combine;
pub use crate::convolve::{apply_kernel, blur, blur_with, BlurNormalization};
pub use crate::error::{TransformError, TransformResult};
pub use crate::image::{ImageView, PixelBuffer, PixelView, Shape};
pub use crate::kernel::Kernel;
pub use crate::ops::Operation;
pub use crate::pointwise::{adjust_contrast, brighten};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_transform::prelude::*;
///
/// # fn main() -> Result<(), TransformError> {
/// let img = PixelBuffer::filled(8, 8, 3, 0.5)?;
/// let bright = brighten(&img, 1.7);
/// let edges = combine(
///     &apply_kernel(&bright, &Kernel::horizontal_edge()),
///     &apply_kernel(&bright, &Kernel::vertical_edge()),
/// )?;
/// assert_eq!(edges.shape(), img.shape());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        adjust_contrast, apply_kernel, blur, brighten, combine, ImageView, Kernel, Operation,
        PixelBuffer, PixelView, TransformError,
    };
}
