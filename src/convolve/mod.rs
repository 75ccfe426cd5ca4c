//! Neighborhood convolution over [`PixelBuffer`](crate::image::PixelBuffer)s.
//!
//! - Windows are clamped to the buffer extent (no zero padding, no
//!   replication): a border pixel sees fewer than `K²` input samples.
//! - Kernels are applied in correlation form, indexed by the offset of each
//!   input sample from the window centre.
//! - Channels are processed independently; there is no cross-channel mixing.
//! - Every call allocates its output and never mutates its input, so rows are
//!   filled independently (in parallel with the `parallel` feature).

pub mod blur;
pub mod engine;
pub mod window;

pub use blur::{blur, blur_with, BlurNormalization};
pub use engine::apply_kernel;
