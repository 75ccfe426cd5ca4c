//! Named, parameterized entry points over the transform primitives.
//!
//! [`Operation`] deserializes from JSON (`{"op": "brighten", "factor": 1.7}`)
//! so hosts can describe work in config files; omitted parameters fall back
//! to the presets a user sees in the stock menu ([`Operation::presets`]).
use crate::composite::combine;
use crate::convolve::{apply_kernel, blur_with, BlurNormalization};
use crate::edges::{gradients, GradientKernel};
use crate::error::TransformResult;
use crate::image::{ImageView, PixelBuffer};
use crate::kernel::Kernel;
use crate::pointwise::{adjust_contrast, brighten};
use log::debug;
use serde::{Deserialize, Serialize};

pub const BRIGHTEN_FACTOR: f32 = 1.7;
pub const DARKEN_FACTOR: f32 = 0.3;
pub const CONTRAST_MID: f32 = 0.5;
pub const INCREASE_CONTRAST_FACTOR: f32 = 2.0;
pub const DECREASE_CONTRAST_FACTOR: f32 = 0.5;
/// Smallest odd size covering the radius-5 window of the stock blur.
pub const BLUR_KERNEL_SIZE: usize = 11;

fn brighten_factor() -> f32 {
    BRIGHTEN_FACTOR
}
fn darken_factor() -> f32 {
    DARKEN_FACTOR
}
fn contrast_mid() -> f32 {
    CONTRAST_MID
}
fn increase_factor() -> f32 {
    INCREASE_CONTRAST_FACTOR
}
fn decrease_factor() -> f32 {
    DECREASE_CONTRAST_FACTOR
}
fn blur_size() -> usize {
    BLUR_KERNEL_SIZE
}

/// One transform step with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Brighten {
        #[serde(default = "brighten_factor")]
        factor: f32,
    },
    Darken {
        #[serde(default = "darken_factor")]
        factor: f32,
    },
    IncreaseContrast {
        #[serde(default = "increase_factor")]
        factor: f32,
        #[serde(default = "contrast_mid")]
        mid: f32,
    },
    DecreaseContrast {
        #[serde(default = "decrease_factor")]
        factor: f32,
        #[serde(default = "contrast_mid")]
        mid: f32,
    },
    Blur {
        #[serde(default = "blur_size")]
        kernel_size: usize,
        #[serde(default)]
        normalization: BlurNormalization,
    },
    HorizontalEdges,
    VerticalEdges,
    EdgeDetect {
        #[serde(default)]
        kernel: GradientKernel,
    },
    /// Arbitrary square kernel given as rows (row = x offset).
    Kernel { rows: Vec<Vec<f32>> },
}

impl Operation {
    /// The eight stock operations in menu order.
    pub fn presets() -> [Operation; 8] {
        [
            Operation::Brighten {
                factor: BRIGHTEN_FACTOR,
            },
            Operation::Darken {
                factor: DARKEN_FACTOR,
            },
            Operation::IncreaseContrast {
                factor: INCREASE_CONTRAST_FACTOR,
                mid: CONTRAST_MID,
            },
            Operation::DecreaseContrast {
                factor: DECREASE_CONTRAST_FACTOR,
                mid: CONTRAST_MID,
            },
            Operation::Blur {
                kernel_size: BLUR_KERNEL_SIZE,
                normalization: BlurNormalization::FullWindow,
            },
            Operation::HorizontalEdges,
            Operation::VerticalEdges,
            Operation::EdgeDetect {
                kernel: GradientKernel::Sobel,
            },
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Brighten { .. } => "brighten",
            Operation::Darken { .. } => "darken",
            Operation::IncreaseContrast { .. } => "increase_contrast",
            Operation::DecreaseContrast { .. } => "decrease_contrast",
            Operation::Blur { .. } => "blur",
            Operation::HorizontalEdges => "horizontal_edges",
            Operation::VerticalEdges => "vertical_edges",
            Operation::EdgeDetect { .. } => "edge_detect",
            Operation::Kernel { .. } => "kernel",
        }
    }

    /// Run this step on `input`, producing a new buffer of the same shape.
    pub fn apply<I: ImageView>(&self, input: &I) -> TransformResult<PixelBuffer> {
        debug!("ops: {} on {}", self.name(), input.shape());
        match self {
            Operation::Brighten { factor } | Operation::Darken { factor } => {
                Ok(brighten(input, *factor))
            }
            Operation::IncreaseContrast { factor, mid }
            | Operation::DecreaseContrast { factor, mid } => {
                Ok(adjust_contrast(input, *factor, *mid))
            }
            Operation::Blur {
                kernel_size,
                normalization,
            } => blur_with(input, *kernel_size, *normalization),
            Operation::HorizontalEdges => Ok(horizontal_edges(input)),
            Operation::VerticalEdges => Ok(vertical_edges(input)),
            Operation::EdgeDetect { kernel } => Ok(gradients(input, *kernel)?.magnitude),
            Operation::Kernel { rows } => {
                let kernel = Kernel::from_rows(rows.as_slice())?;
                Ok(apply_kernel(input, &kernel))
            }
        }
    }
}

/// Apply `steps` in order, each consuming the previous result.
pub fn run_chain<I: ImageView>(input: &I, steps: &[Operation]) -> TransformResult<PixelBuffer> {
    let Some((first, rest)) = steps.split_first() else {
        return Ok(input.to_buffer());
    };
    let mut current = first.apply(input)?;
    for step in rest {
        current = step.apply(&current)?;
    }
    Ok(current)
}

/// Response to [`Kernel::horizontal_edge`].
pub fn horizontal_edges<I: ImageView>(input: &I) -> PixelBuffer {
    apply_kernel(input, &Kernel::horizontal_edge())
}

/// Response to [`Kernel::vertical_edge`].
pub fn vertical_edges<I: ImageView>(input: &I) -> PixelBuffer {
    apply_kernel(input, &Kernel::vertical_edge())
}

/// Sobel gradient magnitude: `combine(horizontal_edges, vertical_edges)`.
pub fn edge_detect<I: ImageView>(input: &I) -> TransformResult<PixelBuffer> {
    combine(&horizontal_edges(input), &vertical_edges(input))
}
