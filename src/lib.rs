#![doc = include_str!("../README.md")]

pub mod batch;
pub mod conv;
pub mod error;
pub mod raster;
pub mod synth;

// --- High-level re-exports -------------------------------------------------

pub use crate::batch::ImageBatch;
pub use crate::conv::{correlate2d, multiply, output_dim, vertical_edge_kernel};
pub use crate::error::{Error, Result};
pub use crate::raster::{load_grayscale, save_grayscale, to_gray_image, DEFAULT_SCALE};

/// Small prelude for quick experiments.
///
/// ```
/// use gray_convolve::prelude::*;
/// use ndarray::arr2;
///
/// # fn main() {
/// let input = arr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
/// let kernel = vertical_edge_kernel::<i32>();
/// let out = correlate2d(input.view(), kernel.view()).unwrap();
/// assert_eq!(out[[0, 0]], -6);
/// # }
/// ```
pub mod prelude {
    pub use crate::batch::ImageBatch;
    pub use crate::conv::{correlate2d, multiply, vertical_edge_kernel};
    pub use crate::error::{Error, Result};
    pub use crate::raster::{save_grayscale, DEFAULT_SCALE};
}
