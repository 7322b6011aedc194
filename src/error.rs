//! Error kinds for the correlation pipeline.
//!
//! Shape and index violations are programmer errors and surface immediately;
//! I/O failures bubble up to the binaries, which report them and exit
//! non-zero. There is no recoverable-error path.
use std::io;

use ndarray_npy::ReadNpzError;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Kernel does not fit inside the input along some axis (or is empty),
    /// so no valid output position exists.
    #[error("kernel shape {kernel:?} does not fit inside input shape {input:?}")]
    KernelTooLarge {
        input: (usize, usize),
        kernel: (usize, usize),
    },

    /// Elementwise multiply requires identical shapes.
    #[error("shape mismatch for elementwise multiply: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Flat archive buffer does not hold exactly the number of elements the
    /// requested batch shape implies.
    #[error("flat buffer holds {actual} elements, batch shape {shape:?} needs {expected}")]
    ElementCount {
        shape: (usize, usize, usize),
        expected: usize,
        actual: usize,
    },

    /// Image index past the end of the batch.
    #[error("image index {index} out of bounds for batch of {len} images")]
    ImageIndex { index: usize, len: usize },

    /// The npz archive could not be opened or the named array read.
    #[error("failed to read npz archive: {0}")]
    Npz(#[from] ReadNpzError),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Raster image decode or encode failure.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),
}
