//! Image batch loading from packed npz archives.
//!
//! The archive stores a stack of grayscale images as one flat f32 array; the
//! caller supplies the batch shape (the archive carries no shape metadata we
//! trust beyond the element count). Individual images are handed out as
//! non-copying 2D views into the batch.
use std::fs::File;
use std::path::Path;

use ndarray::{Array1, Array3, ArrayView2, Axis};
use ndarray_npy::NpzReader;

use crate::error::{Error, Result};

/// Owned stack of grayscale images with shape `(num_images, height, width)`.
#[derive(Clone, Debug)]
pub struct ImageBatch {
    data: Array3<f32>,
}

impl ImageBatch {
    /// Reshape a flat row-major buffer into a batch.
    ///
    /// Fails with [`Error::ElementCount`] unless the buffer holds exactly
    /// `n * h * w` elements.
    pub fn from_flat(flat: Vec<f32>, shape: (usize, usize, usize)) -> Result<Self> {
        let (n, h, w) = shape;
        let expected = n * h * w;
        let actual = flat.len();
        if actual != expected {
            return Err(Error::ElementCount {
                shape,
                expected,
                actual,
            });
        }
        let data = Array3::from_shape_vec(shape, flat).map_err(|_| Error::ElementCount {
            shape,
            expected,
            actual,
        })?;
        Ok(Self { data })
    }

    /// Read the named flat f32 array from an npz archive and reshape it.
    pub fn from_npz(path: &Path, array_name: &str, shape: (usize, usize, usize)) -> Result<Self> {
        let file = File::open(path)?;
        let mut npz = NpzReader::new(file)?;
        let flat: Array1<f32> = npz.by_name(array_name)?;
        log::debug!(
            "read {} elements from {} in {}",
            flat.len(),
            array_name,
            path.display()
        );
        Self::from_flat(flat.to_vec(), shape)
    }

    /// Borrow one image of the batch as a read-only `(height, width)` view.
    ///
    /// Fails with [`Error::ImageIndex`] when `index >= len()`.
    pub fn image(&self, index: usize) -> Result<ArrayView2<'_, f32>> {
        if index >= self.len() {
            return Err(Error::ImageIndex {
                index,
                len: self.len(),
            });
        }
        Ok(self.data.index_axis(Axis(0), index))
    }

    /// Number of images in the batch.
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(height, width)` of every image in the batch.
    pub fn image_dims(&self) -> (usize, usize) {
        (self.data.len_of(Axis(1)), self.data.len_of(Axis(2)))
    }
}
