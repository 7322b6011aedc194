//! Grayscale rasterization to and from PNG files.
//!
//! - [`to_gray_image`]: scale a numeric 2D array into 8-bit luma pixels.
//! - [`save_grayscale`]: rasterize and write a PNG, creating parent dirs.
//! - [`load_grayscale`]: read any raster image into `[0, 1]` floats.
//!
//! Conversion policy is clamp, not wrap: after scaling, values below 0 map
//! to black and values above 255 to white. Correlation outputs can be
//! negative (the edge kernel carries -1 weights), so clamping keeps flat
//! and negative-response regions black instead of aliasing them to bright
//! pixel values.
use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};
use num_traits::ToPrimitive;

use crate::error::Result;

/// Default intensity scale: cell values in `[0, 1]` span the 8-bit range.
pub const DEFAULT_SCALE: f32 = 255.0;

/// Rasterize a 2D array into an 8-bit grayscale image.
///
/// Each cell is multiplied by `scale`, clamped to `[0, 255]` and written at
/// pixel `(column, row)`; rows map to the vertical image axis. Cells that
/// cannot be represented as f32 render black.
pub fn to_gray_image<A>(values: ArrayView2<A>, scale: f32) -> GrayImage
where
    A: ToPrimitive,
{
    let (h, w) = values.dim();
    let mut out = GrayImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let v = values[[y, x]].to_f32().unwrap_or(0.0);
            let v = (v * scale).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out
}

/// Rasterize `values` and write them to `path` as a PNG.
pub fn save_grayscale<A>(values: ArrayView2<A>, scale: f32, path: &Path) -> Result<()>
where
    A: ToPrimitive,
{
    ensure_parent_dir(path)?;
    to_gray_image(values, scale).save(path)?;
    Ok(())
}

/// Load a raster image, convert to 8-bit luma and map into `[0, 1]` floats.
pub fn load_grayscale(path: &Path) -> Result<Array2<f32>> {
    let img = image::open(path)?.into_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img.into_raw();
    Ok(Array2::from_shape_fn((h, w), |(y, x)| {
        data[y * w + x] as f32 / 255.0
    }))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
