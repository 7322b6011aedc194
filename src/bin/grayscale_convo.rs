use gray_convolve::conv::{correlate2d, vertical_edge_kernel};
use gray_convolve::raster::{save_grayscale, DEFAULT_SCALE};
use gray_convolve::ImageBatch;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GrayscaleConvoConfig {
    /// npz archive holding the image stack as one flat f32 array.
    pub archive: PathBuf,
    pub array_name: String,
    pub num_images: usize,
    pub image_height: usize,
    pub image_width: usize,
    /// Which image of the batch to run through the pipeline.
    pub image_index: usize,
    pub scale: f32,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OutputConfig {
    pub source_image: PathBuf,
    pub convolved_image: PathBuf,
}

impl Default for GrayscaleConvoConfig {
    fn default() -> Self {
        Self {
            archive: PathBuf::from("data/MNIST.npz"),
            array_name: "X_train.npy".to_string(),
            num_images: 50000,
            image_height: 28,
            image_width: 28,
            image_index: 0,
            scale: DEFAULT_SCALE,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            source_image: PathBuf::from("output.png"),
            convolved_image: PathBuf::from("convolved.png"),
        }
    }
}

fn load_config(path: &Path) -> Result<GrayscaleConvoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => GrayscaleConvoConfig::default(),
    };
    let shape = (config.num_images, config.image_height, config.image_width);

    let batch = ImageBatch::from_npz(&config.archive, &config.array_name, shape)
        .map_err(|e| e.to_string())?;
    log::debug!("loaded batch of {} images {:?}", batch.len(), batch.image_dims());

    let picked = batch.image(config.image_index).map_err(|e| e.to_string())?;
    save_grayscale(picked, config.scale, &config.output.source_image)
        .map_err(|e| e.to_string())?;
    println!(
        "Saved image {} to {}",
        config.image_index,
        config.output.source_image.display()
    );

    let kernel = vertical_edge_kernel::<f32>();
    let convolved = correlate2d(picked, kernel.view()).map_err(|e| e.to_string())?;
    save_grayscale(convolved.view(), config.scale, &config.output.convolved_image)
        .map_err(|e| e.to_string())?;
    println!(
        "Saved {}x{} edge response to {}",
        convolved.nrows(),
        convolved.ncols(),
        config.output.convolved_image.display()
    );
    Ok(())
}
