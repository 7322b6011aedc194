use gray_convolve::conv::{correlate2d, vertical_edge_kernel};
use gray_convolve::synth::random_image;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SimpleConvoConfig {
    pub height: usize,
    pub width: usize,
    /// Half-open value range for the random input.
    pub low: i32,
    pub high: i32,
    /// Fixed RNG seed; omit to seed from entropy.
    pub seed: Option<u64>,
}

impl Default for SimpleConvoConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            low: 0,
            high: 10,
            seed: None,
        }
    }
}

fn load_config(path: &Path) -> Result<SimpleConvoConfig, String> {
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
        None => SimpleConvoConfig::default(),
    };
    if config.low >= config.high {
        return Err(format!(
            "Invalid value range: low {} must be below high {}",
            config.low, config.high
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let input = random_image(&mut rng, (config.height, config.width), config.low, config.high);
    println!("input:\n{input}");

    let kernel = vertical_edge_kernel::<i32>();
    let output = correlate2d(input.view(), kernel.view()).map_err(|e| e.to_string())?;
    println!("\noutput:\n{output}");
    Ok(())
}
