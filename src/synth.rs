//! Synthetic input images for the integer demo and the tests.
//!
//! The random source is passed in explicitly so callers control seeding;
//! tests use a fixed-seed `StdRng` for reproducibility.
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

/// Random integer image with entries drawn uniformly from `[low, high)`.
///
/// Requires `low < high`.
pub fn random_image<R: Rng>(rng: &mut R, dims: (usize, usize), low: i32, high: i32) -> Array2<i32> {
    Array2::random_using(dims, Uniform::new(low, high), rng)
}

/// Image with every cell set to `value`.
pub fn constant_image<A: Clone>(dims: (usize, usize), value: A) -> Array2<A> {
    Array2::from_elem(dims, value)
}
