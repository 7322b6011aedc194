/// Flat row-major batch of `n` images of size `h × w`, values in [0, 1].
///
/// Each image is a horizontal ramp brightened by its batch index, so images
/// are distinguishable and every one has vertical-edge structure.
pub fn gradient_batch(n: usize, h: usize, w: usize) -> Vec<f32> {
    assert!(n > 0 && h > 0 && w > 1, "batch dimensions must be positive");

    let mut out = Vec::with_capacity(n * h * w);
    for k in 0..n {
        let offset = k as f32 * 0.1;
        for _y in 0..h {
            for x in 0..w {
                let ramp = x as f32 / (w - 1) as f32;
                out.push((ramp * 0.8 + offset).min(1.0));
            }
        }
    }
    out
}
