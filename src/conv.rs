//! Valid-mode 2D cross-correlation over dense arrays.
//!
//! The engine slides a fixed kernel across the input and, at every position
//! where the kernel fully overlaps the input, computes the sum of the
//! elementwise product between the kernel and the input window. No padding,
//! no stride, no dilation: the output is smaller than the input by
//! `kernel - 1` along each axis.
//!
//! This is cross-correlation, not true convolution — the kernel is applied
//! as-is, without a 180° flip. The distinction matters for asymmetric
//! kernels such as [`vertical_edge_kernel`].
//!
//! The engine is generic over the element type, so the integer and float
//! pipelines share one implementation. Accumulation runs row-major over the
//! window: exact for integers, reproducible for floats.
use ndarray::{arr2, s, Array2, ArrayView2};
use num_traits::Num;

use crate::error::{Error, Result};

/// Output dimensions of a valid-mode correlation: `(H - kh + 1, W - kw + 1)`.
///
/// Fails with [`Error::KernelTooLarge`] when the kernel is empty or exceeds
/// the input along either axis, i.e. when no valid output position exists.
pub fn output_dim(input: (usize, usize), kernel: (usize, usize)) -> Result<(usize, usize)> {
    let (h, w) = input;
    let (kh, kw) = kernel;
    if kh == 0 || kw == 0 || kh > h || kw > w {
        return Err(Error::KernelTooLarge { input, kernel });
    }
    Ok((h - kh + 1, w - kw + 1))
}

/// Elementwise product of two equal-shaped 2D arrays.
///
/// Pure: neither input is mutated. Fails with [`Error::ShapeMismatch`] when
/// the shapes differ.
pub fn multiply<A>(a: ArrayView2<A>, b: ArrayView2<A>) -> Result<Array2<A>>
where
    A: Num + Copy,
{
    if a.dim() != b.dim() {
        return Err(Error::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    let (m, n) = a.dim();
    let mut out = Array2::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            out[[i, j]] = a[[i, j]] * b[[i, j]];
        }
    }
    Ok(out)
}

/// Correlate `input` with `kernel` in valid mode.
///
/// For every output cell `(r, c)` the window `input[r..r+kh, c..c+kw]` is
/// multiplied elementwise with the kernel and reduced to a scalar. Cells are
/// independent; iteration order is row-major. The degenerate cases need no
/// special handling: a kernel covering the whole input yields a 1×1 output
/// holding the full dot product, and a 1×1 kernel scales every input cell.
pub fn correlate2d<A>(input: ArrayView2<A>, kernel: ArrayView2<A>) -> Result<Array2<A>>
where
    A: Num + Copy,
{
    let (kh, kw) = kernel.dim();
    let (oh, ow) = output_dim(input.dim(), kernel.dim())?;
    let mut out = Array2::zeros((oh, ow));
    for r in 0..oh {
        for c in 0..ow {
            let window = input.slice(s![r..r + kh, c..c + kw]);
            let product = multiply(window, kernel)?;
            out[[r, c]] = product.iter().fold(A::zero(), |acc, &v| acc + v);
        }
    }
    Ok(out)
}

/// The fixed 3×3 vertical-edge kernel `[[1, 0, -1]; 3]`.
///
/// Column sums are `(3, 0, -3)`, so constant regions correlate to zero and
/// vertical intensity edges produce strong responses.
pub fn vertical_edge_kernel<A>() -> Array2<A>
where
    A: Num + Copy,
{
    let p = A::one();
    let z = A::zero();
    let n = z - p;
    arr2(&[[p, z, n], [p, z, n], [p, z, n]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn output_shape_is_reduced_by_kernel_minus_one() {
        let input = Array2::<i32>::zeros((8, 8));
        let kernel = vertical_edge_kernel::<i32>();
        let out = correlate2d(input.view(), kernel.view()).unwrap();
        assert_eq!(out.dim(), (6, 6));
    }

    #[test]
    fn full_cover_kernel_yields_single_scalar() {
        let input = arr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let kernel = vertical_edge_kernel::<i32>();
        let out = correlate2d(input.view(), kernel.view()).unwrap();
        assert_eq!(out.dim(), (1, 1));
        // (1-3) + (4-6) + (7-9)
        assert_eq!(out[[0, 0]], -6);
    }

    #[test]
    fn one_by_one_identity_kernel_reproduces_input() {
        let input = arr2(&[[3, 1, 4], [1, 5, 9]]);
        let kernel = arr2(&[[1]]);
        let out = correlate2d(input.view(), kernel.view()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn zero_kernel_zeroes_the_output() {
        let input = arr2(&[[3.0_f32, 1.0, 4.0], [1.0, 5.0, 9.0], [2.0, 6.0, 5.0]]);
        let kernel = Array2::<f32>::zeros((2, 2));
        let out = correlate2d(input.view(), kernel.view()).unwrap();
        assert_eq!(out.dim(), (2, 2));
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn correlation_is_linear_in_the_kernel() {
        let input = arr2(&[
            [0.5_f32, 0.25, 0.75, 0.1],
            [0.9, 0.0, 0.3, 0.6],
            [0.2, 0.8, 0.4, 0.7],
        ]);
        let k1 = arr2(&[[1.0_f32, -1.0], [0.5, 2.0]]);
        let k2 = arr2(&[[0.0_f32, 3.0], [-2.0, 0.25]]);
        let sum = &k1 + &k2;

        let lhs = correlate2d(input.view(), sum.view()).unwrap();
        let r1 = correlate2d(input.view(), k1.view()).unwrap();
        let r2 = correlate2d(input.view(), k2.view()).unwrap();
        let rhs = &r1 + &r2;

        for (l, r) in lhs.iter().zip(rhs.iter()) {
            assert_abs_diff_eq!(*l, *r, epsilon = 1e-6);
        }
    }

    #[test]
    fn kernel_is_not_flipped() {
        // Asymmetric kernel: cross-correlation and flipped convolution differ.
        let input = arr2(&[[1, 2], [3, 4]]);
        let kernel = arr2(&[[1, 0], [0, 0]]);
        let out = correlate2d(input.view(), kernel.view()).unwrap();
        // Window top-left cell, not bottom-right.
        assert_eq!(out[[0, 0]], 1);
    }

    #[test]
    fn oversized_kernel_is_rejected() {
        let input = Array2::<i32>::zeros((2, 5));
        let kernel = Array2::<i32>::zeros((3, 3));
        let err = correlate2d(input.view(), kernel.view()).unwrap_err();
        assert!(matches!(err, Error::KernelTooLarge { .. }));
    }

    #[test]
    fn empty_kernel_is_rejected() {
        let input = Array2::<i32>::zeros((4, 4));
        let kernel = Array2::<i32>::zeros((0, 2));
        assert!(matches!(
            correlate2d(input.view(), kernel.view()),
            Err(Error::KernelTooLarge { .. })
        ));
    }

    #[test]
    fn multiply_rejects_mismatched_shapes() {
        let a = Array2::<i32>::zeros((2, 2));
        let b = Array2::<i32>::zeros((3, 3));
        let err = multiply(a.view(), b.view()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                left: (2, 2),
                right: (3, 3)
            }
        ));
    }

    #[test]
    fn multiply_is_cellwise() {
        let a = arr2(&[[1, 2], [3, 4]]);
        let b = arr2(&[[5, 6], [7, 8]]);
        let out = multiply(a.view(), b.view()).unwrap();
        assert_eq!(out, arr2(&[[5, 12], [21, 32]]));
    }
}
