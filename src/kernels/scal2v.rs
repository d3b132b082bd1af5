//! Scaled copy: `y := alpha * conjx(x)`.

use num_complex::Complex;

use crate::conj::Conj;
use crate::context::Context;
use crate::simd::{self, VectorIsa};
use crate::traits::KernelScalar;

use super::access::{load_tile, store_tile};
use super::lanes::{join, split, ComplexLanes};
use super::reference::{copyv_raw, setv_raw};
use super::tile::for_each_tile;
use super::strided_origin;

/// `y := alpha * conjx(x)` over raw pointers.
///
/// The path is chosen once per call:
/// - `n <= 0` returns without touching anything;
/// - `alpha == 0` broadcasts `alpha` into `y` without reading `x`, so
///   NaN or Inf in `x` never reaches `y`;
/// - `alpha == 1` copies `conjx(x)` into `y` with no multiplication;
/// - anything else runs the vector kernel.
///
/// # Safety
///
/// For every `i < n`, `x.offset(i * incx)` must be readable and
/// `y.offset(i * incy)` writable. `x` and `y` must not overlap.
#[allow(clippy::too_many_arguments)]
pub unsafe fn scal2v_raw<T: KernelScalar>(
    conjx: Conj,
    n: isize,
    alpha: &Complex<T>,
    x: *const Complex<T>,
    incx: isize,
    y: *mut Complex<T>,
    incy: isize,
    cntx: &Context,
) {
    if n <= 0 {
        return;
    }

    if alpha.re == T::zero() && alpha.im == T::zero() {
        trace_kernel!(n, "scal2v: alpha == 0, delegating to setv");
        unsafe { setv_raw(Conj::NoConjugate, n, alpha, y, incy) };
        return;
    }

    if alpha.re == T::one() && alpha.im == T::zero() {
        trace_kernel!(n, "scal2v: alpha == 1, delegating to copyv");
        unsafe { copyv_raw(conjx, n, x, incx, y, incy) };
        return;
    }

    trace_kernel!(n, "scal2v: general path");
    unsafe { simd::scal2v_dispatch(conjx, n as usize, alpha, x, incx, y, incy, cntx) }
}

/// `y := alpha * conjx(x)` over strided slices.
///
/// A negative stride addresses the sequence from the end of the slice:
/// logical element `0` sits at slice index `(n - 1) * |inc|`.
///
/// ```
/// use vlblas::{scal2v, Complex, Conj, Context};
///
/// let x = [Complex::new(1.0_f64, 2.0), Complex::new(3.0, -1.0)];
/// let mut y = [Complex::new(0.0, 0.0); 2];
/// scal2v(Conj::NoConjugate, 2, &Complex::new(0.0, 1.0), &x, 1, &mut y, 1, &Context::new());
/// assert_eq!(y, [Complex::new(-2.0, 1.0), Complex::new(1.0, 3.0)]);
/// ```
///
/// # Panics
///
/// Panics if `x` or `y` is shorter than `1 + (n - 1) * |inc|` elements.
#[allow(clippy::too_many_arguments)]
pub fn scal2v<T: KernelScalar>(
    conjx: Conj,
    n: isize,
    alpha: &Complex<T>,
    x: &[Complex<T>],
    incx: isize,
    y: &mut [Complex<T>],
    incy: isize,
    cntx: &Context,
) {
    if n <= 0 {
        return;
    }
    let len = n as usize;
    let xo = strided_origin(x.len(), len, incx, "x");
    let yo = strided_origin(y.len(), len, incy, "y");
    // Safety: strided_origin checked both footprints; the borrows rule out overlap.
    unsafe {
        scal2v_raw(conjx, n, alpha, x.as_ptr().add(xo), incx, y.as_mut_ptr().add(yo), incy, cntx)
    }
}

/// Vector kernel for the general (non-degenerate `alpha`) case.
///
/// # Safety
///
/// As [`scal2v_raw`], with `n > 0`.
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn scal2v_general<B: VectorIsa>(
    conjx: Conj,
    n: usize,
    alpha: &Complex<B::Elem>,
    x: *const Complex<B::Elem>,
    incx: isize,
    y: *mut Complex<B::Elem>,
    incy: isize,
    cntx: &Context,
) {
    let vlmax = cntx.max_tile(<B::Elem as KernelScalar>::PRECISION, B::LMUL).min(B::MAX_VL);
    let (ar, ai) = (alpha.re, alpha.im);
    let (mut x, mut y) = (x, y);

    for_each_tile(n, vlmax, |vl| {
        let xv = split::<B>(unsafe { load_tile::<B>(x, incx, vl) });

        let mut yr = B::mul_vf(xv.re, ar, vl);
        let mut yi = B::mul_vf(xv.re, ai, vl);
        match conjx {
            Conj::NoConjugate => {
                yr = B::nmsac_vf(yr, ai, xv.im, vl);
                yi = B::macc_vf(yi, ar, xv.im, vl);
            }
            Conj::Conjugate => {
                yr = B::macc_vf(yr, ai, xv.im, vl);
                yi = B::nmsac_vf(yi, ar, xv.im, vl);
            }
        }

        unsafe { store_tile::<B>(y, incy, join::<B>(ComplexLanes { re: yr, im: yi }), vl) };

        x = x.wrapping_offset(vl as isize * incx);
        y = y.wrapping_offset(vl as isize * incy);
    });
}
