//! Double scaled accumulate: `z += alphax * conjx(x) + alphay * conjy(y)`.
//!
//! Unlike scal2v there is no zero/one shortcut on the scalars: every call
//! runs the full fused sequence, so `0 * NaN` in `x` or `y` still reaches
//! `z`.

use num_complex::Complex;

use crate::conj::Conj;
use crate::context::Context;
use crate::simd::{self, VectorIsa};
use crate::traits::KernelScalar;

use super::access::{load_tile, store_tile};
use super::lanes::{join, split, ComplexLanes};
use super::strided_origin;
use super::tile::for_each_tile;

/// `z += alphax * conjx(x) + alphay * conjy(y)` over raw pointers.
///
/// # Safety
///
/// For every `i < n`, `x.offset(i * incx)` and `y.offset(i * incy)` must be
/// readable and `z.offset(i * incz)` readable and writable. `z` must not
/// overlap `x` or `y`.
#[allow(clippy::too_many_arguments)]
pub unsafe fn axpy2v_raw<T: KernelScalar>(
    conjx: Conj,
    conjy: Conj,
    n: isize,
    alphax: &Complex<T>,
    alphay: &Complex<T>,
    x: *const Complex<T>,
    incx: isize,
    y: *const Complex<T>,
    incy: isize,
    z: *mut Complex<T>,
    incz: isize,
    cntx: &Context,
) {
    if n <= 0 {
        return;
    }
    unsafe {
        simd::axpy2v_dispatch(conjx, conjy, n as usize, alphax, alphay, x, incx, y, incy, z, incz, cntx)
    }
}

/// `z += alphax * conjx(x) + alphay * conjy(y)` over strided slices.
///
/// Negative strides follow the same convention as [`crate::scal2v`].
///
/// ```
/// use vlblas::{axpy2v, Complex, Conj, Context};
///
/// let x = [Complex::new(1.0_f32, 1.0)];
/// let y = [Complex::new(0.0_f32, 2.0)];
/// let mut z = [Complex::new(10.0_f32, 0.0)];
/// axpy2v(
///     Conj::Conjugate, Conj::NoConjugate, 1,
///     &Complex::new(2.0, 0.0), &Complex::new(1.0, 0.0),
///     &x, 1, &y, 1, &mut z, 1, &Context::new(),
/// );
/// // 10 + 2 * (1 - i) + 2i
/// assert_eq!(z, [Complex::new(12.0, 0.0)]);
/// ```
///
/// # Panics
///
/// Panics if any slice is shorter than `1 + (n - 1) * |inc|` elements.
#[allow(clippy::too_many_arguments)]
pub fn axpy2v<T: KernelScalar>(
    conjx: Conj,
    conjy: Conj,
    n: isize,
    alphax: &Complex<T>,
    alphay: &Complex<T>,
    x: &[Complex<T>],
    incx: isize,
    y: &[Complex<T>],
    incy: isize,
    z: &mut [Complex<T>],
    incz: isize,
    cntx: &Context,
) {
    if n <= 0 {
        return;
    }
    let len = n as usize;
    let xo = strided_origin(x.len(), len, incx, "x");
    let yo = strided_origin(y.len(), len, incy, "y");
    let zo = strided_origin(z.len(), len, incz, "z");
    unsafe {
        axpy2v_raw(
            conjx,
            conjy,
            n,
            alphax,
            alphay,
            x.as_ptr().add(xo),
            incx,
            y.as_ptr().add(yo),
            incy,
            z.as_mut_ptr().add(zo),
            incz,
            cntx,
        )
    }
}

/// `acc += alpha * conj(v)` on split lanes.
#[inline(always)]
fn accumulate<B: VectorIsa>(
    acc: ComplexLanes<B::Lane>,
    alpha: &Complex<B::Elem>,
    conj: Conj,
    v: ComplexLanes<B::Lane>,
    vl: usize,
) -> ComplexLanes<B::Lane> {
    let mut re = B::macc_vf(acc.re, alpha.re, v.re, vl);
    let mut im = B::macc_vf(acc.im, alpha.im, v.re, vl);
    match conj {
        Conj::NoConjugate => {
            re = B::nmsac_vf(re, alpha.im, v.im, vl);
            im = B::macc_vf(im, alpha.re, v.im, vl);
        }
        Conj::Conjugate => {
            re = B::macc_vf(re, alpha.im, v.im, vl);
            im = B::nmsac_vf(im, alpha.re, v.im, vl);
        }
    }
    ComplexLanes { re, im }
}

/// Vector kernel.
///
/// # Safety
///
/// As [`axpy2v_raw`], with `n > 0`.
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn axpy2v_general<B: VectorIsa>(
    conjx: Conj,
    conjy: Conj,
    n: usize,
    alphax: &Complex<B::Elem>,
    alphay: &Complex<B::Elem>,
    x: *const Complex<B::Elem>,
    incx: isize,
    y: *const Complex<B::Elem>,
    incy: isize,
    z: *mut Complex<B::Elem>,
    incz: isize,
    cntx: &Context,
) {
    let vlmax = cntx.max_tile(<B::Elem as KernelScalar>::PRECISION, B::LMUL).min(B::MAX_VL);
    let (mut x, mut y, mut z) = (x, y, z);

    for_each_tile(n, vlmax, |vl| {
        let (xv, yv, zv) = unsafe {
            (
                split::<B>(load_tile::<B>(x, incx, vl)),
                split::<B>(load_tile::<B>(y, incy, vl)),
                split::<B>(load_tile::<B>(z, incz, vl)),
            )
        };

        let zv = accumulate::<B>(zv, alphax, conjx, xv, vl);
        let zv = accumulate::<B>(zv, alphay, conjy, yv, vl);

        unsafe { store_tile::<B>(z, incz, join::<B>(zv), vl) };

        x = x.wrapping_offset(vl as isize * incx);
        y = y.wrapping_offset(vl as isize * incy);
        z = z.wrapping_offset(vl as isize * incz);
    });
}
