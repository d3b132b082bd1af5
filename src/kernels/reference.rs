//! Reference broadcast (`setv`) and copy (`copyv`) primitives.
//!
//! These are the delegates behind the scal2v fast paths. They are plain
//! strided loops: exact, branch-free per element, and they never read a
//! buffer they are not asked to.

use num_complex::Complex;

use crate::conj::Conj;
use crate::traits::KernelScalar;

use super::strided_origin;

/// Broadcast `conjalpha(alpha)` into `n` slots of `y`.
///
/// # Safety
///
/// `y.offset(i * incy)` must be writable for every `i < n`.
pub unsafe fn setv_raw<T: KernelScalar>(
    conjalpha: Conj,
    n: isize,
    alpha: &Complex<T>,
    y: *mut Complex<T>,
    incy: isize,
) {
    if n <= 0 {
        return;
    }
    let value = conjalpha.apply(*alpha);
    let mut y = y;
    for _ in 0..n {
        unsafe { y.write(value) };
        y = y.wrapping_offset(incy);
    }
}

/// Copy `n` elements of `conjx(x)` into `y`. Conjugation negates the
/// imaginary part exactly; no arithmetic touches the real part.
///
/// # Safety
///
/// For every `i < n`, `x.offset(i * incx)` must be readable and
/// `y.offset(i * incy)` writable. `x` and `y` must not overlap.
pub unsafe fn copyv_raw<T: KernelScalar>(
    conjx: Conj,
    n: isize,
    x: *const Complex<T>,
    incx: isize,
    y: *mut Complex<T>,
    incy: isize,
) {
    if n <= 0 {
        return;
    }
    let (mut x, mut y) = (x, y);
    for _ in 0..n {
        unsafe { y.write(conjx.apply(x.read())) };
        x = x.wrapping_offset(incx);
        y = y.wrapping_offset(incy);
    }
}

/// Slice form of [`setv_raw`].
///
/// # Panics
///
/// Panics if `y` is shorter than `1 + (n - 1) * |incy|` elements.
pub fn setv<T: KernelScalar>(conjalpha: Conj, n: isize, alpha: &Complex<T>, y: &mut [Complex<T>], incy: isize) {
    if n <= 0 {
        return;
    }
    let yo = strided_origin(y.len(), n as usize, incy, "y");
    unsafe { setv_raw(conjalpha, n, alpha, y.as_mut_ptr().add(yo), incy) }
}

/// Slice form of [`copyv_raw`].
///
/// # Panics
///
/// Panics if `x` or `y` is shorter than its stride footprint.
pub fn copyv<T: KernelScalar>(
    conjx: Conj,
    n: isize,
    x: &[Complex<T>],
    incx: isize,
    y: &mut [Complex<T>],
    incy: isize,
) {
    if n <= 0 {
        return;
    }
    let len = n as usize;
    let xo = strided_origin(x.len(), len, incx, "x");
    let yo = strided_origin(y.len(), len, incy, "y");
    unsafe { copyv_raw(conjx, n, x.as_ptr().add(xo), incx, y.as_mut_ptr().add(yo), incy) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f32, im: f32) -> Complex<f32> {
        Complex::new(re, im)
    }

    #[test]
    fn setv_strided_leaves_gaps() {
        let mut y = [c(7.0, 7.0); 5];
        setv(Conj::NoConjugate, 3, &c(1.0, -2.0), &mut y, 2);
        assert_eq!(y, [c(1.0, -2.0), c(7.0, 7.0), c(1.0, -2.0), c(7.0, 7.0), c(1.0, -2.0)]);
    }

    #[test]
    fn setv_conjugates_scalar() {
        let mut y = [c(0.0, 0.0); 2];
        setv(Conj::Conjugate, 2, &c(1.0, 3.0), &mut y, 1);
        assert_eq!(y, [c(1.0, -3.0); 2]);
    }

    #[test]
    fn copyv_reverse_conj() {
        let x = [c(1.0, 1.0), c(2.0, -2.0), c(3.0, 0.5)];
        let mut y = [c(0.0, 0.0); 3];
        copyv(Conj::Conjugate, 3, &x, -1, &mut y, 1);
        assert_eq!(y, [c(3.0, -0.5), c(2.0, 2.0), c(1.0, -1.0)]);
    }

    #[test]
    fn non_positive_n_is_noop() {
        let x = [c(1.0, 1.0)];
        let mut y = [c(5.0, 5.0)];
        copyv(Conj::NoConjugate, 0, &x, 1, &mut y, 1);
        setv(Conj::NoConjugate, -3, &c(0.0, 0.0), &mut y, 1);
        assert_eq!(y, [c(5.0, 5.0)]);
    }
}
