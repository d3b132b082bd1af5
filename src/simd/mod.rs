//! Vector ISA abstraction and compile-time backend dispatch.
//!
//! The arithmetic kernels are written once against [`VectorIsa`], which
//! models a vector-length-agnostic instruction set: a runtime tile length
//! `vl`, two-field segment loads/stores that split interleaved complex data,
//! and fused multiply-add/subtract over homogeneous real lanes.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: for `f32`/`f64`, the
//! compiler selects the native backend for the target and dead-code-eliminates
//! the others. The portable backend is the fallback on every target.
//!
//! On x86_64 the AVX backend needs both `avx` and `fma`. Enable via
//! `-C target-cpu=native` or `-C target-feature=+avx,+fma`.
//!
//! ## Architecture support
//!
//! | Arch      | ISA       | VLEN | LMUL | f64 vl | f32 vl |
//! |-----------|-----------|------|------|--------|--------|
//! | `aarch64` | NEON      | 128  | m1   | 2      | 4      |
//! | `x86_64`  | AVX + FMA | 256  | m1   | 4      | 8      |
//! | other     | portable  | 256  | m2   | 8      | 16     |

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f64_neon;
#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;

#[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
pub(crate) mod f64_avx;
#[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
pub(crate) mod f32_avx;

#[allow(unused_imports)]
use core::any::TypeId;

use num_complex::Complex;

use crate::config::Lmul;
use crate::conj::Conj;
use crate::context::Context;
use crate::kernels::{axpy2v::axpy2v_general, scal2v::scal2v_general};
use crate::traits::KernelScalar;

/// Vector register length, in bits, of the backend compiled for this target.
#[cfg(target_arch = "aarch64")]
pub(crate) const NATIVE_VLEN_BITS: usize = 128;
#[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
pub(crate) const NATIVE_VLEN_BITS: usize = 256;
#[cfg(not(any(
    target_arch = "aarch64",
    all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma")
)))]
pub(crate) const NATIVE_VLEN_BITS: usize = scalar::PORTABLE_VLEN_BITS;

/// Name of the backend compiled for this target.
#[cfg(target_arch = "aarch64")]
pub const BACKEND_NAME: &str = "neon";
#[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
pub const BACKEND_NAME: &str = "avx-fma";
#[cfg(not(any(
    target_arch = "aarch64",
    all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma")
)))]
pub const BACKEND_NAME: &str = "portable";

/// Instruction-set boundary for the Level-1 kernels.
///
/// A `Tile` is an interleaved register group of up to `MAX_VL` complex
/// elements; a `Lane` holds one real component of a tile. Lanes past `vl`
/// hold unspecified values and are never stored.
pub(crate) trait VectorIsa {
    type Elem: KernelScalar;
    type Tile: Copy;
    type Lane: Copy;

    /// Register grouping the kernels run with on this backend.
    const LMUL: Lmul;

    /// Lane capacity of `Lane`, in elements.
    const MAX_VL: usize;

    /// Contiguous two-field segment load of `vl` complex elements.
    unsafe fn load_seg2(base: *const Self::Elem, vl: usize) -> Self::Tile;

    /// Strided two-field segment load; `byte_stride` is the pitch between
    /// consecutive complex elements.
    unsafe fn load_strided_seg2(base: *const Self::Elem, byte_stride: isize, vl: usize) -> Self::Tile;

    unsafe fn store_seg2(base: *mut Self::Elem, tile: Self::Tile, vl: usize);

    unsafe fn store_strided_seg2(base: *mut Self::Elem, byte_stride: isize, tile: Self::Tile, vl: usize);

    fn get_real(tile: Self::Tile) -> Self::Lane;
    fn get_imag(tile: Self::Tile) -> Self::Lane;
    fn create(re: Self::Lane, im: Self::Lane) -> Self::Tile;

    /// `v * s`
    fn mul_vf(v: Self::Lane, s: Self::Elem, vl: usize) -> Self::Lane;

    /// `acc + s * v`, fused.
    fn macc_vf(acc: Self::Lane, s: Self::Elem, v: Self::Lane, vl: usize) -> Self::Lane;

    /// `acc - s * v`, fused.
    fn nmsac_vf(acc: Self::Lane, s: Self::Elem, v: Self::Lane, vl: usize) -> Self::Lane;
}

// ── Partial-tile staging ─────────────────────────────────────────────
//
// Fixed-width backends stage short or strided tiles through a stack buffer
// laid out exactly like a contiguous tile.

/// Copy `vl` strided complex elements into `buf` in interleaved order.
#[inline(always)]
pub(crate) unsafe fn gather_seg2<T: Copy>(base: *const T, byte_stride: isize, vl: usize, buf: &mut [T]) {
    debug_assert!(buf.len() >= 2 * vl);
    let bytes = base.cast::<u8>();
    for i in 0..vl {
        unsafe {
            let elem = bytes.offset(i as isize * byte_stride).cast::<T>();
            buf[2 * i] = elem.read();
            buf[2 * i + 1] = elem.add(1).read();
        }
    }
}

/// Write the first `vl` interleaved elements of `buf` to strided memory.
#[inline(always)]
pub(crate) unsafe fn scatter_seg2<T: Copy>(base: *mut T, byte_stride: isize, vl: usize, buf: &[T]) {
    debug_assert!(buf.len() >= 2 * vl);
    let bytes = base.cast::<u8>();
    for i in 0..vl {
        unsafe {
            let elem = bytes.offset(i as isize * byte_stride).cast::<T>();
            elem.write(buf[2 * i]);
            elem.add(1).write(buf[2 * i + 1]);
        }
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Dispatch the general scal2v path to the native backend for `T`.
///
/// # Safety
///
/// Same contract as [`crate::scal2v_raw`], with `n > 0`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn scal2v_dispatch<T: KernelScalar>(
    conjx: Conj,
    n: usize,
    alpha: &Complex<T>,
    x: *const Complex<T>,
    incx: isize,
    y: *mut Complex<T>,
    incy: isize,
    cntx: &Context,
) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let alpha = unsafe { &*(alpha as *const Complex<T> as *const Complex<f64>) };
            unsafe {
                scal2v_general::<f64_neon::F64Neon>(conjx, n, alpha, x.cast(), incx, y.cast(), incy, cntx)
            };
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let alpha = unsafe { &*(alpha as *const Complex<T> as *const Complex<f32>) };
            unsafe {
                scal2v_general::<f32_neon::F32Neon>(conjx, n, alpha, x.cast(), incx, y.cast(), incy, cntx)
            };
            return;
        }
    }
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let alpha = unsafe { &*(alpha as *const Complex<T> as *const Complex<f64>) };
            unsafe {
                scal2v_general::<f64_avx::F64Avx>(conjx, n, alpha, x.cast(), incx, y.cast(), incy, cntx)
            };
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let alpha = unsafe { &*(alpha as *const Complex<T> as *const Complex<f32>) };
            unsafe {
                scal2v_general::<f32_avx::F32Avx>(conjx, n, alpha, x.cast(), incx, y.cast(), incy, cntx)
            };
            return;
        }
    }
    unsafe { scal2v_general::<scalar::Portable<T>>(conjx, n, alpha, x, incx, y, incy, cntx) }
}

/// Dispatch axpy2v to the native backend for `T`.
///
/// # Safety
///
/// Same contract as [`crate::axpy2v_raw`], with `n > 0`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn axpy2v_dispatch<T: KernelScalar>(
    conjx: Conj,
    conjy: Conj,
    n: usize,
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
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let ax = unsafe { &*(alphax as *const Complex<T> as *const Complex<f64>) };
            let ay = unsafe { &*(alphay as *const Complex<T> as *const Complex<f64>) };
            unsafe {
                axpy2v_general::<f64_neon::F64Neon>(
                    conjx, conjy, n, ax, ay, x.cast(), incx, y.cast(), incy, z.cast(), incz, cntx,
                )
            };
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let ax = unsafe { &*(alphax as *const Complex<T> as *const Complex<f32>) };
            let ay = unsafe { &*(alphay as *const Complex<T> as *const Complex<f32>) };
            unsafe {
                axpy2v_general::<f32_neon::F32Neon>(
                    conjx, conjy, n, ax, ay, x.cast(), incx, y.cast(), incy, z.cast(), incz, cntx,
                )
            };
            return;
        }
    }
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let ax = unsafe { &*(alphax as *const Complex<T> as *const Complex<f64>) };
            let ay = unsafe { &*(alphay as *const Complex<T> as *const Complex<f64>) };
            unsafe {
                axpy2v_general::<f64_avx::F64Avx>(
                    conjx, conjy, n, ax, ay, x.cast(), incx, y.cast(), incy, z.cast(), incz, cntx,
                )
            };
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let ax = unsafe { &*(alphax as *const Complex<T> as *const Complex<f32>) };
            let ay = unsafe { &*(alphay as *const Complex<T> as *const Complex<f32>) };
            unsafe {
                axpy2v_general::<f32_avx::F32Avx>(
                    conjx, conjy, n, ax, ay, x.cast(), incx, y.cast(), incy, z.cast(), incz, cntx,
                )
            };
            return;
        }
    }
    unsafe {
        axpy2v_general::<scalar::Portable<T>>(
            conjx, conjy, n, alphax, alphay, x, incx, y, incy, z, incz, cntx,
        )
    }
}
