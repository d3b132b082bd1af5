//! Portable backend: emulated vector registers in fixed-size stack arrays.
//!
//! Used for every precision on targets without a native backend, and as the
//! reference the native backends are tested against. Fused operations go
//! through [`KernelScalar::fmadd`] so rounding matches hardware FMA.

use core::marker::PhantomData;

use crate::config::Lmul;
use crate::traits::KernelScalar;

use super::VectorIsa;

/// Emulated register length in bits.
pub(crate) const PORTABLE_VLEN_BITS: usize = 256;

/// Lane capacity of an emulated register group: `VLEN * LMUL / 32` for the
/// narrowest supported element.
pub(crate) const PORTABLE_MAX_VL: usize = 16;

/// Portable backend for element type `T`. Type-level only.
#[allow(dead_code)]
pub(crate) struct Portable<T>(PhantomData<T>);

impl<T: KernelScalar> VectorIsa for Portable<T> {
    type Elem = T;
    type Tile = [T; 2 * PORTABLE_MAX_VL];
    type Lane = [T; PORTABLE_MAX_VL];

    const LMUL: Lmul = Lmul::M2;
    const MAX_VL: usize = PORTABLE_MAX_VL;

    #[inline(always)]
    unsafe fn load_seg2(base: *const T, vl: usize) -> Self::Tile {
        debug_assert!(vl <= PORTABLE_MAX_VL);
        let mut tile = [T::zero(); 2 * PORTABLE_MAX_VL];
        unsafe { core::ptr::copy_nonoverlapping(base, tile.as_mut_ptr(), 2 * vl) };
        tile
    }

    #[inline(always)]
    unsafe fn load_strided_seg2(base: *const T, byte_stride: isize, vl: usize) -> Self::Tile {
        debug_assert!(vl <= PORTABLE_MAX_VL);
        let mut tile = [T::zero(); 2 * PORTABLE_MAX_VL];
        unsafe { super::gather_seg2(base, byte_stride, vl, &mut tile) };
        tile
    }

    #[inline(always)]
    unsafe fn store_seg2(base: *mut T, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= PORTABLE_MAX_VL);
        unsafe { core::ptr::copy_nonoverlapping(tile.as_ptr(), base, 2 * vl) };
    }

    #[inline(always)]
    unsafe fn store_strided_seg2(base: *mut T, byte_stride: isize, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= PORTABLE_MAX_VL);
        unsafe { super::scatter_seg2(base, byte_stride, vl, &tile) };
    }

    #[inline(always)]
    fn get_real(tile: Self::Tile) -> Self::Lane {
        core::array::from_fn(|i| tile[2 * i])
    }

    #[inline(always)]
    fn get_imag(tile: Self::Tile) -> Self::Lane {
        core::array::from_fn(|i| tile[2 * i + 1])
    }

    #[inline(always)]
    fn create(re: Self::Lane, im: Self::Lane) -> Self::Tile {
        core::array::from_fn(|i| if i % 2 == 0 { re[i / 2] } else { im[i / 2] })
    }

    #[inline(always)]
    fn mul_vf(v: Self::Lane, s: T, vl: usize) -> Self::Lane {
        let mut out = v;
        for lane in &mut out[..vl] {
            *lane = *lane * s;
        }
        out
    }

    #[inline(always)]
    fn macc_vf(acc: Self::Lane, s: T, v: Self::Lane, vl: usize) -> Self::Lane {
        let mut out = acc;
        for i in 0..vl {
            out[i] = v[i].fmadd(s, out[i]);
        }
        out
    }

    #[inline(always)]
    fn nmsac_vf(acc: Self::Lane, s: T, v: Self::Lane, vl: usize) -> Self::Lane {
        let mut out = acc;
        for i in 0..vl {
            out[i] = (-v[i]).fmadd(s, out[i]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = Portable<f64>;

    #[test]
    fn split_and_create_are_inverse() {
        let src: Vec<f64> = (0..2 * PORTABLE_MAX_VL).map(|i| i as f64).collect();
        let tile = unsafe { P::load_seg2(src.as_ptr(), PORTABLE_MAX_VL) };
        let re = P::get_real(tile);
        let im = P::get_imag(tile);
        assert_eq!(re[3], 6.0);
        assert_eq!(im[3], 7.0);
        assert_eq!(P::create(re, im), tile);
    }

    #[test]
    fn lanes_past_vl_untouched_by_arithmetic() {
        let v = [2.0_f64; PORTABLE_MAX_VL];
        let acc = [1.0_f64; PORTABLE_MAX_VL];
        let out = P::macc_vf(acc, 10.0, v, 3);
        assert_eq!(&out[..3], &[21.0; 3]);
        assert_eq!(&out[3..], &[1.0; PORTABLE_MAX_VL - 3]);
        let out = P::nmsac_vf(acc, 10.0, v, 2);
        assert_eq!(&out[..2], &[-19.0; 2]);
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn nmsac_is_fused() {
        let e = f64::EPSILON;
        let v = [1.0 + e; PORTABLE_MAX_VL];
        let acc = [1.0 + 2.0 * e; PORTABLE_MAX_VL];
        // acc - v*v == -e^2 exactly only with a single rounding
        let out = P::nmsac_vf(acc, 1.0 + e, v, 1);
        assert_eq!(out[0], -(e * e));
    }
}
