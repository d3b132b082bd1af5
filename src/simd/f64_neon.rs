//! NEON backend for complex f64 (`z`) kernels on aarch64.
//!
//! NEON provides 128-bit registers → 2×f64 lanes. `vld2q`/`vst2q` are true
//! two-field segment loads: they deinterleave into separate real and
//! imaginary registers in hardware, so `get_real`/`get_imag` are free.

use core::arch::aarch64::*;

use crate::config::Lmul;

use super::{gather_seg2, scatter_seg2, VectorIsa};

const LANES: usize = 2;

pub(crate) enum F64Neon {}

impl VectorIsa for F64Neon {
    type Elem = f64;
    type Tile = float64x2x2_t;
    type Lane = float64x2_t;

    const LMUL: Lmul = Lmul::M1;
    const MAX_VL: usize = LANES;

    #[inline(always)]
    unsafe fn load_seg2(base: *const f64, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                return vld2q_f64(base);
            }
            let mut buf = [0.0_f64; 2 * LANES];
            core::ptr::copy_nonoverlapping(base, buf.as_mut_ptr(), 2 * vl);
            vld2q_f64(buf.as_ptr())
        }
    }

    #[inline(always)]
    unsafe fn load_strided_seg2(base: *const f64, byte_stride: isize, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f64; 2 * LANES];
        unsafe {
            gather_seg2(base, byte_stride, vl, &mut buf);
            vld2q_f64(buf.as_ptr())
        }
    }

    #[inline(always)]
    unsafe fn store_seg2(base: *mut f64, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                vst2q_f64(base, tile);
                return;
            }
            let mut buf = [0.0_f64; 2 * LANES];
            vst2q_f64(buf.as_mut_ptr(), tile);
            core::ptr::copy_nonoverlapping(buf.as_ptr(), base, 2 * vl);
        }
    }

    #[inline(always)]
    unsafe fn store_strided_seg2(base: *mut f64, byte_stride: isize, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f64; 2 * LANES];
        unsafe {
            vst2q_f64(buf.as_mut_ptr(), tile);
            scatter_seg2(base, byte_stride, vl, &buf);
        }
    }

    #[inline(always)]
    fn get_real(tile: Self::Tile) -> float64x2_t {
        tile.0
    }

    #[inline(always)]
    fn get_imag(tile: Self::Tile) -> float64x2_t {
        tile.1
    }

    #[inline(always)]
    fn create(re: float64x2_t, im: float64x2_t) -> Self::Tile {
        float64x2x2_t(re, im)
    }

    #[inline(always)]
    fn mul_vf(v: float64x2_t, s: f64, _vl: usize) -> float64x2_t {
        unsafe { vmulq_f64(v, vdupq_n_f64(s)) }
    }

    #[inline(always)]
    fn macc_vf(acc: float64x2_t, s: f64, v: float64x2_t, _vl: usize) -> float64x2_t {
        unsafe { vfmaq_f64(acc, v, vdupq_n_f64(s)) }
    }

    #[inline(always)]
    fn nmsac_vf(acc: float64x2_t, s: f64, v: float64x2_t, _vl: usize) -> float64x2_t {
        unsafe { vfmsq_f64(acc, v, vdupq_n_f64(s)) }
    }
}
