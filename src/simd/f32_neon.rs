//! NEON backend for complex f32 (`c`) kernels on aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes.

use core::arch::aarch64::*;

use crate::config::Lmul;

use super::{gather_seg2, scatter_seg2, VectorIsa};

const LANES: usize = 4;

pub(crate) enum F32Neon {}

impl VectorIsa for F32Neon {
    type Elem = f32;
    type Tile = float32x4x2_t;
    type Lane = float32x4_t;

    const LMUL: Lmul = Lmul::M1;
    const MAX_VL: usize = LANES;

    #[inline(always)]
    unsafe fn load_seg2(base: *const f32, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                return vld2q_f32(base);
            }
            let mut buf = [0.0_f32; 2 * LANES];
            core::ptr::copy_nonoverlapping(base, buf.as_mut_ptr(), 2 * vl);
            vld2q_f32(buf.as_ptr())
        }
    }

    #[inline(always)]
    unsafe fn load_strided_seg2(base: *const f32, byte_stride: isize, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f32; 2 * LANES];
        unsafe {
            gather_seg2(base, byte_stride, vl, &mut buf);
            vld2q_f32(buf.as_ptr())
        }
    }

    #[inline(always)]
    unsafe fn store_seg2(base: *mut f32, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                vst2q_f32(base, tile);
                return;
            }
            let mut buf = [0.0_f32; 2 * LANES];
            vst2q_f32(buf.as_mut_ptr(), tile);
            core::ptr::copy_nonoverlapping(buf.as_ptr(), base, 2 * vl);
        }
    }

    #[inline(always)]
    unsafe fn store_strided_seg2(base: *mut f32, byte_stride: isize, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f32; 2 * LANES];
        unsafe {
            vst2q_f32(buf.as_mut_ptr(), tile);
            scatter_seg2(base, byte_stride, vl, &buf);
        }
    }

    #[inline(always)]
    fn get_real(tile: Self::Tile) -> float32x4_t {
        tile.0
    }

    #[inline(always)]
    fn get_imag(tile: Self::Tile) -> float32x4_t {
        tile.1
    }

    #[inline(always)]
    fn create(re: float32x4_t, im: float32x4_t) -> Self::Tile {
        float32x4x2_t(re, im)
    }

    #[inline(always)]
    fn mul_vf(v: float32x4_t, s: f32, _vl: usize) -> float32x4_t {
        unsafe { vmulq_f32(v, vdupq_n_f32(s)) }
    }

    #[inline(always)]
    fn macc_vf(acc: float32x4_t, s: f32, v: float32x4_t, _vl: usize) -> float32x4_t {
        unsafe { vfmaq_f32(acc, v, vdupq_n_f32(s)) }
    }

    #[inline(always)]
    fn nmsac_vf(acc: float32x4_t, s: f32, v: float32x4_t, _vl: usize) -> float32x4_t {
        unsafe { vfmsq_f32(acc, v, vdupq_n_f32(s)) }
    }
}
