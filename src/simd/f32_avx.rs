//! AVX + FMA backend for complex f32 (`c`) kernels on x86_64.
//!
//! AVX provides 256-bit registers → 8×f32 lanes (8 complex elements per
//! tile, two interleaved registers).
//! Only compiled when `target_feature = "avx"` and `"fma"` are enabled.

use core::arch::x86_64::*;

use crate::config::Lmul;

use super::{gather_seg2, scatter_seg2, VectorIsa};

const LANES: usize = 8;

// even / odd floats of each 128-bit half of (a, b)
const EVEN: i32 = 0b10_00_10_00;
const ODD: i32 = 0b11_01_11_01;

pub(crate) enum F32Avx {}

impl VectorIsa for F32Avx {
    type Elem = f32;
    /// `[r0 i0 .. r3 i3]`, `[r4 i4 .. r7 i7]`
    type Tile = (__m256, __m256);
    type Lane = __m256;

    const LMUL: Lmul = Lmul::M1;
    const MAX_VL: usize = LANES;

    #[inline(always)]
    unsafe fn load_seg2(base: *const f32, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                return (_mm256_loadu_ps(base), _mm256_loadu_ps(base.add(8)));
            }
            let mut buf = [0.0_f32; 2 * LANES];
            core::ptr::copy_nonoverlapping(base, buf.as_mut_ptr(), 2 * vl);
            (_mm256_loadu_ps(buf.as_ptr()), _mm256_loadu_ps(buf.as_ptr().add(8)))
        }
    }

    #[inline(always)]
    unsafe fn load_strided_seg2(base: *const f32, byte_stride: isize, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f32; 2 * LANES];
        unsafe {
            gather_seg2(base, byte_stride, vl, &mut buf);
            (_mm256_loadu_ps(buf.as_ptr()), _mm256_loadu_ps(buf.as_ptr().add(8)))
        }
    }

    #[inline(always)]
    unsafe fn store_seg2(base: *mut f32, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                _mm256_storeu_ps(base, tile.0);
                _mm256_storeu_ps(base.add(8), tile.1);
                return;
            }
            let mut buf = [0.0_f32; 2 * LANES];
            _mm256_storeu_ps(buf.as_mut_ptr(), tile.0);
            _mm256_storeu_ps(buf.as_mut_ptr().add(8), tile.1);
            core::ptr::copy_nonoverlapping(buf.as_ptr(), base, 2 * vl);
        }
    }

    #[inline(always)]
    unsafe fn store_strided_seg2(base: *mut f32, byte_stride: isize, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f32; 2 * LANES];
        unsafe {
            _mm256_storeu_ps(buf.as_mut_ptr(), tile.0);
            _mm256_storeu_ps(buf.as_mut_ptr().add(8), tile.1);
            scatter_seg2(base, byte_stride, vl, &buf);
        }
    }

    #[inline(always)]
    fn get_real(tile: Self::Tile) -> __m256 {
        // [r0 r1 r4 r5 | r2 r3 r6 r7]
        unsafe { _mm256_shuffle_ps::<EVEN>(tile.0, tile.1) }
    }

    #[inline(always)]
    fn get_imag(tile: Self::Tile) -> __m256 {
        unsafe { _mm256_shuffle_ps::<ODD>(tile.0, tile.1) }
    }

    #[inline(always)]
    fn create(re: __m256, im: __m256) -> Self::Tile {
        unsafe { (_mm256_unpacklo_ps(re, im), _mm256_unpackhi_ps(re, im)) }
    }

    #[inline(always)]
    fn mul_vf(v: __m256, s: f32, _vl: usize) -> __m256 {
        unsafe { _mm256_mul_ps(v, _mm256_set1_ps(s)) }
    }

    #[inline(always)]
    fn macc_vf(acc: __m256, s: f32, v: __m256, _vl: usize) -> __m256 {
        unsafe { _mm256_fmadd_ps(v, _mm256_set1_ps(s), acc) }
    }

    #[inline(always)]
    fn nmsac_vf(acc: __m256, s: f32, v: __m256, _vl: usize) -> __m256 {
        unsafe { _mm256_fnmadd_ps(v, _mm256_set1_ps(s), acc) }
    }
}
