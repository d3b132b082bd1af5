//! AVX + FMA backend for complex f64 (`z`) kernels on x86_64.
//!
//! AVX provides 256-bit registers → 4×f64 lanes, i.e. 4 complex elements
//! per tile held as two interleaved registers.
//! Only compiled when `target_feature = "avx"` and `"fma"` are enabled
//! (e.g. via `-C target-cpu=native` on Haswell+).
//!
//! Lane order after deinterleaving is `[0, 2, 1, 3]`; `create` applies the
//! inverse shuffle, and every lane operation is elementwise, so the
//! permutation never reaches memory.

use core::arch::x86_64::*;

use crate::config::Lmul;

use super::{gather_seg2, scatter_seg2, VectorIsa};

const LANES: usize = 4;

pub(crate) enum F64Avx {}

impl VectorIsa for F64Avx {
    type Elem = f64;
    /// `[r0 i0 r1 i1]`, `[r2 i2 r3 i3]`
    type Tile = (__m256d, __m256d);
    type Lane = __m256d;

    const LMUL: Lmul = Lmul::M1;
    const MAX_VL: usize = LANES;

    #[inline(always)]
    unsafe fn load_seg2(base: *const f64, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                return (_mm256_loadu_pd(base), _mm256_loadu_pd(base.add(4)));
            }
            let mut buf = [0.0_f64; 2 * LANES];
            core::ptr::copy_nonoverlapping(base, buf.as_mut_ptr(), 2 * vl);
            (_mm256_loadu_pd(buf.as_ptr()), _mm256_loadu_pd(buf.as_ptr().add(4)))
        }
    }

    #[inline(always)]
    unsafe fn load_strided_seg2(base: *const f64, byte_stride: isize, vl: usize) -> Self::Tile {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f64; 2 * LANES];
        unsafe {
            gather_seg2(base, byte_stride, vl, &mut buf);
            (_mm256_loadu_pd(buf.as_ptr()), _mm256_loadu_pd(buf.as_ptr().add(4)))
        }
    }

    #[inline(always)]
    unsafe fn store_seg2(base: *mut f64, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        unsafe {
            if vl == LANES {
                _mm256_storeu_pd(base, tile.0);
                _mm256_storeu_pd(base.add(4), tile.1);
                return;
            }
            let mut buf = [0.0_f64; 2 * LANES];
            _mm256_storeu_pd(buf.as_mut_ptr(), tile.0);
            _mm256_storeu_pd(buf.as_mut_ptr().add(4), tile.1);
            core::ptr::copy_nonoverlapping(buf.as_ptr(), base, 2 * vl);
        }
    }

    #[inline(always)]
    unsafe fn store_strided_seg2(base: *mut f64, byte_stride: isize, tile: Self::Tile, vl: usize) {
        debug_assert!(vl <= LANES);
        let mut buf = [0.0_f64; 2 * LANES];
        unsafe {
            _mm256_storeu_pd(buf.as_mut_ptr(), tile.0);
            _mm256_storeu_pd(buf.as_mut_ptr().add(4), tile.1);
            scatter_seg2(base, byte_stride, vl, &buf);
        }
    }

    #[inline(always)]
    fn get_real(tile: Self::Tile) -> __m256d {
        // [r0 r2 r1 r3]
        unsafe { _mm256_unpacklo_pd(tile.0, tile.1) }
    }

    #[inline(always)]
    fn get_imag(tile: Self::Tile) -> __m256d {
        // [i0 i2 i1 i3]
        unsafe { _mm256_unpackhi_pd(tile.0, tile.1) }
    }

    #[inline(always)]
    fn create(re: __m256d, im: __m256d) -> Self::Tile {
        unsafe { (_mm256_unpacklo_pd(re, im), _mm256_unpackhi_pd(re, im)) }
    }

    #[inline(always)]
    fn mul_vf(v: __m256d, s: f64, _vl: usize) -> __m256d {
        unsafe { _mm256_mul_pd(v, _mm256_set1_pd(s)) }
    }

    #[inline(always)]
    fn macc_vf(acc: __m256d, s: f64, v: __m256d, _vl: usize) -> __m256d {
        unsafe { _mm256_fmadd_pd(v, _mm256_set1_pd(s), acc) }
    }

    #[inline(always)]
    fn nmsac_vf(acc: __m256d, s: f64, v: __m256d, _vl: usize) -> __m256d {
        unsafe { _mm256_fnmadd_pd(v, _mm256_set1_pd(s), acc) }
    }
}
