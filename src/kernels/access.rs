//! Tile loads and stores: contiguous segment access for unit stride,
//! strided segment access otherwise.

use num_complex::Complex;

use crate::simd::VectorIsa;

/// Byte pitch between consecutive complex elements at element stride `inc`.
#[inline(always)]
pub(crate) const fn seg2_pitch<T>(inc: isize) -> isize {
    2 * core::mem::size_of::<T>() as isize * inc
}

/// Load `vl` complex elements starting at `ptr`, `inc` elements apart.
///
/// # Safety
///
/// `ptr.offset(i * inc)` must be readable for every `i < vl`.
#[inline(always)]
pub(crate) unsafe fn load_tile<B: VectorIsa>(ptr: *const Complex<B::Elem>, inc: isize, vl: usize) -> B::Tile {
    let base = ptr.cast::<B::Elem>();
    unsafe {
        if inc == 1 {
            B::load_seg2(base, vl)
        } else {
            B::load_strided_seg2(base, seg2_pitch::<B::Elem>(inc), vl)
        }
    }
}

/// Store the first `vl` complex elements of `tile` at `ptr`, `inc` apart.
///
/// # Safety
///
/// `ptr.offset(i * inc)` must be writable for every `i < vl`.
#[inline(always)]
pub(crate) unsafe fn store_tile<B: VectorIsa>(ptr: *mut Complex<B::Elem>, inc: isize, tile: B::Tile, vl: usize) {
    let base = ptr.cast::<B::Elem>();
    unsafe {
        if inc == 1 {
            B::store_seg2(base, tile, vl)
        } else {
            B::store_strided_seg2(base, seg2_pitch::<B::Elem>(inc), tile, vl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar::Portable;

    type P = Portable<f64>;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn pitch_in_bytes() {
        assert_eq!(seg2_pitch::<f64>(1), 16);
        assert_eq!(seg2_pitch::<f32>(3), 24);
        assert_eq!(seg2_pitch::<f64>(-1), -16);
    }

    #[test]
    fn contiguous_roundtrip_touches_vl_only() {
        let src: Vec<_> = (0..5).map(|i| c(i as f64, -(i as f64))).collect();
        let tile = unsafe { load_tile::<P>(src.as_ptr(), 1, 3) };
        let mut dst = vec![c(9.0, 9.0); 5];
        unsafe { store_tile::<P>(dst.as_mut_ptr(), 1, tile, 3) };
        assert_eq!(&dst[..3], &src[..3]);
        assert_eq!(&dst[3..], &[c(9.0, 9.0); 2]);
    }

    #[test]
    fn strided_roundtrip() {
        let src: Vec<_> = (0..9).map(|i| c(i as f64, 10.0 + i as f64)).collect();
        let tile = unsafe { load_tile::<P>(src.as_ptr(), 3, 3) };
        let mut dst = vec![c(0.0, 0.0); 9];
        unsafe { store_tile::<P>(dst.as_mut_ptr(), 3, tile, 3) };
        for (i, z) in dst.iter().enumerate() {
            let expect = if i % 3 == 0 { src[i] } else { c(0.0, 0.0) };
            assert_eq!(*z, expect, "slot {i}");
        }
    }

    #[test]
    fn negative_stride_walks_backward() {
        let src = [c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)];
        let tile = unsafe { load_tile::<P>(src.as_ptr().add(2), -1, 3) };
        let mut dst = [c(0.0, 0.0); 3];
        unsafe { store_tile::<P>(dst.as_mut_ptr(), 1, tile, 3) };
        assert_eq!(dst, [c(3.0, 3.0), c(2.0, 2.0), c(1.0, 1.0)]);
    }
}
