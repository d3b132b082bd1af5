//! Complex Level-1 kernels and their building blocks.
//!
//! - `tile`: runtime-sized loop tiling
//! - `access`: contiguous vs. strided tile loads/stores
//! - `lanes`: interleaved tile ↔ real/imaginary lanes
//! - [`scal2v`]: `y := alpha * conjx(x)`, with zero/one fast paths
//! - [`axpy2v`]: `z += alphax * conjx(x) + alphay * conjy(y)`
//! - [`reference`]: `setv` / `copyv` delegates
//!
//! Every entry point comes in two forms. The `_raw` form takes a pointer to
//! logical element `0` and reaches element `i` at `ptr.offset(i * inc)`;
//! misuse is undefined behaviour. The slice form checks the stride footprint
//! and panics on a short slice.

pub(crate) mod access;
pub mod axpy2v;
pub(crate) mod lanes;
pub mod reference;
pub mod scal2v;
pub(crate) mod tile;

/// Slice index of logical element `0` for a strided sequence of `n > 0`
/// elements, after checking the slice covers all of them.
///
/// For negative `inc` the sequence starts at the far end of the footprint.
#[inline]
#[track_caller]
pub(crate) fn strided_origin(len: usize, n: usize, inc: isize, name: &str) -> usize {
    debug_assert!(n > 0);
    let span = (n - 1)
        .checked_mul(inc.unsigned_abs())
        .unwrap_or_else(|| panic!("{name}: stride footprint overflows (n = {n}, inc = {inc})"));
    assert!(
        span < len,
        "{name}: slice of length {len} too short for n = {n} with stride {inc}"
    );
    if inc < 0 { span } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_positive_and_negative() {
        assert_eq!(strided_origin(5, 3, 2, "x"), 0);
        assert_eq!(strided_origin(5, 3, -2, "x"), 4);
        assert_eq!(strided_origin(1, 4, 0, "x"), 0);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn origin_rejects_short_slice() {
        strided_origin(4, 3, 2, "y");
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn origin_rejects_overflow() {
        strided_origin(4, usize::MAX, isize::MAX, "z");
    }
}
