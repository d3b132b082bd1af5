//! Runtime-sized tiling of an arbitrary-length loop.

/// Run `tile(vl)` over `n` elements in chunks of `min(vlmax, remaining)`.
///
/// Every chunk is exactly `vlmax` long except possibly the last, and the
/// chunk lengths sum to `n`. `n == 0` runs no chunks. The callback owns
/// pointer advancement for its buffers.
#[inline(always)]
pub(crate) fn for_each_tile(n: usize, vlmax: usize, mut tile: impl FnMut(usize)) {
    assert!(vlmax > 0, "tile size must be positive");
    let mut avl = n;
    while avl > 0 {
        let vl = vlmax.min(avl);
        tile(vl);
        avl -= vl;
    }
}
