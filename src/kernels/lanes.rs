//! Complex lane decomposition: interleaved tile ↔ separate real and
//! imaginary lane vectors.
//!
//! Fused multiply-add hardware works on homogeneous real lanes only, so
//! every complex product is expanded into real-lane operations on the
//! pair produced here.

use crate::simd::VectorIsa;

/// Real and imaginary lanes of one tile.
#[derive(Clone, Copy)]
pub(crate) struct ComplexLanes<L> {
    pub re: L,
    pub im: L,
}

#[inline(always)]
pub(crate) fn split<B: VectorIsa>(tile: B::Tile) -> ComplexLanes<B::Lane> {
    ComplexLanes { re: B::get_real(tile), im: B::get_imag(tile) }
}

#[inline(always)]
pub(crate) fn join<B: VectorIsa>(lanes: ComplexLanes<B::Lane>) -> B::Tile {
    B::create(lanes.re, lanes.im)
}
