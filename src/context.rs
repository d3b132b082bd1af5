//! Execution context handed to every kernel call.
//!
//! The kernels use the context for one thing only: the maximum tile size
//! for a precision and register grouping. It is immutable and `Copy`, so
//! one context can be shared freely across threads.

use core::num::NonZeroUsize;

use crate::config::{BlockSizes, Datatype, Lmul, Precision};
use crate::simd;

/// Largest accepted vector register length, in bits.
pub const MAX_VLEN_BITS: usize = 65536;

/// Errors from context configuration.
///
/// ```
/// use vlblas::{Context, ContextError};
///
/// assert_eq!(Context::new().with_tile_cap(0).unwrap_err(), ContextError::ZeroTileCap);
/// assert_eq!(
///     Context::with_vlen_bits(96).unwrap_err(),
///     ContextError::InvalidVlen { bits: 96 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// A tile cap of zero would never drain the loop.
    ZeroTileCap,
    /// Vector length must be a nonzero multiple of 64 bits, at most
    /// [`MAX_VLEN_BITS`].
    InvalidVlen { bits: usize },
}

impl core::fmt::Display for ContextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContextError::ZeroTileCap => write!(f, "tile cap must be at least 1"),
            ContextError::InvalidVlen { bits } => {
                write!(
                    f,
                    "vector length {bits} is not a nonzero multiple of 64 bits up to {MAX_VLEN_BITS}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContextError {}

/// Kernel execution context.
///
/// ```
/// use vlblas::{Context, Lmul, Precision};
///
/// let cntx = Context::with_vlen_bits(128).unwrap();
/// assert_eq!(cntx.max_tile(Precision::Double, Lmul::M4), 8);
///
/// let capped = cntx.with_tile_cap(3).unwrap();
/// assert_eq!(capped.max_tile(Precision::Double, Lmul::M4), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    vlen_bits: usize,
    tile_cap: Option<NonZeroUsize>,
}

impl Context {
    /// Context for the backend compiled into this build.
    pub fn new() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            backend = simd::BACKEND_NAME,
            vlen_bits = simd::NATIVE_VLEN_BITS,
            "kernel context created"
        );
        Context { vlen_bits: simd::NATIVE_VLEN_BITS, tile_cap: None }
    }

    /// Context reporting a specific vector register length.
    ///
    /// Tiles are still clamped to what the compiled backend can hold, so a
    /// larger `bits` than the hardware provides only affects block sizes.
    pub fn with_vlen_bits(bits: usize) -> Result<Self, ContextError> {
        if bits == 0 || bits % 64 != 0 || bits > MAX_VLEN_BITS {
            return Err(ContextError::InvalidVlen { bits });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(backend = simd::BACKEND_NAME, vlen_bits = bits, "kernel context created");
        Ok(Context { vlen_bits: bits, tile_cap: None })
    }

    /// Limit every tile to at most `cap` elements.
    pub fn with_tile_cap(self, cap: usize) -> Result<Self, ContextError> {
        let cap = NonZeroUsize::new(cap).ok_or(ContextError::ZeroTileCap)?;
        Ok(Context { tile_cap: Some(cap), ..self })
    }

    #[inline]
    pub fn vlen_bits(&self) -> usize {
        self.vlen_bits
    }

    #[inline]
    pub fn tile_cap(&self) -> Option<usize> {
        self.tile_cap.map(NonZeroUsize::get)
    }

    /// Name of the compiled kernel backend.
    #[inline]
    pub fn backend(&self) -> &'static str {
        simd::BACKEND_NAME
    }

    /// Maximum number of complex elements per tile: `VLEN * LMUL / SEW`,
    /// bounded by the tile cap if one is set. Never zero.
    #[inline]
    pub fn max_tile(&self, precision: Precision, lmul: Lmul) -> usize {
        let hw = (self.vlen_bits.saturating_mul(lmul.factor()) / precision.bits()).max(1);
        match self.tile_cap {
            Some(cap) => hw.min(cap.get()),
            None => hw,
        }
    }

    /// Register block sizes for the enclosing framework. Not used by the
    /// Level-1 kernels.
    #[inline]
    pub fn block_sizes(&self, dt: Datatype) -> BlockSizes {
        BlockSizes::for_datatype(dt, self.vlen_bits)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_tile_scales_with_lmul_and_precision() {
        let c = Context::with_vlen_bits(256).unwrap();
        assert_eq!(c.max_tile(Precision::Double, Lmul::M1), 4);
        assert_eq!(c.max_tile(Precision::Single, Lmul::M1), 8);
        assert_eq!(c.max_tile(Precision::Double, Lmul::M8), 32);
    }

    #[test]
    fn tile_cap_only_lowers() {
        let c = Context::with_vlen_bits(128).unwrap().with_tile_cap(100).unwrap();
        assert_eq!(c.max_tile(Precision::Double, Lmul::M1), 2);
        let c = c.with_tile_cap(1).unwrap();
        assert_eq!(c.tile_cap(), Some(1));
        assert_eq!(c.max_tile(Precision::Single, Lmul::M8), 1);
    }

    #[test]
    fn invalid_configuration() {
        assert_eq!(Context::with_vlen_bits(0), Err(ContextError::InvalidVlen { bits: 0 }));
        assert_eq!(Context::with_vlen_bits(100), Err(ContextError::InvalidVlen { bits: 100 }));
        assert_eq!(Context::new().with_tile_cap(0), Err(ContextError::ZeroTileCap));
    }

    #[test]
    fn oversized_vlen_rejected() {
        // top bit set: a multiple of 64 whose lmul product would overflow
        let huge = usize::MAX / 2 + 1;
        assert_eq!(Context::with_vlen_bits(huge), Err(ContextError::InvalidVlen { bits: huge }));
        let past = MAX_VLEN_BITS + 64;
        assert_eq!(Context::with_vlen_bits(past), Err(ContextError::InvalidVlen { bits: past }));

        let c = Context::with_vlen_bits(MAX_VLEN_BITS).unwrap();
        assert_eq!(c.max_tile(Precision::Single, Lmul::M8), MAX_VLEN_BITS * 8 / 32);
    }

    #[test]
    fn native_defaults() {
        let c = Context::default();
        assert_eq!(c.vlen_bits(), simd::NATIVE_VLEN_BITS);
        assert_eq!(c.tile_cap(), None);
        assert_eq!(c.backend(), simd::BACKEND_NAME);
        assert!(c.max_tile(Precision::Double, Lmul::M1) >= 1);
    }

    #[test]
    fn block_sizes_pass_through() {
        let c = Context::with_vlen_bits(512).unwrap();
        let z = c.block_sizes(Datatype::Complex64);
        assert_eq!((z.mr, z.nr, z.packmr), (6, 16, 8));
    }

    #[test]
    fn error_display() {
        assert_eq!(ContextError::ZeroTileCap.to_string(), "tile cap must be at least 1");
        assert!(ContextError::InvalidVlen { bits: 8 }.to_string().contains("8"));
    }
}
