//! Precision, register-grouping, and block-size configuration.
//!
//! The block sizes here are consumed by the framework that drives packing
//! and loop blocking above the Level-1 kernels. The kernels themselves only
//! read [`Precision`] and [`Lmul`] through the max-tile query.

/// Floating-point precision of the real lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit lanes (`f32`, complex `c`).
    Single,
    /// 64-bit lanes (`f64`, complex `z`).
    Double,
}

impl Precision {
    /// Selected element width in bits.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }
}

/// Register group multiplier: how many architectural vector registers one
/// lane vector spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lmul {
    M1,
    M2,
    M4,
    M8,
}

impl Lmul {
    #[inline]
    pub const fn factor(self) -> usize {
        match self {
            Lmul::M1 => 1,
            Lmul::M2 => 2,
            Lmul::M4 => 4,
            Lmul::M8 => 8,
        }
    }
}

/// Element datatype tag, one per BLAS prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// `s`
    Float32,
    /// `d`
    Float64,
    /// `c`
    Complex32,
    /// `z`
    Complex64,
}

impl Datatype {
    /// Precision of the underlying real lanes.
    #[inline]
    pub const fn precision(self) -> Precision {
        match self {
            Datatype::Float32 | Datatype::Complex32 => Precision::Single,
            Datatype::Float64 | Datatype::Complex64 => Precision::Double,
        }
    }

    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Datatype::Complex32 | Datatype::Complex64)
    }
}

// ── Register block sizes ─────────────────────────────────────────────

pub const MR_S: usize = 7;
pub const MR_D: usize = 7;
pub const MR_C: usize = 6;
pub const MR_Z: usize = 6;

pub const PACKMR_S: usize = 8;
pub const PACKMR_D: usize = 8;
pub const PACKMR_C: usize = 8;
pub const PACKMR_Z: usize = 8;

/// Register block sizes for one datatype.
///
/// `nr` scales with the minimum vector register length: four registers of
/// real lanes, or two of complex lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSizes {
    pub mr: usize,
    pub nr: usize,
    pub packmr: usize,
}

impl BlockSizes {
    /// Block sizes for `dt` on a machine whose vector registers hold at
    /// least `vlen_bits` bits.
    pub const fn for_datatype(dt: Datatype, vlen_bits: usize) -> Self {
        match dt {
            Datatype::Float32 => BlockSizes { mr: MR_S, nr: 4 * vlen_bits / 32, packmr: PACKMR_S },
            Datatype::Float64 => BlockSizes { mr: MR_D, nr: 4 * vlen_bits / 64, packmr: PACKMR_D },
            Datatype::Complex32 => BlockSizes { mr: MR_C, nr: 2 * vlen_bits / 32, packmr: PACKMR_C },
            Datatype::Complex64 => BlockSizes { mr: MR_Z, nr: 2 * vlen_bits / 64, packmr: PACKMR_Z },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes_at_128_bits() {
        let s = BlockSizes::for_datatype(Datatype::Float32, 128);
        assert_eq!(s, BlockSizes { mr: 7, nr: 16, packmr: 8 });
        let d = BlockSizes::for_datatype(Datatype::Float64, 128);
        assert_eq!(d, BlockSizes { mr: 7, nr: 8, packmr: 8 });
        let c = BlockSizes::for_datatype(Datatype::Complex32, 128);
        assert_eq!(c, BlockSizes { mr: 6, nr: 8, packmr: 8 });
        let z = BlockSizes::for_datatype(Datatype::Complex64, 128);
        assert_eq!(z, BlockSizes { mr: 6, nr: 4, packmr: 8 });
    }

    #[test]
    fn nr_scales_with_vlen() {
        let z256 = BlockSizes::for_datatype(Datatype::Complex64, 256);
        let z512 = BlockSizes::for_datatype(Datatype::Complex64, 512);
        assert_eq!(z512.nr, 2 * z256.nr);
    }

    #[test]
    fn datatype_precision() {
        assert_eq!(Datatype::Complex32.precision(), Precision::Single);
        assert_eq!(Datatype::Float64.precision(), Precision::Double);
        assert!(Datatype::Complex64.is_complex());
        assert!(!Datatype::Float32.is_complex());
        assert_eq!(Lmul::M4.factor() * Precision::Single.bits(), 128);
    }
}
