use core::fmt::Debug;
use num_traits::Float;

use crate::config::Precision;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Real component type of the complex elements the kernels operate on.
///
/// Sealed: implemented for `f32` (single precision, `c` datatype) and
/// `f64` (double precision, `z` datatype) only, since every backend
/// provides exactly those two lane types.
pub trait KernelScalar: Float + Debug + Send + Sync + 'static + private::Sealed {
    /// Precision tag used by the max-tile query.
    const PRECISION: Precision;

    /// Fused multiply-add `self * a + b` with a single rounding.
    fn fmadd(self, a: Self, b: Self) -> Self;
}

/// Concrete impls for the two supported precisions.
macro_rules! impl_kernel_scalar {
    ($($t:ty => $p:expr),*) => {
        $(
            impl KernelScalar for $t {
                const PRECISION: Precision = $p;

                #[inline]
                fn fmadd(self, a: $t, b: $t) -> $t {
                    Float::mul_add(self, a, b)
                }
            }
        )*
    };
}

impl_kernel_scalar!(f32 => Precision::Single, f64 => Precision::Double);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_tags() {
        assert_eq!(<f32 as KernelScalar>::PRECISION, Precision::Single);
        assert_eq!(<f64 as KernelScalar>::PRECISION, Precision::Double);
    }

    #[test]
    fn fmadd_is_single_rounding() {
        // (1 + 2^-52)^2 - 1 - 2^-51 == 2^-104, lost without fusion
        let a = 1.0_f64 + f64::EPSILON;
        let b = -(1.0_f64 + 2.0 * f64::EPSILON);
        let r = a.fmadd(a, b);
        assert_eq!(r, f64::EPSILON * f64::EPSILON);
    }
}
