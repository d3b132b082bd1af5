//! Conjugation flag applied per input sequence.

use num_complex::Complex;

use crate::traits::KernelScalar;

/// Whether an input sequence is used as-is or complex-conjugated.
///
/// Conjugation never applies to scalar operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conj {
    #[default]
    NoConjugate,
    Conjugate,
}

impl Conj {
    #[inline]
    pub fn is_conj(self) -> bool {
        matches!(self, Conj::Conjugate)
    }

    /// Apply the flag to a single value. Conjugation is an exact sign flip
    /// of the imaginary part.
    #[inline]
    pub fn apply<T: KernelScalar>(self, z: Complex<T>) -> Complex<T> {
        match self {
            Conj::NoConjugate => z,
            Conj::Conjugate => Complex::new(z.re, -z.im),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_no_conjugate() {
        assert_eq!(Conj::default(), Conj::NoConjugate);
        assert!(Conj::Conjugate.is_conj());
        assert!(!Conj::NoConjugate.is_conj());
    }

    #[test]
    fn apply_flips_imag_sign_only() {
        let z = Complex::new(1.5_f64, -2.0);
        assert_eq!(Conj::NoConjugate.apply(z), z);
        assert_eq!(Conj::Conjugate.apply(z), Complex::new(1.5, 2.0));
        // signed zero flips too
        let w = Conj::Conjugate.apply(Complex::new(0.0_f32, 0.0));
        assert!(w.im.is_sign_negative());
    }
}
