//! # vlblas
//!
//! Vector-length-agnostic complex Level-1 kernels, no-std compatible.
//! No heap allocation and no state across calls.
//!
//! ## Quick start
//!
//! ```
//! use vlblas::{scal2v, axpy2v, Complex, Conj, Context};
//!
//! let cntx = Context::new();
//! let x = [Complex::new(1.0_f64, 2.0), Complex::new(3.0, -1.0)];
//!
//! // y = 1 * conj(x): exact sign flip, no multiply
//! let mut y = [Complex::new(0.0, 0.0); 2];
//! scal2v(Conj::Conjugate, 2, &Complex::new(1.0, 0.0), &x, 1, &mut y, 1, &cntx);
//! assert_eq!(y, [Complex::new(1.0, -2.0), Complex::new(3.0, 1.0)]);
//!
//! // z += 2x + 0y
//! let mut z = [Complex::new(0.0, 0.0); 2];
//! let (two, zero) = (Complex::new(2.0, 0.0), Complex::new(0.0, 0.0));
//! axpy2v(Conj::NoConjugate, Conj::NoConjugate, 2, &two, &zero, &x, 1, &y, 1, &mut z, 1, &cntx);
//! assert_eq!(z, [Complex::new(2.0, 4.0), Complex::new(6.0, -2.0)]);
//! ```
//!
//! ## Modules
//!
//! - [`kernels`]: `scal2v` (`y := alpha * conjx(x)`) and `axpy2v`
//!   (`z += alphax * conjx(x) + alphay * conjy(y)`), each with a checked slice
//!   form and an unchecked `_raw` pointer form, plus the `setv` / `copyv`
//!   primitives the scal2v fast paths delegate to.
//!
//! - [`context`]: [`Context`], the per-call capability handle. Reports the
//!   maximum tile size for a precision and register grouping, optionally
//!   capped; carries the vector length used for block sizes.
//!
//! - [`config`]: [`Precision`], [`Lmul`], [`Datatype`] and the register
//!   block sizes ([`BlockSizes`]) consumed by frameworks built on top.
//!
//! - [`traits`]: [`KernelScalar`], implemented for `f32` and `f64`.
//!
//! ## Backends
//!
//! Kernel bodies are written once against an internal vector-ISA trait
//! and instantiated per backend: AVX + FMA on x86_64 (enable with
//! `-C target-feature=+avx,+fma`), NEON on aarch64, and a portable emulated
//! backend everywhere else. [`BACKEND_NAME`] tells which one is compiled.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FMA via system libm; `std::error::Error` impls |
//! | `libm`    | no       | Pure-Rust float math for `no_std` builds |
//!
//! Build with either `std` or `libm`; `no_std` users enable `libm`.
//! | `tracing` | no       | `tracing` events for context setup and scal2v path selection |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vlblas needs either the `std` or the `libm` feature for float math");

/// Trace-level event on a kernel path. Compiles to nothing without the
/// `tracing` feature.
macro_rules! trace_kernel {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod config;
pub mod conj;
pub mod context;
pub mod kernels;
pub(crate) mod simd;
pub mod traits;

pub use config::{BlockSizes, Datatype, Lmul, Precision};
pub use conj::Conj;
pub use context::{Context, ContextError};
pub use kernels::axpy2v::{axpy2v, axpy2v_raw};
pub use kernels::reference::{copyv, copyv_raw, setv, setv_raw};
pub use kernels::scal2v::{scal2v, scal2v_raw};
pub use simd::BACKEND_NAME;
pub use traits::KernelScalar;

pub use num_complex::Complex;
