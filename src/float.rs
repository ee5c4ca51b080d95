//! Floating-point abstraction so the cloth can run in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations needed by the grid, solver and projector.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays
/// usable without `std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from an integer pixel or grid coordinate.
    fn from_i32(v: i32) -> Self;
    /// Convert from a grid count or index.
    fn from_usize(v: usize) -> Self;
    /// Lossy conversion to f32, used when handing buffers to a renderer.
    fn to_f32(self) -> f32;
    /// True for anything other than NaN or an infinity.
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn round(self) -> Self { libm::roundf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_i32(v: i32) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_f32(self) -> f32 { self }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn round(self) -> Self { libm::round(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_i32(v: i32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_f32(self) -> f32 { self as f32 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
