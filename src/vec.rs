//! Vector types for cloth positions and screen coordinates.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Operations shared by 2D screen vectors and 3D world vectors.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Euclidean distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

// --------------------------------------------------------------------------
// Vec2<F>: screen space
// --------------------------------------------------------------------------

/// 2D vector, used for projected screen positions and cursor samples.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Vector from integer pixel coordinates.
    pub fn from_pixel(x: i32, y: i32) -> Self {
        Vec2 { x: F::from_i32(x), y: F::from_i32(y) }
    }

    /// Embed into 3D with a zero depth component.
    pub fn extend(self) -> Vec3<F> {
        Vec3 { x: self.x, y: self.y, z: F::zero() }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

// --------------------------------------------------------------------------
// Vec3<F>: world space
// --------------------------------------------------------------------------

/// 3D vector for node and camera positions.
///
/// `y` grows downward, matching screen space, so gravity is a positive `y`
/// increment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Express a world-space offset in a frame rotated by `yaw` about the
    /// vertical axis.
    pub fn rotate_yaw(self, yaw: F) -> Self {
        let (s, c) = (yaw.sin(), yaw.cos());
        Vec3 {
            x: self.x * c + self.z * s,
            y: self.y,
            z: -self.x * s + self.z * c,
        }
    }

    /// Inverse of [`rotate_yaw`](Self::rotate_yaw): a vector given in the
    /// rotated frame, expressed back in world space.
    pub fn unrotate_yaw(self, yaw: F) -> Self {
        let (s, c) = (yaw.sin(), yaw.cos());
        Vec3 {
            x: self.x * c - self.z * s,
            y: self.y,
            z: self.x * s + self.z * c,
        }
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}
