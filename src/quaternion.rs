//! Quaternion rotations.
//!
//! A rotation is stored as a unit quaternion `(im, re)`. Composition uses the
//! Hamilton product: `a * b` rotates by `b` first, then by `a`.
//!
//! Every rotation has two representations, `q` and `-q`. Use
//! [`are_equivalent`] to compare rotations that were reached through
//! different computations and [`are_equal`] only when the exact
//! representation matters.

use std::ops::{Mul, Neg};

use crate::vector::{self, ApproxEq, Scalar, Vector3};

/// Quaternion with imaginary part `im` and real part `re`.
///
/// Only unit quaternions describe rotations. Non-unit values are fine as
/// intermediate results but must not be passed to [`Quaternion::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Imaginary (vector) part.
    pub im: Vector3,
    /// Real (scalar) part.
    pub re: Scalar,
}

impl Quaternion {
    /// Create a quaternion from its parts.
    pub const fn new(im: Vector3, re: Scalar) -> Self {
        Self { im, re }
    }

    /// The rotation that does nothing.
    pub const fn identity() -> Self {
        Self::new(Vector3::ZERO, 1.0)
    }

    /// Embed a vector as a pure-imaginary quaternion.
    pub const fn from_vector(v: Vector3) -> Self {
        Self::new(v, 0.0)
    }

    /// Rotation of `degrees` around `axis`.
    ///
    /// The axis is normalized here, so it only needs to be non-zero. The half
    /// angle appears because the sandwich product in [`Quaternion::apply`]
    /// applies the quaternion twice.
    pub fn from_angle_axis(degrees: Scalar, axis: Vector3) -> Self {
        let half = degrees.to_radians() / 2.0;
        Self::new(axis.normalized() * half.sin(), half.cos())
    }

    /// Negate the imaginary part in place.
    pub fn conjugate(&mut self) {
        self.im = -self.im;
    }

    /// Copy with the imaginary part negated. For a unit quaternion this is
    /// the inverse rotation.
    pub fn conjugated(&self) -> Self {
        Self::new(-self.im, self.re)
    }

    /// Squared 4D norm.
    pub fn squared_norm(&self) -> Scalar {
        self.im.squared_norm() + self.re * self.re
    }

    /// 4D norm.
    pub fn norm(&self) -> Scalar {
        self.squared_norm().sqrt()
    }

    /// Rotate `p` with the sandwich product `q * p * conj(q)`.
    pub fn apply(&self, p: Vector3) -> Vector3 {
        (*self * Self::from_vector(p) * self.conjugated()).im
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, b: Self) -> Self {
        Self::new(
            self.im.cross(b.im) + self.im * b.re + b.im * self.re,
            -self.im.dot(b.im) + self.re * b.re,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.im, -self.re)
    }
}

impl ApproxEq for Quaternion {
    fn approx_eq(&self, other: &Self) -> bool {
        self.im.approx_eq(&other.im) && self.re.approx_eq(&other.re)
    }

    fn approx_zero(&self) -> bool {
        self.im.approx_zero() && self.re.approx_zero()
    }
}

/// Component-wise equality within tolerance.
pub fn are_equal(a: Quaternion, b: Quaternion) -> bool {
    vector::are_equal(a, b)
}

/// True when `a` and `b` describe the same rotation, i.e. `a == b` or
/// `a == -b` within tolerance.
pub fn are_equivalent(a: Quaternion, b: Quaternion) -> bool {
    are_equal(a, b) || are_equal(a, -b)
}
