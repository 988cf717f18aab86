//! Three-component vector algebra.
//!
//! A single value type, [`Vector3`], stands in for points, displacements and
//! unit directions. [`Point3`] and [`Versor3`] are aliases that document the
//! caller's intent: a `Versor3` is expected to have unit norm, and it is the
//! caller's job to normalize before treating a vector as one.
//!
//! All approximate comparisons in the crate go through [`are_equal`] and
//! [`is_zero`], which use the fixed absolute tolerance [`EPSILON`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Scalar type used by every geometric quantity.
pub type Scalar = f64;

/// Absolute tolerance for approximate equality.
pub const EPSILON: Scalar = 1e-5;

/// A position in space.
pub type Point3 = Vector3;

/// A direction that is expected to have unit length.
pub type Versor3 = Vector3;

/// Three-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component (rightward in view space).
    pub x: Scalar,
    /// Y component (upward in view space).
    pub y: Scalar,
    /// Z component (forward in view space).
    pub z: Scalar,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X basis vector.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y basis vector.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z basis vector.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Squared Euclidean norm.
    pub fn squared_norm(self) -> Scalar {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn norm(self) -> Scalar {
        self.squared_norm().sqrt()
    }

    /// Return this vector divided by its norm.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero norm. Normalizing a zero vector is a
    /// caller bug, so it is never silently turned into some arbitrary unit
    /// vector.
    pub fn normalized(self) -> Versor3 {
        let n = self.norm();
        assert!(n > 0.0, "cannot normalize a zero-length vector");
        self / n
    }

    /// Normalize in place. Same precondition as [`Vector3::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
}

impl From<[Scalar; 3]> for Vector3 {
    fn from(v: [Scalar; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [Scalar; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Dot product of two vectors.
pub fn dot(a: Vector3, b: Vector3) -> Scalar {
    a.dot(b)
}

/// Cross product of two vectors.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, v: Self) {
        *self = *self + v;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, v: Self) {
        *self = *self - v;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Scalar> for Vector3 {
    type Output = Self;
    fn mul(self, k: Scalar) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Vector3> for Scalar {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl MulAssign<Scalar> for Vector3 {
    fn mul_assign(&mut self, k: Scalar) {
        *self = *self * k;
    }
}

impl Div<Scalar> for Vector3 {
    type Output = Self;
    fn div(self, k: Scalar) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl DivAssign<Scalar> for Vector3 {
    fn div_assign(&mut self, k: Scalar) {
        *self = *self / k;
    }
}

/// Component access by index: 0 is `x`, 1 is `y`, 2 is `z`.
///
/// Any other index panics, in debug and release builds alike.
impl Index<usize> for Vector3 {
    type Output = Scalar;
    fn index(&self, i: usize) -> &Scalar {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, i: usize) -> &mut Scalar {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

/// Tolerance-based comparison shared by every numeric type in the crate.
pub trait ApproxEq {
    /// True when `self` and `other` agree within [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool;
    /// True when `self` is within [`EPSILON`] of zero.
    fn approx_zero(&self) -> bool;
}

impl ApproxEq for Scalar {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }

    fn approx_zero(&self) -> bool {
        self.abs() < EPSILON
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x) && self.y.approx_eq(&other.y) && self.z.approx_eq(&other.z)
    }

    fn approx_zero(&self) -> bool {
        self.x.approx_zero() && self.y.approx_zero() && self.z.approx_zero()
    }
}

/// Approximate equality within [`EPSILON`].
pub fn are_equal<T: ApproxEq>(a: T, b: T) -> bool {
    a.approx_eq(&b)
}

/// Approximate zero test within [`EPSILON`].
pub fn is_zero<T: ApproxEq>(a: T) -> bool {
    a.approx_zero()
}
