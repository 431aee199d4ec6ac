use core::ops::*;
use static_assertions as sa;
use crate::*;

generic_vec!{ doc = "3D vector (double precision), used both as a displacement and as a point"; Vector3, 3, x => 0, y => 1, z => 2 }

sa::assert_eq_size!(Vector3, [f64; 3]);

/// A point in 3D space, the type does not distinguish it from a displacement
pub type Point3 = Vector3;

#[cfg(feature = "degenerate_logging")]
fn log_zero_divide(vec: Vector3) {
    lib3d_logging::log_verbose!(crate::LOG_CAT, "{} divided by exact zero, substituting the zero vector", vec);
}

#[cfg(not(feature = "degenerate_logging"))]
#[inline(always)]
fn log_zero_divide(_: Vector3) {}

impl Vector3 {
    pub const ZERO   : Self = Self::new(0.0, 0.0, 0.0);
    pub const UNIT_X : Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y : Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z : Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector, rejecting NaN and infinite components
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (component, value) in [('x', x), ('y', y), ('z', z)] {
            if !value.is_finite() {
                return Err(Error::NonFinite { component, value });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Negate the vector: `(a, b, c)` becomes `(-a, -b, -c)`
    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }

    #[inline]
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }

    #[inline]
    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }

    /// Multiply each component by `k`
    #[inline]
    #[must_use]
    pub fn multiply(self, k: f64) -> Self {
        Self { x: self.x * k, y: self.y * k, z: self.z * k }
    }

    /// Divide each component by `k`
    ///
    /// When `k` is exactly `0.0` (either sign), the zero vector is returned instead of infinite or NaN components.
    /// Any other `k`, including subnormals, NaN and infinities, divides per IEEE-754.
    #[must_use]
    pub fn divide(self, k: f64) -> Self {
        if k == 0.0 {
            log_zero_divide(self);
            return Self::ZERO;
        }
        Self { x: self.x / k, y: self.y / k, z: self.z / k }
    }

    /// Calculate the dot product of 2 vectors
    #[inline]
    pub fn dot_product(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Calculate the (right-handed) cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross_product(self, rhs: Self) -> Self {
        Vector3 { x: self.y * rhs.z - self.z * rhs.y,
                  y: self.z * rhs.x - self.x * rhs.z,
                  z: self.x * rhs.y - self.y * rhs.x }
    }

    /// Calculate the scalar triple product `self . (b x c)`, i.e. the signed volume of the parallelepiped spanned by the 3 vectors
    #[inline]
    pub fn triple_product(self, b: Self, c: Self) -> f64 {
        self.dot_product(b.cross_product(c))
    }

    /// Calculate the outer product `self (x) rhs`, the matrix with `self[i] * rhs[j]` at row `i`, column `j`
    #[must_use]
    pub fn outer_product(self, rhs: Self) -> Matrix3 {
        Matrix3::from_rows(rhs * self.x, rhs * self.y, rhs * self.z)
    }

    /// Calculate the square length of the vector
    #[inline]
    pub fn magnitude_sq(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculate the length of the vector
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Calculate the square distance between 2 points
    #[inline]
    pub fn distance_sq(self, other: Self) -> f64 {
        self.subtract(other).magnitude_sq()
    }

    /// Calculate the distance between 2 points
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Normalize the vector
    ///
    /// The zero vector normalizes to the zero vector (see [`Vector3::divide`]), so a zero result means the direction is undefined.
    #[must_use]
    pub fn normalize(self) -> Self {
        self.divide(self.magnitude())
    }

    /// Normalize the vector, or `None` if its length is exactly 0
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.magnitude();
        if len == 0.0 { None } else { Some(self.divide(len)) }
    }

    /// Transform the vector by a matrix (row-vector convention: `self * mat`)
    #[inline(always)]
    #[must_use]
    pub fn transform(self, mat: Matrix3) -> Self {
        mat.transform(self)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl Neg for Vector3 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl AddAssign for Vector3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector3::add(*self, rhs);
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl SubAssign for Vector3 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.multiply(rhs);
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl DivAssign<f64> for Vector3 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: f64) {
        *self = self.divide(rhs);
    }
}

impl Mul<Matrix3> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        self.transform(rhs)
    }
}

impl MulAssign<Matrix3> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix3) {
        *self = self.transform(rhs)
    }
}

impl ApproxEq for Vector3 {
    fn is_close_to(self, rhs: Self, epsilon: f64) -> bool {
        self.x.is_close_to(rhs.x, epsilon) &&
        self.y.is_close_to(rhs.y, epsilon) &&
        self.z.is_close_to(rhs.z, epsilon)
    }
}

impl ApproxZero for Vector3 {
    fn is_close_to_zero(self, epsilon: f64) -> bool {
        self.x.is_close_to_zero(epsilon) &&
        self.y.is_close_to_zero(epsilon) &&
        self.z.is_close_to_zero(epsilon)
    }
}
