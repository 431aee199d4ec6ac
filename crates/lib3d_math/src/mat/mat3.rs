use core::ops::*;
use std::fmt::Display;
use static_assertions as sa;
use crate::*;

/// 3x3 matrix (row-major order), acting on row vectors: `v' = v * M`
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Matrix3 {
    pub m11: f64, pub m12: f64, pub m13: f64,
    pub m21: f64, pub m22: f64, pub m23: f64,
    pub m31: f64, pub m32: f64, pub m33: f64,
}

sa::assert_eq_size!(Matrix3, [f64; 9]);

impl Matrix3 {
    pub const IDENTITY : Self = Self::new(1.0, 0.0, 0.0,
                                          0.0, 1.0, 0.0,
                                          0.0, 0.0, 1.0);
    pub const ZERO     : Self = Self::new(0.0, 0.0, 0.0,
                                          0.0, 0.0, 0.0,
                                          0.0, 0.0, 0.0);

    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    pub const fn new(m11: f64, m12: f64, m13: f64, m21: f64, m22: f64, m23: f64, m31: f64, m32: f64, m33: f64) -> Self {
        Self { m11, m12, m13,
               m21, m22, m23,
               m31, m32, m33 }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub const fn from_rows(row0: Vector3, row1: Vector3, row2: Vector3) -> Self {
        Self::new(row0.x, row0.y, row0.z,
                  row1.x, row1.y, row1.z,
                  row2.x, row2.y, row2.z)
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub const fn from_columns(column0: Vector3, column1: Vector3, column2: Vector3) -> Self {
        Self::new(column0.x, column1.x, column2.x,
                  column0.y, column1.y, column2.y,
                  column0.z, column1.z, column2.z)
    }

    /// Create a matrix from an array in row-major order
    #[inline]
    #[must_use]
    pub const fn from_array(vals: [f64; 9]) -> Self {
        Self::new(vals[0], vals[1], vals[2],
                  vals[3], vals[4], vals[5],
                  vals[6], vals[7], vals[8])
    }

    /// Get the content of the matrix as an array in row-major order
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 9] {
        [self.m11, self.m12, self.m13,
         self.m21, self.m22, self.m23,
         self.m31, self.m32, self.m33]
    }

    /// Get the row at the given index
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`, see [`Matrix3::try_row`] for a checked version
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m11, self.m12, self.m13),
            1 => Vector3::new(self.m21, self.m22, self.m23),
            2 => Vector3::new(self.m31, self.m32, self.m33),
            _ => panic!("row index {index} is out of range for Matrix3"),
        }
    }

    /// Get the column at the given index
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`, see [`Matrix3::try_column`] for a checked version
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m11, self.m21, self.m31),
            1 => Vector3::new(self.m12, self.m22, self.m32),
            2 => Vector3::new(self.m13, self.m23, self.m33),
            _ => panic!("column index {index} is out of range for Matrix3"),
        }
    }

    pub fn try_row(self, index: usize) -> Result<Vector3> {
        check_index(index)?;
        Ok(self.row(index))
    }

    pub fn try_column(self, index: usize) -> Result<Vector3> {
        check_index(index)?;
        Ok(self.column(index))
    }

    /// Get the value at the given `row` and `column`
    pub fn get(self, row: usize, column: usize) -> Result<f64> {
        check_index(row)?;
        check_index(column)?;
        Ok(self[(row, column)])
    }

    /// Calculate the determinant
    pub fn determinant(self) -> f64 {
        self.row(0).triple_product(self.row(1), self.row(2))
    }

    /// Calculate the trace
    #[inline]
    pub fn trace(self) -> f64 {
        self.m11 + self.m22 + self.m33
    }

    /// Transpose the matrix
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// Transform a `Vector3` (row-vector convention: `vec * self`)
    ///
    /// Every other product in this crate is built on this one.
    #[must_use]
    pub fn transform(self, vec: Vector3) -> Vector3 {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let row2 = self.row(2);

        row0 * vec.x + row1 * vec.y + row2 * vec.z
    }

    /// Compose 2 transforms: the result applies `self` first, then `rhs`
    ///
    /// Each row of `self` is transformed by `rhs`, so composing and transforming always agree.
    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        Self::from_rows(rhs.transform(self.row(0)),
                        rhs.transform(self.row(1)),
                        rhs.transform(self.row(2)))
    }

    //--------------------------------------------------------------

    /// Create a rotation of `theta` radians around the x-axis (right-handed: y rotates towards z)
    pub fn create_x_rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();

        Self::new(1.0,  0.0, 0.0,
                  0.0,  cos, sin,
                  0.0, -sin, cos)
    }

    /// Create a rotation of `theta` radians around the y-axis (right-handed: z rotates towards x)
    pub fn create_y_rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();

        Self::new(cos, 0.0, -sin,
                  0.0, 1.0,  0.0,
                  sin, 0.0,  cos)
    }

    /// Create a rotation of `theta` radians around the z-axis (right-handed: x rotates towards y)
    pub fn create_z_rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();

        Self::new( cos, sin, 0.0,
                  -sin, cos, 0.0,
                   0.0, 0.0, 1.0)
    }

    /// Create a right-handed rotation of `theta` radians around an arbitrary `axis` (Rodrigues' formula)
    ///
    /// The axis is normalized first, so it can have any non-zero length.
    /// A zero axis normalizes to the zero vector, giving the degenerate matrix `cos(theta) * I`.
    pub fn create_axis_rotation(axis: Vector3, theta: f64) -> Self {
        let n = axis.normalize();
        let (sin, cos) = theta.sin_cos();

        // vec * cross == n x vec
        let cross = Self::new( 0.0,  n.z, -n.y,
                              -n.z,  0.0,  n.x,
                               n.y, -n.x,  0.0);

        Self::create_uniform_scale(cos) + n.outer_product(n) * (1.0 - cos) + cross * sin
    }

    /// Create a uniform scale matrix
    pub fn create_uniform_scale(scale: f64) -> Self {
        Self::create_scale(scale, scale, scale)
    }

    /// Create a scale matrix along the coordinate axes
    pub fn create_scale(scale_x: f64, scale_y: f64, scale_z: f64) -> Self {
        Self::new(scale_x, 0.0    , 0.0    ,
                  0.0    , scale_y, 0.0    ,
                  0.0    , 0.0    , scale_z)
    }

    /// Create a matrix scaling by `scale` along `axis`, leaving the plane orthogonal to it untouched: `I + (scale - 1) * (n (x) n)`
    ///
    /// The axis is normalized first. A zero axis gives the identity matrix.
    pub fn create_axis_scale(axis: Vector3, scale: f64) -> Self {
        let n = axis.normalize();
        Self::IDENTITY + n.outer_product(n) * (scale - 1.0)
    }

    /// Create an orthogonal projection onto the plane with the given `normal`
    pub fn create_ortho_projection(normal: Vector3) -> Self {
        Self::create_axis_scale(normal, 0.0)
    }

    /// Create a reflection through the plane with the given `normal`
    pub fn create_reflection(normal: Vector3) -> Self {
        Self::create_axis_scale(normal, -1.0)
    }
}

fn check_index(index: usize) -> Result<()> {
    if index < 3 {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len: 3 })
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match index {
            (0, 0) => &self.m11, (0, 1) => &self.m12, (0, 2) => &self.m13,
            (1, 0) => &self.m21, (1, 1) => &self.m22, (1, 2) => &self.m23,
            (2, 0) => &self.m31, (2, 1) => &self.m32, (2, 2) => &self.m33,
            (row, column) => panic!("index ({row}, {column}) is out of range for Matrix3"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match index {
            (0, 0) => &mut self.m11, (0, 1) => &mut self.m12, (0, 2) => &mut self.m13,
            (1, 0) => &mut self.m21, (1, 1) => &mut self.m22, (1, 2) => &mut self.m23,
            (2, 0) => &mut self.m31, (2, 1) => &mut self.m32, (2, 2) => &mut self.m33,
            (row, column) => panic!("index ({row}, {column}) is out of range for Matrix3"),
        }
    }
}

impl Neg for Matrix3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_rows(-self.row(0), -self.row(1), -self.row(2))
    }
}

impl Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_rows(self.row(0) + rhs.row(0),
                        self.row(1) + rhs.row(1),
                        self.row(2) + rhs.row(2))
    }
}

impl Sub for Matrix3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_rows(self.row(0) - rhs.row(0),
                        self.row(1) - rhs.row(1),
                        self.row(2) - rhs.row(2))
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_rows(self.row(0) * rhs, self.row(1) * rhs, self.row(2) * rhs)
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Self::Output {
        rhs * self
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Matrix3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl ApproxEq for Matrix3 {
    fn is_close_to(self, rhs: Self, epsilon: f64) -> bool {
        self.to_array().iter().zip(rhs.to_array()).all(|(lhs, rhs)| lhs.is_close_to(rhs, epsilon))
    }
}

impl ApproxZero for Matrix3 {
    fn is_close_to_zero(self, epsilon: f64) -> bool {
        self.to_array().iter().all(|val| val.is_close_to_zero(epsilon))
    }
}

impl Display for Matrix3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
                    self.m11, self.m12, self.m13,
                    self.m21, self.m22, self.m23,
                    self.m31, self.m32, self.m33))
    }
}
