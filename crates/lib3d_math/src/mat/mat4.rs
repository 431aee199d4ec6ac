use core::ops::{Index, IndexMut};
use std::fmt::Display;
use static_assertions as sa;

/// 4x4 matrix (row-major order), reserved for homogeneous transforms (no algebra defined)
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Matrix4 {
    vals : [f64; 16]
}

sa::assert_eq_size!(Matrix4, [f64; 16]);

impl Matrix4 {
    /// Create a matrix from an array in row-major order
    #[inline(always)]
    #[must_use]
    pub const fn from_array(vals: [f64; 16]) -> Self {
        Self { vals }
    }

    /// Get the content of the matrix as an array in row-major order
    #[inline(always)]
    #[must_use]
    pub const fn to_array(self) -> [f64; 16] {
        self.vals
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.0 < 4 && index.1 < 4, "index ({}, {}) is out of range for Matrix4", index.0, index.1);
        &self.vals[index.0 * 4 + index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.0 < 4 && index.1 < 4, "index ({}, {}) is out of range for Matrix4", index.0, index.1);
        &mut self.vals[index.0 * 4 + index.1]
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (row, vals) in self.vals.chunks(4).enumerate() {
            if row != 0 {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("[{}, {}, {}, {}]", vals[0], vals[1], vals[2], vals[3]))?;
        }
        f.write_str("]")
    }
}
