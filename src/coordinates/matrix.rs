//! Row-major 3×3 matrix used for frame rotations.

use super::cartesian::Vec3;
use nalgebra::Matrix3 as NaMatrix3;

/// 3×3 rotation / basis-change operator
///
/// Backed by nalgebra; constructed and indexed in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    inner: NaMatrix3<f64>,
}

impl Matrix3 {
    /// Builds a matrix from its three rows
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Matrix3 {
            inner: NaMatrix3::new(
                r0[0], r0[1], r0[2], //
                r1[0], r1[1], r1[2], //
                r2[0], r2[1], r2[2],
            ),
        }
    }

    /// Builds a matrix whose columns are the given vectors
    pub fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Matrix3 {
            inner: NaMatrix3::from_columns(&[c0.to_vector3(), c1.to_vector3(), c2.to_vector3()]),
        }
    }

    pub fn identity() -> Self {
        Matrix3 {
            inner: NaMatrix3::identity(),
        }
    }

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner[(row, col)]
    }

    /// Row `i` as a vector
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.inner[(i, 0)], self.inner[(i, 1)], self.inner[(i, 2)])
    }

    /// Column `j` as a vector
    pub fn column(&self, j: usize) -> Vec3 {
        Vec3::new(self.inner[(0, j)], self.inner[(1, j)], self.inner[(2, j)])
    }

    /// Rows and columns swapped
    pub fn transpose(&self) -> Matrix3 {
        Matrix3 {
            inner: self.inner.transpose(),
        }
    }

    /// Matrix-vector product `M·v`
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::from_vector3(self.inner * v.to_vector3())
    }

    /// Underlying nalgebra matrix
    pub fn as_nalgebra(&self) -> &NaMatrix3<f64> {
        &self.inner
    }
}

impl std::ops::Mul<Vec3> for Matrix3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        self.mul_vec(v)
    }
}

impl std::ops::Mul<Vec3> for &Matrix3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        self.mul_vec(v)
    }
}
