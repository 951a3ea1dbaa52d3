//! # Cartesian Vector Module
//!
//! This module provides the 3D vector primitive that every position
//! representation in the crate is stored in.
//!
//! ## Frame Convention
//!
//! Vectors are expressed in the Earth-centered, Earth-fixed frame:
//! - **X-axis**: Points toward longitude 0°, latitude 0°
//! - **Y-axis**: Points toward longitude 90°E, latitude 0°
//! - **Z-axis**: Points toward the north pole
//!
//! ## Value Semantics
//!
//! `Vec3` is `Copy`; every operation returns a fresh value and nothing is
//! mutated in place. Degenerate inputs (zero or parallel vectors) are not
//! special-cased: a cross product of parallel vectors is simply a
//! near-zero vector, and callers further down the chain deal with it.
//!
//! ## Examples
//!
//! ```rust
//! use nvector::coordinates::cartesian::{cross, dot, Vec3};
//!
//! let x_axis = Vec3::new(1.0, 0.0, 0.0);
//! let y_axis = Vec3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(dot(x_axis, y_axis), 0.0);
//! assert_eq!(cross(x_axis, y_axis), Vec3::new(0.0, 0.0, 1.0));
//! ```

use nalgebra::Vector3;

/// Three-dimensional Cartesian vector
///
/// Raw storage for n-vectors, p-vectors and the intermediate directions
/// (east, north, plane normals) built by the geodesic algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X-component (toward 0° lon, 0° lat)
    pub x: f64,
    /// Y-component (toward 90°E, 0° lat)
    pub y: f64,
    /// Z-component (toward north pole)
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nvector::coordinates::cartesian::Vec3;
    ///
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Calculates the Euclidean norm
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nvector::coordinates::cartesian::Vec3;
    ///
    /// assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` for the zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nvector::coordinates::cartesian::Vec3;
    ///
    /// let unit = Vec3::new(0.0, 3.0, 4.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert!(Vec3::default().normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Vec3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// Follows the right-hand rule: `x × y = z`.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Components as an array, in x, y, z order
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vec3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

/// Cross product `u × v`
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(&v)
}

/// Dot product `u · v`
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.dot(&v)
}

impl From<[f64; 3]> for Vec3 {
    fn from(c: [f64; 3]) -> Self {
        Vec3::new(c[0], c[1], c[2])
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
