//! # Geodesic Operations on N-vectors
//!
//! Distance, bearing, forward positioning and interpolation between
//! positions given as [`NVector`]s, plus great-circle segment
//! [`intersection`].
//!
//! All routines are closed-form and single-shot. Degenerate inputs
//! (coincident or antipodal pairs, positions at a pole for anything that
//! needs a local east direction) are not guarded and may yield NaN.
//!
//! ```rust
//! use nvector::coordinates::LonLat;
//! use nvector::constants::EARTH_MEAN_RADIUS;
//!
//! let a = LonLat::from_degrees(0.0, 0.0).unwrap().to_nvector();
//! let b = a.forward(0.0, 1000.0, EARTH_MEAN_RADIUS);
//! assert!((a.spherical_distance(&b, EARTH_MEAN_RADIUS) - 1000.0).abs() < 1e-6);
//! ```

pub mod intersection;

pub use intersection::{intersection, Intersection};

use crate::coordinates::cartesian::Vec3;
use crate::coordinates::nvector::NVector;
use crate::ellipsoid::Ellipsoid;
use crate::framelib::ned::east_north;
use std::f64::consts::PI;

impl NVector {
    /// Great-circle distance to `other` on a sphere of radius `radius`
    ///
    /// `atan2(|n1 × n2|, n1 · n2) · radius`, which keeps full precision for
    /// both tiny and near-antipodal separations.
    pub fn spherical_distance(&self, other: &NVector, radius: f64) -> f64 {
        let (v1, v2) = (self.vec(), other.vec());
        v1.cross(&v2).magnitude().atan2(v1.dot(&v2)) * radius
    }

    /// Bearing from `self` toward `other`, in radians clockwise from north
    ///
    /// Both positions are placed on `ellipsoid`, and their chord is rotated
    /// into the North-East-Down frame at `self`. Result lies in `(-π, π]`;
    /// due south is always `+π`.
    pub fn azimuth(&self, other: &NVector, ellipsoid: &Ellipsoid) -> f64 {
        let delta_e = other.to_pvector(ellipsoid).vec() - self.to_pvector(ellipsoid).vec();
        let to_ned = self.rotation_matrix().transpose();
        let delta_n = to_ned * delta_e;
        bearing(delta_n.y, delta_n.x)
    }

    /// Position reached by travelling `distance` along a great circle with
    /// initial bearing `azimuth` (radians) on a sphere of radius `radius`
    pub fn forward(&self, azimuth: f64, distance: f64, radius: f64) -> NVector {
        let (east, north) = east_north(self);
        let (sin_az, cos_az) = azimuth.sin_cos();
        let direction = north * cos_az + east * sin_az;

        // Great circle angle travelled
        let (sin_sab, cos_sab) = (distance / radius).sin_cos();
        NVector::new(self.vec() * cos_sab + direction * sin_sab)
    }

    /// Component-wise linear interpolation toward `other`
    ///
    /// `frac = 0` gives `self`, `frac = 1` gives `other`, both exactly. The
    /// result is a point on the chord and generally not of unit length; use
    /// [`NVector::normalized`] when a surface position is needed.
    pub fn interpolate(&self, other: &NVector, frac: f64) -> NVector {
        let (a, b) = (self.vec(), other.vec());
        NVector::new(Vec3::new(
            lerp(a.x, b.x, frac),
            lerp(a.y, b.y, frac),
            lerp(a.z, b.z, frac),
        ))
    }
}

/// Clockwise angle from north of the direction `(east, north)`, in `(-π, π]`
fn bearing(east: f64, north: f64) -> f64 {
    let az = east.atan2(north);
    // atan2(-0.0, negative) is -π
    if az == -PI {
        PI
    } else {
        az
    }
}

fn lerp(y0: f64, y1: f64, frac: f64) -> f64 {
    if frac == 1.0 {
        y1
    } else {
        y0 + frac * (y1 - y0)
    }
}
