//! # N-vector Representation
//!
//! An n-vector is the unit vector normal to the reference surface at a
//! position, expressed in the Earth-centered frame (see
//! [`cartesian`](super::cartesian) for axes). It has no singularities at the
//! poles or the antimeridian, which is why the geodesic routines in
//! [`crate::geodesic`] take n-vectors as input.
//!
//! Unit length is assumed by every algorithm but not re-checked after
//! construction. [`NVector::interpolate`](crate::geodesic) in particular
//! returns a chord point; call [`NVector::normalized`] to bring it back
//! to the surface.

use std::f64::consts::PI;

use super::cartesian::Vec3;
use super::lonlat::{wrap_longitude, LonLat};
use super::pvector::PVector;
use crate::ellipsoid::Ellipsoid;

/// Surface-normal unit vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NVector {
    vec: Vec3,
}

impl NVector {
    /// Wraps a vector without normalizing it
    pub const fn new(vec: Vec3) -> Self {
        NVector { vec }
    }

    /// Underlying Cartesian components
    pub fn vec(&self) -> Vec3 {
        self.vec
    }

    pub fn x(&self) -> f64 {
        self.vec.x
    }

    pub fn y(&self) -> f64 {
        self.vec.y
    }

    pub fn z(&self) -> f64 {
        self.vec.z
    }

    /// Rescaled to unit length, or unchanged if it is the zero vector
    pub fn normalized(&self) -> NVector {
        match self.vec.normalize() {
            Some(unit) => NVector::new(unit),
            None => *self,
        }
    }

    /// Geographic coordinates of this n-vector
    ///
    /// `lat = atan2(z, sqrt(x² + y²))`, `lon = atan2(y, x)` wrapped into
    /// `[-π, π)`. The whole circle of longitude is recovered.
    pub fn to_lonlat(&self) -> LonLat {
        let Vec3 { x, y, z } = self.vec;
        let lat = z.atan2((x * x + y * y).sqrt());
        let lon = wrap_longitude(y.atan2(x));
        LonLat::from_radians_unchecked(lon, lat.clamp(-0.5 * PI, 0.5 * PI))
    }

    /// Position on the ellipsoid surface with this surface normal
    ///
    /// With `k = (a/b)²` and `c = b / sqrt(z² + k·y² + k·x²)` the result is
    /// `(c·k·x, c·k·y, c·z)`.
    pub fn to_pvector(&self, ellipsoid: &Ellipsoid) -> PVector {
        let Vec3 { x, y, z } = self.vec;
        let (a, b) = (ellipsoid.a(), ellipsoid.b());
        let k = (a * a) / (b * b);
        let c = b / (z * z + k * y * y + k * x * x).sqrt();
        PVector::new(Vec3::new(c * k * x, c * k * y, c * z))
    }
}

impl From<Vec3> for NVector {
    fn from(vec: Vec3) -> Self {
        NVector::new(vec)
    }
}

impl From<LonLat> for NVector {
    fn from(ll: LonLat) -> Self {
        ll.to_nvector()
    }
}
