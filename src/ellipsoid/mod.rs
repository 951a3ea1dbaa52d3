//! Reference ellipsoids
//!
//! An [`Ellipsoid`] is described by its semi-major axis `a` and semi-minor
//! axis `b`, with `a >= b > 0`. A sphere is the special case `a == b`.

use crate::constants::{GRS80_INVERSE_FLATTENING, WGS84_INVERSE_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::errors::{NvectorError, Result};

/// Oblate reference ellipsoid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters, or any consistent length unit)
    a: f64,
    /// Semi-minor axis
    b: f64,
}

impl Ellipsoid {
    /// Create an ellipsoid from its semi-major and semi-minor axes
    ///
    /// # Errors
    ///
    /// [`NvectorError::InvalidEllipsoid`] unless both axes are finite and
    /// `a >= b > 0`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && b > 0.0 && a >= b) {
            log::debug!("rejecting ellipsoid axes a={} b={}", a, b);
            return Err(NvectorError::InvalidEllipsoid { a, b });
        }
        Ok(Ellipsoid { a, b })
    }

    /// Sphere of the given radius
    pub fn sphere(radius: f64) -> Result<Self> {
        Self::new(radius, radius)
    }

    /// Ellipsoid from semi-major axis and flattening `f = (a - b) / a`
    ///
    /// # Errors
    ///
    /// [`NvectorError::InvalidEllipsoid`] unless `0 <= f < 1` and `a` is
    /// finite and positive, via [`Ellipsoid::new`].
    pub fn from_flattening(a: f64, f: f64) -> Result<Self> {
        Self::new(a, a * (1.0 - f))
    }

    /// Unchecked variant for the named `const` ellipsoids below
    const fn from_flattening_unchecked(a: f64, f: f64) -> Self {
        Ellipsoid { a, b: a * (1.0 - f) }
    }

    /// Semi-major axis
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-minor axis
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Flattening `(a - b) / a`
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// First eccentricity squared: `1 - b²/a²`
    pub fn eccentricity_squared(&self) -> f64 {
        1.0 - (self.b * self.b) / (self.a * self.a)
    }

    /// First eccentricity
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::from_flattening_unchecked(WGS84_SEMI_MAJOR_AXIS, 1.0 / WGS84_INVERSE_FLATTENING);
pub const GRS80: Ellipsoid = Ellipsoid::from_flattening_unchecked(WGS84_SEMI_MAJOR_AXIS, 1.0 / GRS80_INVERSE_FLATTENING);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.a(), 6_378_137.0);
        assert_relative_eq!(WGS84.b(), 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(WGS84.eccentricity(), 0.081_819_190_842_622, epsilon = 1e-12);
        assert_relative_eq!(WGS84.flattening(), 1.0 / 298.257_223_563, epsilon = 1e-15);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        // WGS84 and GRS80 differ only slightly
        assert_relative_eq!(WGS84.a(), GRS80.a());
        assert!((WGS84.b() - GRS80.b()).abs() < 1e-3);
    }

    #[test]
    fn test_from_flattening_matches_named() {
        let wgs84 = Ellipsoid::from_flattening(6_378_137.0, 1.0 / 298.257_223_563).unwrap();
        assert_eq!(wgs84, WGS84);
        assert_eq!(Ellipsoid::from_flattening(5.0, 0.0).unwrap(), Ellipsoid::sphere(5.0).unwrap());
    }

    #[test]
    fn test_from_flattening_rejects_out_of_range() {
        for f in [-0.5, -1e-12, 1.0, 2.0, f64::NAN] {
            let err = Ellipsoid::from_flattening(1.0, f).unwrap_err();
            assert!(matches!(err, NvectorError::InvalidEllipsoid { .. }), "f={}", f);
        }
        assert!(Ellipsoid::from_flattening(-1.0, 0.1).is_err());
    }

    #[test]
    fn test_sphere_has_zero_eccentricity() {
        let s = Ellipsoid::sphere(1.0).unwrap();
        assert_eq!(s.eccentricity_squared(), 0.0);
        assert_eq!(s.flattening(), 0.0);
    }

    #[test]
    fn test_invalid_axes_rejected() {
        for (a, b) in [(1.0, 2.0), (1.0, 0.0), (0.0, 0.0), (-1.0, -2.0), (f64::NAN, 1.0), (f64::INFINITY, 1.0)] {
            let err = Ellipsoid::new(a, b).unwrap_err();
            assert!(matches!(err, NvectorError::InvalidEllipsoid { .. }));
        }
        assert!(Ellipsoid::sphere(-3.0).is_err());
    }
}
