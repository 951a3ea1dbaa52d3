//! # Geographic Coordinates
//!
//! `LonLat` stores longitude and latitude in radians. The only public way
//! to build one is [`LonLat::from_degrees`], which normalizes longitude into
//! `[-π, π)` and rejects latitudes outside `[-90°, 90°]`, so every `LonLat`
//! in circulation is in range.
//!
//! ```rust
//! use nvector::coordinates::lonlat::LonLat;
//! use nvector::errors::NvectorError;
//!
//! let oslo = LonLat::from_degrees(10.75, 59.91).unwrap();
//! assert!((oslo.lat_degrees() - 59.91).abs() < 1e-12);
//!
//! let err = LonLat::from_degrees(0.0, 91.0).unwrap_err();
//! assert_eq!(err, NvectorError::InvalidLatitude { lat: 91.0 });
//! ```

use std::f64::consts::PI;
use std::fmt;

use super::cartesian::Vec3;
use super::nvector::NVector;
use crate::constants::{DEG2RAD, RAD2DEG, TAU};
use crate::errors::{NvectorError, Result};

/// Longitude/latitude pair in radians
///
/// Invariant: `lon ∈ [-π, π)`, `lat ∈ [-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    lon: f64,
    lat: f64,
}

/// Wraps an angle in radians into `[-π, π)`
pub(crate) fn wrap_longitude(lon: f64) -> f64 {
    let shifted = (lon + PI).rem_euclid(TAU);
    // rem_euclid rounds up to exactly TAU for inputs a hair below -π
    if shifted >= TAU {
        -PI
    } else {
        shifted - PI
    }
}

impl LonLat {
    /// Create a coordinate from longitude and latitude in degrees
    ///
    /// Longitude may be any finite value and is wrapped into `[-180°, 180°)`.
    ///
    /// # Errors
    ///
    /// - [`NvectorError::InvalidLongitude`] when `lon_deg` is infinite or NaN.
    /// - [`NvectorError::InvalidLatitude`] carrying `lat_deg` when
    ///   `|lat_deg| > 90` (or it is NaN).
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Result<Self> {
        if !lon_deg.is_finite() {
            log::debug!("rejecting longitude {} degrees", lon_deg);
            return Err(NvectorError::InvalidLongitude { lon: lon_deg });
        }
        // Compared in degrees so that exactly ±90 is never lost to rounding
        if lat_deg.is_nan() || lat_deg.abs() > 90.0 {
            log::debug!("rejecting latitude {} degrees", lat_deg);
            return Err(NvectorError::InvalidLatitude { lat: lat_deg });
        }
        Ok(LonLat {
            lon: wrap_longitude(lon_deg * DEG2RAD),
            lat: (lat_deg * DEG2RAD).clamp(-0.5 * PI, 0.5 * PI),
        })
    }

    /// Used by n-vector conversion, whose output is already in range
    pub(crate) fn from_radians_unchecked(lon: f64, lat: f64) -> Self {
        LonLat { lon, lat }
    }

    /// Longitude in radians, `[-π, π)`
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians, `[-π/2, π/2]`
    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon_degrees(&self) -> f64 {
        self.lon * RAD2DEG
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat * RAD2DEG
    }

    /// Converts to the n-vector normal to the sphere at this position
    ///
    /// - `x = cos(lon) * cos(lat)`
    /// - `y = sin(lon) * cos(lat)`
    /// - `z = sin(lat)`
    pub fn to_nvector(&self) -> NVector {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        NVector::new(Vec3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat))
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon_degrees(), self.lat_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(179.0, 179.0)]
    #[case(-180.0, -180.0)]
    #[case(180.0, -180.0)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(360.0, 0.0)]
    #[case(540.0, -180.0)]
    #[case(-725.0, -5.0)]
    #[case(f64::from_bits((-180f64).to_bits() + 1), -180.0)]
    fn test_longitude_wrapping(#[case] lon_deg: f64, #[case] expected_deg: f64) {
        let ll = LonLat::from_degrees(lon_deg, 10.0).unwrap();
        assert_abs_diff_eq!(ll.lon_degrees(), expected_deg, epsilon = 1e-9);
        assert!(ll.lon() >= -PI && ll.lon() < PI);
    }

    #[rstest]
    #[case(90.0)]
    #[case(-90.0)]
    #[case(45.5)]
    #[case(0.0)]
    fn test_valid_latitude(#[case] lat_deg: f64) {
        let ll = LonLat::from_degrees(0.0, lat_deg).unwrap();
        assert_abs_diff_eq!(ll.lat_degrees(), lat_deg, epsilon = 1e-12);
        assert!(ll.lat().abs() <= 0.5 * PI);
    }

    #[rstest]
    #[case(91.0)]
    #[case(-90.000001)]
    #[case(180.0)]
    #[case(f64::NAN)]
    fn test_invalid_latitude(#[case] lat_deg: f64) {
        match LonLat::from_degrees(0.0, lat_deg) {
            Err(NvectorError::InvalidLatitude { lat }) => {
                assert!(lat == lat_deg || (lat.is_nan() && lat_deg.is_nan()))
            }
            other => panic!("expected InvalidLatitude, got {:?}", other),
        }
    }

    #[test]
    fn test_longitude_just_below_antimeridian_stays_in_range() {
        // Walk the floats on either side of ±180°
        let mut lon_deg = -180.0f64;
        for _ in 0..50 {
            lon_deg = f64::from_bits(lon_deg.to_bits() + 1);
            let lon = LonLat::from_degrees(lon_deg, 0.0).unwrap().lon();
            assert!((-PI..PI).contains(&lon), "{} -> {}", lon_deg, lon);
        }
        let mut lon_deg = 180.0f64;
        for _ in 0..50 {
            lon_deg = f64::from_bits(lon_deg.to_bits() - 1);
            let lon = LonLat::from_degrees(lon_deg, 0.0).unwrap().lon();
            assert!((-PI..PI).contains(&lon), "{} -> {}", lon_deg, lon);
        }
    }

    #[rstest]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(f64::NAN)]
    fn test_non_finite_longitude_rejected(#[case] lon_deg: f64) {
        match LonLat::from_degrees(lon_deg, 0.0) {
            Err(NvectorError::InvalidLongitude { lon }) => {
                assert!(lon == lon_deg || (lon.is_nan() && lon_deg.is_nan()))
            }
            other => panic!("expected InvalidLongitude, got {:?}", other),
        }
    }

    #[test]
    fn test_north_pole_nvector() {
        let nv = LonLat::from_degrees(0.0, 90.0).unwrap().to_nvector();
        assert_abs_diff_eq!(nv.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(nv.y(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(nv.z(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_to_nvector_is_unit() {
        let nv = LonLat::from_degrees(-73.2, 41.3).unwrap().to_nvector();
        assert_abs_diff_eq!(nv.vec().magnitude(), 1.0, epsilon = 1e-15);

        let east = LonLat::from_degrees(90.0, 0.0).unwrap().to_nvector();
        assert_abs_diff_eq!(east.y(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_display() {
        let ll = LonLat::from_degrees(-122.5, 37.25).unwrap();
        assert_eq!(ll.to_string(), "(-122.500000, 37.250000)");
    }
}
