//! Error types for the nvector crate
//!
//! All failures are reported through [`NvectorError`]. None of the
//! conversions or geodesic routines panic on caller input.

use thiserror::Error;

/// Main error type for n-vector functionality
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NvectorError {
    /// Latitude outside [-90°, 90°]
    #[error("invalid latitude: {lat:.6}")]
    InvalidLatitude {
        /// The rejected latitude, in degrees as supplied by the caller
        lat: f64,
    },

    /// Longitude that is infinite or NaN
    #[error("invalid longitude: {lon}")]
    InvalidLongitude {
        /// The rejected longitude, in degrees as supplied by the caller
        lon: f64,
    },

    /// Intersection point of two great circles lies outside one or both segments
    #[error("no intersection")]
    NoIntersection,

    /// Ellipsoid axes violating `a >= b > 0`
    #[error("invalid ellipsoid: a={a}, b={b} (require a >= b > 0)")]
    InvalidEllipsoid {
        /// Semi-major axis
        a: f64,
        /// Semi-minor axis
        b: f64,
    },
}

/// Extension of the Result type for n-vector operations
pub type Result<T> = std::result::Result<T, NvectorError>;
