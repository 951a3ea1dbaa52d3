//! Constants module for geodetic calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Earth constants
/// WGS84 semi-major axis (equatorial radius) in meters
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// WGS84 inverse flattening
pub const WGS84_INVERSE_FLATTENING: f64 = 298.257_223_563;
/// GRS80 inverse flattening
pub const GRS80_INVERSE_FLATTENING: f64 = 298.257_222_101;
/// IUGG mean Earth radius in meters, for spherical-Earth distances
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;

// Tolerances
/// Slack, in radians on the unit sphere, allowed when deciding whether a
/// point lies on a great-circle segment
pub const SEGMENT_TOLERANCE: f64 = 1e-9;
