//! nvector: non-singular horizontal position representation
//!
//! This crate implements the n-vector formulation of Gade (2010), "A
//! Non-Singular Horizontal Position Representation", The Journal of
//! Navigation 63, 395-417. Positions are carried as unit vectors normal to
//! a reference ellipsoid, which avoids the pole and antimeridian
//! singularities of longitude/latitude.
//!
//! Typical flow: build a validated [`LonLat`], convert to an [`NVector`],
//! optionally place it on an [`Ellipsoid`] as a [`PVector`], and feed
//! n-vectors to the routines in [`geodesic`].
//!
//! ```rust
//! use nvector::{intersection, LonLat, WGS84};
//!
//! let a = LonLat::from_degrees(-10.0, 0.0)?.to_nvector();
//! let b = LonLat::from_degrees(10.0, 0.0)?.to_nvector();
//! let bearing = a.azimuth(&b, &WGS84);
//! assert!((bearing - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let c = LonLat::from_degrees(0.0, -10.0)?.to_nvector();
//! let d = LonLat::from_degrees(0.0, 10.0)?.to_nvector();
//! let crossing = intersection(&a, &b, &c, &d).into_result()?;
//! assert!(crossing.to_lonlat().lat().abs() < 1e-9);
//! # Ok::<(), nvector::NvectorError>(())
//! ```

pub mod constants;
pub mod coordinates;
pub mod ellipsoid;
pub mod errors;
pub mod framelib;
pub mod geodesic;

// Re-export commonly used types
pub use coordinates::{LonLat, Matrix3, NVector, PVector, Vec3};
pub use ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use errors::{NvectorError, Result};
pub use geodesic::{intersection, Intersection};
