//! Position representations and the conversions between them.
//!
//! ```text
//!             to_nvector                 to_pvector(&Ellipsoid)
//!   LonLat  ─────────────►  NVector  ──────────────────────────►  PVector
//!           ◄─────────────           ◄──────────────────────────
//!             to_lonlat                  to_nvector(&Ellipsoid)
//! ```
//!
//! The capability traits below group the representations by what they can
//! convert to directly. Ellipsoid-dependent conversions take the ellipsoid
//! as an explicit argument.

pub mod cartesian;
pub mod lonlat;
pub mod matrix;
pub mod nvector;
pub mod pvector;

pub use cartesian::Vec3;
pub use lonlat::LonLat;
pub use matrix::Matrix3;
pub use nvector::NVector;
pub use pvector::PVector;

use crate::ellipsoid::Ellipsoid;

/// Representations convertible to an n-vector without further context
pub trait ToNVector {
    fn to_nvector(&self) -> NVector;
}

/// Representations convertible to geographic coordinates
pub trait ToLonLat {
    fn to_lonlat(&self) -> LonLat;
}

/// Representations that need an ellipsoid to become an n-vector
pub trait EllipsoidalToNVector {
    fn to_nvector(&self, ellipsoid: &Ellipsoid) -> NVector;
}

/// Representations that need an ellipsoid to become a p-vector
pub trait EllipsoidalToPVector {
    fn to_pvector(&self, ellipsoid: &Ellipsoid) -> PVector;
}

/// Anything with a Euclidean length
pub trait Magnitude {
    fn magnitude(&self) -> f64;
}

impl ToNVector for LonLat {
    fn to_nvector(&self) -> NVector {
        LonLat::to_nvector(self)
    }
}

impl ToLonLat for NVector {
    fn to_lonlat(&self) -> LonLat {
        NVector::to_lonlat(self)
    }
}

impl EllipsoidalToPVector for NVector {
    fn to_pvector(&self, ellipsoid: &Ellipsoid) -> PVector {
        NVector::to_pvector(self, ellipsoid)
    }
}

impl EllipsoidalToNVector for PVector {
    fn to_nvector(&self, ellipsoid: &Ellipsoid) -> NVector {
        PVector::to_nvector(self, ellipsoid)
    }
}

impl Magnitude for Vec3 {
    fn magnitude(&self) -> f64 {
        Vec3::magnitude(self)
    }
}

impl Magnitude for NVector {
    fn magnitude(&self) -> f64 {
        self.vec().magnitude()
    }
}

impl Magnitude for PVector {
    fn magnitude(&self) -> f64 {
        self.vec().magnitude()
    }
}
