//! Intersection of two great-circle segments.
//!
//! The two great circles through `(a1, b1)` and `(a2, b2)` always meet in a
//! pair of antipodal points (unless they coincide). The one on the same
//! hemisphere as `a1` is taken as the candidate, and then tested against
//! both segments: a point `i` lies on segment `ab` when
//! `|d(a,b) - d(a,i) - d(b,i)|` on the unit sphere is within
//! [`SEGMENT_TOLERANCE`].
//!
//! The candidate is returned even when the test fails, so callers can
//! inspect where the extended great circles cross.

use crate::constants::SEGMENT_TOLERANCE;
use crate::coordinates::cartesian::cross;
use crate::coordinates::nvector::NVector;
use crate::errors::{NvectorError, Result};

/// Crossing point of two great circles and whether it lies on both segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Crossing point nearest the first segment's start, always populated
    pub point: NVector,
    /// `Err(NvectorError::NoIntersection)` when `point` is off either segment
    pub status: Result<()>,
}

impl Intersection {
    pub fn is_within_segments(&self) -> bool {
        self.status.is_ok()
    }

    /// Discards the point when it is off-segment
    pub fn into_result(self) -> Result<NVector> {
        self.status.map(|()| self.point)
    }
}

/// Residual of the "i lies between a and b" test on the unit sphere
fn segment_residual(a: &NVector, b: &NVector, i: &NVector) -> f64 {
    (a.spherical_distance(b, 1.0) - a.spherical_distance(i, 1.0) - b.spherical_distance(i, 1.0)).abs()
}

/// Intersects segment `a1 → b1` with segment `a2 → b2`
///
/// # Examples
///
/// ```rust
/// use nvector::coordinates::LonLat;
/// use nvector::geodesic::intersection;
///
/// let nv = |lon, lat| LonLat::from_degrees(lon, lat).unwrap().to_nvector();
/// let hit = intersection(&nv(-10.0, 0.0), &nv(10.0, 0.0), &nv(0.0, -10.0), &nv(0.0, 10.0));
/// assert!(hit.is_within_segments());
/// assert!(hit.point.to_lonlat().lon().abs() < 1e-9);
/// ```
pub fn intersection(a1: &NVector, b1: &NVector, a2: &NVector, b2: &NVector) -> Intersection {
    let normal_a = cross(a1.vec(), b1.vec());
    let normal_b = cross(a2.vec(), b2.vec());
    let mut crossing = cross(normal_a, normal_b);

    // Select the intersection on the same side of the sphere as a1
    if crossing.dot(&a1.vec()) < 0.0 {
        crossing = -crossing;
    }
    let point = NVector::new(crossing).normalized();

    let residual_1 = segment_residual(a1, b1, &point);
    let residual_2 = segment_residual(a2, b2, &point);
    let status = if residual_1 > SEGMENT_TOLERANCE || residual_2 > SEGMENT_TOLERANCE {
        log::debug!(
            "great circles cross off-segment: residuals {:e}, {:e} (tolerance {:e})",
            residual_1,
            residual_2,
            SEGMENT_TOLERANCE
        );
        Err(NvectorError::NoIntersection)
    } else {
        Ok(())
    };

    Intersection { point, status }
}
