//! Local North-East-Down frame.
//!
//! The rotation returned by [`rotation_matrix`] has the unit north, east
//! and down vectors of the local frame as its columns, so it takes NED
//! components into the Earth-centered frame. Its transpose goes the other
//! way.
//!
//! The frame is singular at the poles, where "east" is undefined: the east
//! vector has zero length there and the matrix fills with NaN.

use crate::coordinates::cartesian::{cross, Vec3};
use crate::coordinates::matrix::Matrix3;
use crate::coordinates::nvector::NVector;

const NORTH_POLE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Unit east and north directions at `nv`
pub(crate) fn east_north(nv: &NVector) -> (Vec3, Vec3) {
    let east = cross(NORTH_POLE, nv.vec());
    let north = cross(nv.vec(), east);
    (east / east.magnitude(), north / north.magnitude())
}

/// Rotation from the local NED frame at `nv` to the Earth-centered frame
pub fn rotation_matrix(nv: &NVector) -> Matrix3 {
    let (east, north) = east_north(nv);
    Matrix3::from_columns(north, east, -nv.vec())
}

impl NVector {
    /// See [`rotation_matrix`]
    pub fn rotation_matrix(&self) -> Matrix3 {
        rotation_matrix(self)
    }
}
