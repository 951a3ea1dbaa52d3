//! Reference frames attached to positions on the ellipsoid

pub mod ned;

pub use ned::rotation_matrix;
