//! # Ellipsoid Surface Positions
//!
//! A `PVector` is the Earth-centered Cartesian position of a point on the
//! surface of a particular [`Ellipsoid`]. It carries no reference to that
//! ellipsoid, so the same ellipsoid must be supplied again when converting
//! back to an n-vector.
//!
//! ## Closed-form inversion
//!
//! [`PVector::to_nvector`] recovers the geodetic surface normal without
//! iteration. Writing `e²` for the first eccentricity squared and `ρ` for
//! `sqrt(x² + y²)`:
//!
//! ```text
//! p = ρ² / a²
//! q = (1 - e²) z² / a²
//! r = (p + q - e⁴) / 6
//! S = e⁴ p q / 4
//! D = S (2 r³ + S)
//! u = r + T + r²/T,  T = cbrt(S + r³ ± sqrt(D))   when D >= 0
//! u = r + 2 r cos(θ/3), θ = atan2(sqrt(-D), -(S + r³))   when D < 0
//! v = sqrt(u² + e⁴ q)
//! w = e² (u + v - q) / (2 v)
//! k = (u + v) / (sqrt(u + v + w²) + w)
//! n = (k/(k+e²) x, k/(k+e²) y, z) / sqrt((k ρ/(k+e²))² + z²)
//! ```
//!
//! The `D < 0` branch covers points inside the evolute of the meridian
//! ellipse, which surface points reach near the poles once `b/a < 1/√2`.
//! The sign of `sqrt(D)` follows `S + r³`, and `u + v` is formed as
//! `e⁴q / (v - u)` when `u < 0`, so neither step cancels. The only
//! undefined input is the ellipsoid center.

use super::cartesian::Vec3;
use super::nvector::NVector;
use crate::ellipsoid::Ellipsoid;

/// Cartesian position on an ellipsoid surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PVector {
    vec: Vec3,
}

impl PVector {
    pub const fn new(vec: Vec3) -> Self {
        PVector { vec }
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

    /// Surface normal at this position on `ellipsoid`
    pub fn to_nvector(&self, ellipsoid: &Ellipsoid) -> NVector {
        let Vec3 { x, y, z } = self.vec;
        let e2 = ellipsoid.eccentricity_squared();
        let e4 = e2 * e2;
        let a = ellipsoid.a();

        let rho = x.hypot(y);
        let p = (rho / a).powi(2);
        let q = (1.0 - e2) * (z / a).powi(2);
        let r = (p + q - e4) / 6.0;

        if e4 * q == 0.0 && r <= 0.0 {
            // On the equatorial plane inside the evolute
            let zz = ((e4 - p) / (1.0 - e2)).sqrt();
            let xx = p.sqrt();
            let h = zz.hypot(xx);
            let (cos_lat, sin_lat) = (xx / h, (zz / h).copysign(z));
            let horizontal = if rho > 0.0 { cos_lat / rho } else { 0.0 };
            return NVector::new(Vec3::new(horizontal * x, horizontal * y, sin_lat));
        }

        let s = e4 * p * q / 4.0;
        let r2 = r * r;
        let r3 = r * r2;
        let disc = s * (2.0 * r3 + s);
        let u = if disc >= 0.0 {
            let mut t3 = s + r3;
            t3 += disc.sqrt().copysign(t3);
            let t = t3.cbrt();
            r + t + if t != 0.0 { r2 / t } else { 0.0 }
        } else {
            let theta = (-disc).sqrt().atan2(-(s + r3));
            r + 2.0 * r * (theta / 3.0).cos()
        };
        let v = (u * u + e4 * q).sqrt();
        let uv = if u < 0.0 { e4 * q / (v - u) } else { u + v };
        let w = (e2 * (uv - q) / (2.0 * v)).max(0.0);
        let k = uv / ((uv + w * w).sqrt() + w);
        log::trace!(
            "p->n scalars: p={} q={} r={} S={} D={} u={} v={} w={} k={}",
            p, q, r, s, disc, u, v, w, k
        );

        let horizontal = k / (k + e2);
        let d = horizontal * rho;
        let c = 1.0 / d.hypot(z);
        NVector::new(Vec3::new(c * horizontal * x, c * horizontal * y, c * z))
    }
}

impl From<Vec3> for PVector {
    fn from(vec: Vec3) -> Self {
        PVector::new(vec)
    }
}
