//! End-to-end scenarios through the public API.

use approx::assert_abs_diff_eq;
use nvector::constants::EARTH_MEAN_RADIUS;
use nvector::{intersection, LonLat, NVector, NvectorError, WGS84};
use rstest::rstest;

fn nv(lon_deg: f64, lat_deg: f64) -> NVector {
    LonLat::from_degrees(lon_deg, lat_deg).unwrap().to_nvector()
}

#[test]
fn north_pole_is_valid_and_points_up() {
    let pole = LonLat::from_degrees(0.0, 90.0).unwrap().to_nvector();
    assert_abs_diff_eq!(pole.x(), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(pole.y(), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(pole.z(), 1.0, epsilon = 1e-15);
}

#[test]
fn latitude_beyond_pole_is_rejected() {
    let err = LonLat::from_degrees(0.0, 91.0).unwrap_err();
    assert_eq!(err, NvectorError::InvalidLatitude { lat: 91.0 });
    assert_eq!(err.to_string(), "invalid latitude: 91.000000");
}

#[test]
fn crossing_segments_meet_at_origin() {
    let hit = intersection(&nv(-10.0, 0.0), &nv(10.0, 0.0), &nv(0.0, -10.0), &nv(0.0, 10.0));
    let point = hit.into_result().expect("segments cross");
    let ll = point.to_lonlat();
    assert_abs_diff_eq!(ll.lon(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(ll.lat(), 0.0, epsilon = 1e-6);
}

#[rstest]
#[case(nv(0.0, 0.5), nv(0.0, 10.0))]
#[case(nv(0.0, -10.0), nv(0.0, -0.5))]
#[case(nv(20.0, -10.0), nv(20.0, 10.0))]
fn shortened_segment_reports_no_intersection(#[case] a2: NVector, #[case] b2: NVector) {
    let hit = intersection(&nv(-10.0, 0.0), &nv(10.0, 0.0), &a2, &b2);
    assert_eq!(hit.status, Err(NvectorError::NoIntersection));
    let v = hit.point.vec();
    assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
}

#[test]
fn survey_leg_round_trip() {
    // Walk a leg from Bergen and come back along the reverse bearing
    let bergen = nv(5.3221, 60.3913);
    let out_bearing = 0.7;
    let leg = 250_000.0;

    let there = bergen.forward(out_bearing, leg, EARTH_MEAN_RADIUS);
    let back_bearing = there.azimuth(&bergen, &WGS84);
    let home = there.forward(back_bearing, leg, EARTH_MEAN_RADIUS);

    // Ellipsoidal bearing against spherical travel leaves a small miss
    let miss = home.spherical_distance(&bergen, EARTH_MEAN_RADIUS);
    assert!(miss < 5_000.0, "missed home by {} m", miss);
}

#[test]
fn interpolated_midpoint_lies_on_great_circle() {
    let a = nv(-30.0, 10.0);
    let b = nv(40.0, 35.0);
    let mid = a.interpolate(&b, 0.5).normalized();
    let r = EARTH_MEAN_RADIUS;
    assert_abs_diff_eq!(
        a.spherical_distance(&mid, r),
        b.spherical_distance(&mid, r),
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        a.spherical_distance(&mid, r) + mid.spherical_distance(&b, r),
        a.spherical_distance(&b, r),
        epsilon = 1e-6
    );
}
