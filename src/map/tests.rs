use crate::map::consts::EARTH_RADIUS_KM;
use crate::map::distance_km;
use crate::map::models::LatLng;
use std::f64::consts::PI;

const PARIS: LatLng = LatLng::new(48.8566, 2.3522);
const NAIROBI: LatLng = LatLng::new(-1.2921, 36.8219);

#[test]
fn test_distance_to_itself_is_zero() {
    for point in [
        PARIS,
        NAIROBI,
        LatLng::new(0.0, 0.0),
        LatLng::new(90.0, 0.0),
        LatLng::new(-90.0, 180.0),
        LatLng::new(12.5, -179.99),
    ] {
        assert_eq!(distance_km(point, point), 0.0, "{point:?}");
    }
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (PARIS, NAIROBI),
        (LatLng::new(69.6492, 18.9553), LatLng::new(-36.757, 144.2794)),
        (LatLng::new(0.0, 179.5), LatLng::new(0.0, -179.5)),
    ];
    for (a, b) in pairs {
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_antipodal_points_are_half_a_circumference_apart() {
    let expected = PI * EARTH_RADIUS_KM;
    let on_equator = distance_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
    assert!((on_equator - expected).abs() < 1e-6, "got {on_equator}");
    let poles = distance_km(LatLng::new(90.0, 0.0), LatLng::new(-90.0, 0.0));
    assert!((poles - expected).abs() < 1e-6, "got {poles}");
    let skewed = distance_km(LatLng::new(45.0, 10.0), LatLng::new(-45.0, -170.0));
    assert!((skewed - expected).abs() < 1e-3, "got {skewed}");
    assert!((expected - 20015.1).abs() < 0.1);
}

#[test]
fn test_rounding_overshoot_near_antipodes_is_absorbed() {
    // The raw haversine term for this pair comes out slightly above 1.
    let distance = distance_km(LatLng::new(30.3333, -163.497), LatLng::new(-30.3333, 16.503));

    assert!(!distance.is_nan());
    assert!((distance - PI * EARTH_RADIUS_KM).abs() < 1e-3, "got {distance}");
}

#[test]
fn test_known_distance() {
    let distance = distance_km(PARIS, NAIROBI);
    assert!((distance - 6483.9).abs() < 1.0, "got {distance}");
}

#[test]
fn test_distance_across_antimeridian() {
    let distance = distance_km(LatLng::new(0.0, 179.5), LatLng::new(0.0, -179.5));
    assert!((distance - 111.19).abs() < 0.1, "got {distance}");
}

#[test]
fn test_coordinates_validation() {
    assert!(PARIS.is_valid());
    assert!(LatLng::new(-90.0, 180.0).is_valid());
    assert!(!LatLng::new(90.5, 0.0).is_valid());
    assert!(!LatLng::new(0.0, -180.1).is_valid());
    assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    assert!(!LatLng::new(0.0, f64::INFINITY).is_valid());
}

#[test]
fn test_coordinates_labels() {
    assert_eq!(PARIS.lat_lng_label(4), "48.8566, 2.3522");
    assert_eq!(PARIS.lng_lat_label(2), "2.35, 48.86");
}
