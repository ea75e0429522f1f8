use approx::assert_abs_diff_eq;
use sweden_crs::{transform, CrsCoordinate, CrsProjection};

// Locations spread over Sweden: Malmö, Göteborg, Stockholm, Umeå, Kiruna
const LOCATIONS: [(f64, f64); 5] = [
    (55.605, 13.0038),
    (57.7089, 11.9746),
    (59.330_231, 18.059_196),
    (63.8258, 20.263),
    (67.8558, 20.2253),
];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn max_difference(projection: CrsProjection) -> f64 {
    // Grid values are in meters, so 0.5 is five decimeters
    if projection.is_wgs84() { 0.000_007 } else { 0.5 }
}

fn assert_close(expected: &CrsCoordinate, actual: &CrsCoordinate) {
    assert_eq!(expected.crs_projection(), actual.crs_projection(), "{expected} vs {actual}");
    let epsilon = max_difference(expected.crs_projection());
    assert_abs_diff_eq!(expected.y_latitude(), actual.y_latitude(), epsilon = epsilon);
    assert_abs_diff_eq!(expected.x_longitude(), actual.x_longitude(), epsilon = epsilon);
}

#[test]
fn round_trip_between_all_projections() {
    init();

    for (lat, lon) in LOCATIONS {
        let wgs84 = CrsCoordinate::create(CrsProjection::Wgs84, lat, lon);

        for source in CrsProjection::all() {
            let original = wgs84.transform(*source);

            for target in CrsProjection::all() {
                let there = transform(&original, *target);
                assert_eq!(there.crs_projection(), *target);

                let back = transform(&there, *source);
                assert_close(&original, &back);
            }
        }
    }
}

#[test]
fn pivot_matches_direct_transform() {
    init();

    for (lat, lon) in LOCATIONS {
        let wgs84 = CrsCoordinate::create(CrsProjection::Wgs84, lat, lon);
        let grids = CrsProjection::all().iter().filter(|p| !p.is_wgs84());

        for source in grids.clone() {
            let original = wgs84.transform(*source);

            for target in grids.clone() {
                let direct = original.transform(*target);
                let pivot = original.transform(CrsProjection::Wgs84).transform(*target);
                assert_close(&direct, &pivot);
            }
        }
    }
}

#[test]
fn grid_output_is_millimeter_precision() {
    init();

    let wgs84 = CrsCoordinate::create(CrsProjection::Wgs84, 61.123_456_789, 15.987_654_321);
    for projection in CrsProjection::all().iter().filter(|p| !p.is_wgs84()) {
        let grid = wgs84.transform(*projection);
        for value in [grid.northing(), grid.easting()] {
            assert_abs_diff_eq!(value * 1000.0, (value * 1000.0).round(), epsilon = 1e-6);
        }
    }
}
