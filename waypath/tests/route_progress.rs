use approx::{assert_abs_diff_eq, assert_relative_eq};
use waypath::measurement::{along, length};
use waypath::polyline::{decode, encode, GOOGLE_PRECISION, OSRM_V4_PRECISION};
use waypath::slice::{line_slice, line_slice_along, nearest_point_on_line};
use waypath::{lonlat, Point, Unit};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn route() -> Vec<Point> {
    vec![
        lonlat!(13.388860, 52.517037),
        lonlat!(13.390050, 52.517450),
        lonlat!(13.391920, 52.518180),
        lonlat!(13.393420, 52.519880),
        lonlat!(13.395710, 52.521910),
        lonlat!(13.397634, 52.529407),
    ]
}

#[test]
fn progress_along_decoded_route() {
    init_logger();

    let encoded = encode(&route(), OSRM_V4_PRECISION).unwrap();
    let decoded = decode(&encoded, OSRM_V4_PRECISION).unwrap();
    assert_eq!(decoded.points(), &route()[..]);

    let total = length(&decoded, Unit::Meters);
    let position = lonlat!(13.3935, 52.5201);
    let snapped = nearest_point_on_line(&position, &decoded).unwrap();
    assert_eq!(snapped.index, 3);

    let travelled = snapped.location(&decoded, Unit::Meters);
    assert!(travelled > 0.0 && travelled < total);

    let remaining = line_slice(&position, decoded.last().unwrap(), &decoded).unwrap();
    assert_abs_diff_eq!(remaining[0], snapped.point, epsilon = 1e-12);
    assert_eq!(remaining.last(), decoded.last());
    assert_relative_eq!(
        travelled + length(&remaining, Unit::Meters),
        total,
        max_relative = 1e-9
    );

    let ahead = along(&decoded, travelled, Unit::Meters).unwrap();
    // Along-line distances are great circle ones, the projection is planar.
    assert_abs_diff_eq!(ahead, snapped.point, epsilon = 1e-7);
}

#[test]
fn slice_along_matches_along() {
    init_logger();

    let line = route();
    let total = length(&waypath::LineString::new(line.clone()), Unit::Kilometers);
    let sliced = line_slice_along(&line, total * 0.25, total * 0.75, Unit::Kilometers).unwrap();

    let start = along(&line, total * 0.25, Unit::Kilometers).unwrap();
    let stop = along(&line, total * 0.75, Unit::Kilometers).unwrap();
    assert_abs_diff_eq!(sliced[0], start, epsilon = 1e-12);
    assert_abs_diff_eq!(*sliced.last().unwrap(), stop, epsilon = 1e-12);
    assert_relative_eq!(length(&sliced, Unit::Kilometers), total * 0.5, max_relative = 1e-4);
}

#[cfg(feature = "geo-types")]
#[test]
fn geo_types_geometries() {
    use geo_types::{coord, line_string, polygon};
    use waypath::simplify::simplify;
    use waypath::{points_within, Polygon};

    init_logger();

    let line = line_string![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 2.0, y: 0.0),
        (x: 2.0, y: 5.0),
        (x: 2.0, y: 10.0),
    ];

    let simplified = simplify(&line.0, 0.5, true);
    assert_eq!(
        simplified,
        vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 }, coord! { x: 2.0, y: 10.0 }]
    );

    assert_relative_eq!(
        length(&line, Unit::Degrees),
        12.0 * Unit::Degrees.factor().to_radians(),
        max_relative = 1e-9
    );

    let sliced = line_slice(&coord! { x: 0.5, y: 1.0 }, &coord! { x: 3.0, y: 7.0 }, &line.0).unwrap();
    assert_eq!(
        sliced.points(),
        &[lonlat!(0.5, 0.0), lonlat!(1.0, 0.0), lonlat!(2.0, 0.0), lonlat!(2.0, 5.0), lonlat!(2.0, 7.0)]
    );

    let area = polygon![
        exterior: [
            (x: -1.0, y: -1.0),
            (x: 3.0, y: -1.0),
            (x: 3.0, y: 3.0),
            (x: -1.0, y: 3.0),
            (x: -1.0, y: -1.0),
        ],
        interiors: [
            [
                (x: 0.5, y: -0.5),
                (x: 1.5, y: -0.5),
                (x: 1.5, y: 0.5),
                (x: 0.5, y: 0.5),
                (x: 0.5, y: -0.5),
            ],
        ],
    ];
    assert!(area.contains_point(&coord! { x: 0.0, y: 0.0 }));
    assert!(!area.contains_point(&coord! { x: 1.0, y: 0.0 }));

    let inside = points_within(&line.0, &[area]);
    assert_eq!(inside, vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 }]);
}

#[cfg(feature = "geo-types")]
#[test]
fn distance_between_geo_types_points() {
    use waypath::measurement::distance;
    use waypath::GeoPoint;

    let a = geo_types::Point::new(-75.343, 39.984);
    let b = geo_types::Point::new(-75.534, 39.123);

    assert_abs_diff_eq!(distance(&a, &b, Unit::Kilometers), 97.15957803131901, epsilon = 1e-9);
    assert_eq!(a.lon(), -75.343);
}

#[test]
fn google_precision_round_trip() {
    let points = vec![lonlat!(-120.2, 38.5), lonlat!(-120.95, 40.7), lonlat!(-126.453, 43.252)];
    let encoded = encode(&points, GOOGLE_PRECISION).unwrap();
    assert_eq!(decode(&encoded, GOOGLE_PRECISION).unwrap().into_points(), points);
}
