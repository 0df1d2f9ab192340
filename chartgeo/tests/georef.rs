use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use chartgeo::types::geo::{Projection, ProjectionSystem, WorldMercator};
use chartgeo::types::{ChartGeoTypesError, Pos};
use chartgeo::config::{GEOGRAPHIC_GEOREF_TOLERANCE, PLANAR_GEOREF_TOLERANCE};
use chartgeo::{ChartGeoError, GdalInfo, GeorefConfig, GeorefStatus, GeorefValidator};
use serde_json::{json, Value};

const WKT: &str = "PROJCRS[\"WGS 84 / World Mercator\",BASEGEOGCRS[\"WGS 84\"]]";

/// Metadata record of a raster covering `[west, south, east, north]`, the extent polygon given counter-clockwise
/// from the upper-left corner, and the planar corners offset by `(dx, dy)` per corner.
fn record(extent: [[f64; 2]; 4], offsets: [[f64; 2]; 4]) -> Value {
    let proj = WorldMercator::default();
    let [ul, ll, lr, ur] = extent.map(|c| proj.project(&Pos::from(c)));
    let corner = |p: Pos, i: usize| json!([p.x() + offsets[i][0], p.y() + offsets[i][1]]);

    json!({
        "description": "synthetic.tif",
        "coordinateSystem": {"wkt": WKT},
        "cornerCoordinates": {
            "upperLeft": corner(ul, 0),
            "lowerLeft": corner(ll, 1),
            "lowerRight": corner(lr, 2),
            "upperRight": corner(ur, 3),
            "center": [0.0, 0.0]
        },
        "wgs84Extent": {
            "type": "Polygon",
            "coordinates": [[extent[0], extent[1], extent[2], extent[3], extent[0]]]
        }
    })
}

fn info(value: Value) -> GdalInfo {
    serde_json::from_value(value).unwrap()
}

const BRITTANY: [[f64; 2]; 4] = [[-6.0, 49.0], [-6.0, 47.0], [-2.0, 47.0], [-2.0, 49.0]];

const CLOSE: [[f64; 2]; 4] = [
    [300.0, -200.0],
    [300.0, 250.0],
    [-100.0, 250.0],
    [-100.0, -200.0],
];

#[test]
fn close_corners_are_correct() {
    let _ = env_logger::builder().is_test(true).try_init();
    let validator = GeorefValidator::default();
    let info = info(record(BRITTANY, CLOSE));

    assert_abs_diff_eq!(validator.planar_distance(&info).unwrap(), 300.0, epsilon = 1e-6);
    assert_eq!(validator.classify(&info).unwrap(), GeorefStatus::Correct);
}

#[test]
fn perturbed_corner_is_incorrect() {
    let validator = GeorefValidator::default();
    let mut offsets = CLOSE;
    offsets[0][0] += 5000.0;
    let info = info(record(BRITTANY, offsets));

    assert_abs_diff_eq!(validator.planar_distance(&info).unwrap(), 2800.0, epsilon = 1e-6);
    assert_eq!(validator.classify(&info).unwrap(), GeorefStatus::Incorrect);
}

#[test]
fn tolerance_is_configurable() {
    let mut offsets = [[0.0; 2]; 4];
    offsets[2][0] = 2000.0;
    let info = info(record(BRITTANY, offsets));

    let validator = GeorefValidator::default();
    assert_abs_diff_eq!(validator.planar_distance(&info).unwrap(), 1000.0, epsilon = 1e-6);

    let looser = GeorefValidator::new(GeorefConfig {
        planar_tolerance: 1000.5,
        ..GeorefConfig::default()
    });
    assert_eq!(looser.classify(&info).unwrap(), GeorefStatus::Correct);

    let stricter = GeorefValidator::new(GeorefConfig {
        planar_tolerance: 999.5,
        ..GeorefConfig::default()
    });
    assert_eq!(stricter.classify(&info).unwrap(), GeorefStatus::Incorrect);
}

/// Record in plain numbers, the east corners moved by `shift`, for use with an identity projection.
fn shifted_record(shift: f64) -> Value {
    json!({
        "coordinateSystem": {"wkt": WKT},
        "cornerCoordinates": {
            "upperLeft": [0.0, 2000.0],
            "lowerLeft": [0.0, 0.0],
            "lowerRight": [3000.0 + shift, 0.0],
            "upperRight": [3000.0 + shift, 2000.0]
        },
        "wgs84Extent": {
            "type": "Polygon",
            "coordinates": [[[0.0, 2000.0], [0.0, 0.0], [3000.0, 0.0], [3000.0, 2000.0], [0.0, 2000.0]]]
        }
    })
}

#[test]
fn default_planar_tolerance_boundary() {
    assert_eq!(PLANAR_GEOREF_TOLERANCE, 1000.0);
    assert_eq!(
        GeorefValidator::default().config().planar_tolerance,
        PLANAR_GEOREF_TOLERANCE
    );

    let identity = GeorefValidator::new(GeorefConfig {
        projection: ProjectionSystem::LonLatDd,
        ..GeorefConfig::default()
    });
    let at_tolerance = info(shifted_record(1000.0));
    assert_eq!(identity.planar_distance(&at_tolerance).unwrap(), 1000.0);
    assert_eq!(identity.classify(&at_tolerance).unwrap(), GeorefStatus::Incorrect);
    let below = info(shifted_record(999.0));
    assert_eq!(identity.classify(&below).unwrap(), GeorefStatus::Correct);

    let validator = GeorefValidator::default();
    let east_shift = |shift: f64| {
        let mut offsets = [[0.0; 2]; 4];
        offsets[2][0] = shift;
        offsets[3][0] = shift;
        info(record(BRITTANY, offsets))
    };
    assert_eq!(validator.classify(&east_shift(999.0)).unwrap(), GeorefStatus::Correct);
    assert_eq!(validator.classify(&east_shift(1001.0)).unwrap(), GeorefStatus::Incorrect);
}

#[test]
fn default_geographic_tolerance_boundary() {
    assert_eq!(GEOGRAPHIC_GEOREF_TOLERANCE, 1e-2);

    let validator = GeorefValidator::default();
    let proj = WorldMercator::default();
    let east_shift = |degrees: f64| {
        let shift = proj.project(&Pos::lonlat(-2.0 + degrees, 47.0)).x()
            - proj.project(&Pos::lonlat(-2.0, 47.0)).x();
        let mut offsets = [[0.0; 2]; 4];
        offsets[2][0] = shift;
        offsets[3][0] = shift;
        info(record(BRITTANY, offsets))
    };

    let under = east_shift(0.0099);
    assert_abs_diff_eq!(validator.geographic_distance(&under).unwrap(), 0.0099, epsilon = 1e-9);
    assert_eq!(validator.classify_geographic(&under).unwrap(), GeorefStatus::Correct);

    let over = east_shift(0.0101);
    assert_abs_diff_eq!(validator.geographic_distance(&over).unwrap(), 0.0101, epsilon = 1e-9);
    assert_eq!(validator.classify_geographic(&over).unwrap(), GeorefStatus::Incorrect);
}

#[test]
fn extent_beyond_the_pole_is_incorrect() {
    let validator = GeorefValidator::default();
    let mut value = record(BRITTANY, CLOSE);
    value["wgs84Extent"]["coordinates"] =
        json!([[[-6.0, 95.0], [-6.0, 47.0], [-2.0, 47.0], [-2.0, 95.0], [-6.0, 95.0]]]);
    let info = info(value);

    assert!(validator.planar_distance(&info).unwrap().is_nan());
    assert_eq!(validator.classify(&info).unwrap(), GeorefStatus::Incorrect);
}

#[test]
fn raster_without_coordinate_system_is_unreferenced() {
    let validator = GeorefValidator::default();
    let mut value = record(BRITTANY, CLOSE);
    value.as_object_mut().unwrap().remove("coordinateSystem");
    assert_eq!(
        validator.classify(&info(value.clone())).unwrap(),
        GeorefStatus::Unreferenced
    );

    value["coordinateSystem"] = json!({"wkt": ""});
    assert_eq!(
        validator.classify(&info(value)).unwrap(),
        GeorefStatus::Unreferenced
    );

    // the geometry does not matter when there is no coordinate system
    assert_eq!(
        validator.classify(&GdalInfo::default()).unwrap(),
        GeorefStatus::Unreferenced
    );
}

#[test]
fn raster_crossing_the_antimeridian() {
    let validator = GeorefValidator::default();
    let extent = [[178.0, 10.0], [178.0, -10.0], [-178.0, -10.0], [-178.0, 10.0]];
    let mut value = record(extent, [[0.0; 2]; 4]);

    // planar corners of the raster continue east of the antimeridian
    let east = WorldMercator::default().project(&Pos::lonlat(182.0, 10.0)).x();
    value["cornerCoordinates"]["lowerRight"][0] = json!(east);
    value["cornerCoordinates"]["upperRight"][0] = json!(east);

    let info = info(value);
    assert!(info.gbox().unwrap().crosses_antimeridian());
    assert_eq!(validator.classify(&info).unwrap(), GeorefStatus::Correct);
}

#[test]
fn geographic_variant() {
    let validator = GeorefValidator::default();
    let close = info(record(BRITTANY, CLOSE));
    assert_eq!(
        validator.classify_geographic(&close).unwrap(),
        GeorefStatus::Correct
    );

    let mut offsets = CLOSE;
    offsets[0][0] += 5000.0;
    let far = info(record(BRITTANY, offsets));
    assert_eq!(
        validator.classify_geographic(&far).unwrap(),
        GeorefStatus::Incorrect
    );
}

#[test]
fn other_projection() {
    let validator = GeorefValidator::new(
        GeorefConfig::from_json_str(r#"{"projection": "WebMercator"}"#).unwrap(),
    );
    assert_eq!(validator.config().projection, ProjectionSystem::WebMercator);

    // corners computed with World Mercator are far off in Web Mercator
    let info = info(record(BRITTANY, CLOSE));
    assert_eq!(validator.classify(&info).unwrap(), GeorefStatus::Incorrect);
}

#[test]
fn incomplete_records_fail() {
    let validator = GeorefValidator::default();

    let mut value = record(BRITTANY, CLOSE);
    value.as_object_mut().unwrap().remove("wgs84Extent");
    assert_matches!(
        validator.classify(&info(value)),
        Err(ChartGeoError::MissingField("wgs84Extent"))
    );

    let mut value = record(BRITTANY, CLOSE);
    value["wgs84Extent"]["coordinates"] = json!([[[-6.0, 49.0], [-6.0, 47.0], [-2.0, 47.0], [-6.0, 49.0]]]);
    assert_matches!(
        validator.classify(&info(value)),
        Err(ChartGeoError::Types(ChartGeoTypesError::MalformedExtentPolygon(_)))
    );
}

#[test]
fn malformed_json_fails() {
    assert_matches!(
        GdalInfo::from_json_str("{\"size\": \"large\"}"),
        Err(ChartGeoError::Json(_))
    );
}
