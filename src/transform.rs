use log::trace;

use crate::{projections::gauss_kruger::GaussKruger, CrsCoordinate, CrsProjection, Error};

/// Transforms `coordinate` to `target`.
///
/// Grid coordinates are first projected back to WGS84 and then forward into
/// the target grid, so any pair of catalog projections is supported. A
/// coordinate already in `target` is returned unchanged.
///
/// # Usage
///
/// ```
/// use sweden_crs::{transform, CrsCoordinate, CrsProjection};
///
/// let wgs84 = CrsCoordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
/// let rt90 = transform(&wgs84, CrsProjection::Rt90_2_5GonV);
///
/// assert!((rt90.northing() - 6_580_994.18).abs() < 0.4);
/// assert!((rt90.easting() - 1_628_293.886).abs() < 0.4);
/// ```
pub fn transform(coordinate: &CrsCoordinate, target: CrsProjection) -> CrsCoordinate {
    let source = coordinate.crs_projection();
    if source == target {
        trace!("{source} -> {target}: identity");
        return *coordinate;
    }

    let (latitude, longitude) = match GaussKruger::for_projection(source) {
        Some(engine) => engine.grid_to_geodetic(coordinate.y_latitude(), coordinate.x_longitude()),
        None => (coordinate.y_latitude(), coordinate.x_longitude()),
    };

    let (y, x) = match GaussKruger::for_projection(target) {
        Some(engine) => engine.geodetic_to_grid(latitude, longitude),
        None => (latitude, longitude),
    };

    trace!(
        "{source} -> {target}: ({}, {}) -> ({y}, {x})",
        coordinate.y_latitude(),
        coordinate.x_longitude()
    );
    CrsCoordinate::create(target, y, x)
}

/// Transforms `coordinate` to the projection with EPSG number `target_epsg`.
///
/// # Errors
///
/// Returns [`Error::UnknownEpsgNumber`] before any computation if
/// `target_epsg` is not supported.
pub fn transform_by_epsg(
    coordinate: &CrsCoordinate,
    target_epsg: i32,
) -> Result<CrsCoordinate, Error> {
    let target = CrsProjection::from_epsg_number(target_epsg)?;
    Ok(transform(coordinate, target))
}

/// Transforms every coordinate of `coordinates` to `target`.
///
/// # Usage
///
/// ```
/// use sweden_crs::{transform_all, CrsCoordinate, CrsProjection};
///
/// let points = [
///     CrsCoordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196),
///     CrsCoordinate::create(CrsProjection::Sweref99Tm, 6_580_822.0, 674_032.0),
/// ];
/// let converted = transform_all(&points, CrsProjection::Rt90_2_5GonV).collect::<Vec<_>>();
///
/// assert_eq!(converted.len(), 2);
/// assert!(converted.iter().all(|c| c.crs_projection() == CrsProjection::Rt90_2_5GonV));
/// ```
pub fn transform_all<'a, I>(
    coordinates: I,
    target: CrsProjection,
) -> impl Iterator<Item = CrsCoordinate> + 'a
where
    I: IntoIterator<Item = &'a CrsCoordinate>,
    I::IntoIter: 'a,
{
    coordinates
        .into_iter()
        .map(move |coordinate| transform(coordinate, target))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn identity_returns_input_unchanged() {
        let coord = CrsCoordinate::create(
            CrsProjection::Rt90_2_5GonV,
            6_580_994.123_456_7,
            1_628_294.987_654_3,
        );
        let same = transform(&coord, CrsProjection::Rt90_2_5GonV);
        assert_eq!(same.y_latitude().to_bits(), coord.y_latitude().to_bits());
        assert_eq!(same.x_longitude().to_bits(), coord.x_longitude().to_bits());
    }

    #[test]
    fn grid_to_grid_goes_through_wgs84() {
        let sweref = CrsCoordinate::create(CrsProjection::Sweref99Tm, 6_580_822.0, 674_032.0);
        let direct = transform(&sweref, CrsProjection::Rt90_2_5GonV);
        let wgs84 = transform(&sweref, CrsProjection::Wgs84);
        let pivot = transform(&wgs84, CrsProjection::Rt90_2_5GonV);

        assert_eq!(direct.crs_projection(), CrsProjection::Rt90_2_5GonV);
        assert_abs_diff_eq!(direct.northing(), pivot.northing(), epsilon = 1e-9);
        assert_abs_diff_eq!(direct.easting(), pivot.easting(), epsilon = 1e-9);
    }

    #[test]
    fn unknown_target_epsg_fails() {
        let coord = CrsCoordinate::create(CrsProjection::Wgs84, 59.330_231, 18.059_196);
        assert_eq!(transform_by_epsg(&coord, 9999), Err(Error::UnknownEpsgNumber(9999)));
        assert_eq!(
            transform_by_epsg(&coord, 4326).map(|c| c.crs_projection()),
            Ok(CrsProjection::Wgs84)
        );
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        let coord = CrsCoordinate::create(CrsProjection::Wgs84, 123.0, -400.0);
        let projected = transform(&coord, CrsProjection::Sweref99Tm);
        assert_eq!(projected.crs_projection(), CrsProjection::Sweref99Tm);
    }
}
