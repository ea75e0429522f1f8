use std::{collections::HashMap, f64::consts::PI};

use lazy_static::lazy_static;
use log::trace;

use crate::{
    constants::GRID_DECIMALS,
    projections::parameters::ProjectionParameters,
    utility::GeoMath,
    CrsProjection,
};

// ================================
// Gauss-Krüger (Transverse Mercator), Krüger's formulas
// ================================

lazy_static! {
    static ref GAUSS_KRUGER: HashMap<CrsProjection, GaussKruger> = CrsProjection::all()
        .iter()
        .filter_map(|projection| {
            ProjectionParameters::for_projection(*projection)
                .map(|params| (*projection, GaussKruger::new(params)))
        })
        .collect();
}

/// Ellipsoid-derived series coefficients shared by both directions.
struct Ellipsoid {
    e2: f64,
    n: f64,
    a_roof: f64,
}

impl Ellipsoid {
    fn new(axis: f64, flattening: f64) -> Ellipsoid {
        let e2 = flattening * (2.0 - flattening);
        let n = flattening / (2.0 - flattening);
        let a_roof = axis / (1.0 + n) * (1.0 + n * n / 4.0 + n * n * n * n / 64.0);

        Self { e2, n, a_roof }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct GaussKruger {
    params: ProjectionParameters,
}

impl GaussKruger {
    pub fn new(params: ProjectionParameters) -> GaussKruger {
        Self { params }
    }

    /// Projection engine for a grid projection, `None` for WGS84.
    pub fn for_projection(projection: CrsProjection) -> Option<&'static GaussKruger> {
        GAUSS_KRUGER.get(&projection)
    }

    /// Geodetic latitude/longitude in degrees to grid northing/easting in
    /// meters, rounded to millimeters.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn geodetic_to_grid(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let p = &self.params;
        let ProjectionParameters { scale, false_northing, false_easting, .. } = *p;
        let central_meridian = p.central_meridian.unwrap_or_default();

        let Ellipsoid { e2, n, a_roof } = Ellipsoid::new(p.axis, p.flattening);
        let a = e2;
        let b = (5.0 * e2 * e2 - e2 * e2 * e2) / 6.0;
        let c = (104.0 * e2 * e2 * e2 - 45.0 * e2 * e2 * e2 * e2) / 120.0;
        let d = (1237.0 * e2 * e2 * e2 * e2) / 1260.0;
        let beta1 =
            n / 2.0 - 2.0 * n * n / 3.0 + 5.0 * n * n * n / 16.0 + 41.0 * n * n * n * n / 180.0;
        let beta2 = 13.0 * n * n / 48.0 - 3.0 * n * n * n / 5.0 + 557.0 * n * n * n * n / 1440.0;
        let beta3 = 61.0 * n * n * n / 240.0 - 103.0 * n * n * n * n / 140.0;
        let beta4 = 49561.0 * n * n * n * n / 161_280.0;

        let deg_to_rad = PI / 180.0;
        let phi = latitude * deg_to_rad;
        let lambda = longitude * deg_to_rad;
        let lambda_zero = central_meridian * deg_to_rad;

        let sin_phi = phi.sin();
        let phi_star = phi - sin_phi * phi.cos() * (a
            + b * sin_phi.powi(2)
            + c * sin_phi.powi(4)
            + d * sin_phi.powi(6));
        let delta_lambda = lambda - lambda_zero;
        let xi_prim = (phi_star.tan() / delta_lambda.cos()).atan();
        let eta_prim = (phi_star.cos() * delta_lambda.sin()).atanh_ln();

        let x = scale * a_roof * (xi_prim
            + beta1 * (2.0 * xi_prim).sin() * (2.0 * eta_prim).cosh_exp()
            + beta2 * (4.0 * xi_prim).sin() * (4.0 * eta_prim).cosh_exp()
            + beta3 * (6.0 * xi_prim).sin() * (6.0 * eta_prim).cosh_exp()
            + beta4 * (8.0 * xi_prim).sin() * (8.0 * eta_prim).cosh_exp())
            + false_northing;
        let y = scale * a_roof * (eta_prim
            + beta1 * (2.0 * xi_prim).cos() * (2.0 * eta_prim).sinh_exp()
            + beta2 * (4.0 * xi_prim).cos() * (4.0 * eta_prim).sinh_exp()
            + beta3 * (6.0 * xi_prim).cos() * (6.0 * eta_prim).sinh_exp()
            + beta4 * (8.0 * xi_prim).cos() * (8.0 * eta_prim).sinh_exp())
            + false_easting;

        let (northing, easting) = (x.round_to(GRID_DECIMALS), y.round_to(GRID_DECIMALS));
        trace!("geodetic ({latitude}, {longitude}) -> grid ({northing}, {easting})");

        (northing, easting)
    }

    /// Grid northing/easting in meters to geodetic latitude/longitude in
    /// degrees.
    ///
    /// A parameter set without a central meridian yields `(0.0, 0.0)`.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn grid_to_geodetic(&self, northing: f64, easting: f64) -> (f64, f64) {
        let p = &self.params;
        let Some(central_meridian) = p.central_meridian else {
            trace!("grid_to_geodetic called without a central meridian");
            return (0.0, 0.0);
        };
        let ProjectionParameters { scale, false_northing, false_easting, .. } = *p;

        let Ellipsoid { e2, n, a_roof } = Ellipsoid::new(p.axis, p.flattening);
        let delta1 = n / 2.0 - 2.0 * n * n / 3.0 + 37.0 * n * n * n / 96.0 - n * n * n * n / 360.0;
        let delta2 = n * n / 48.0 + n * n * n / 15.0 - 437.0 * n * n * n * n / 1440.0;
        let delta3 = 17.0 * n * n * n / 480.0 - 37.0 * n * n * n * n / 840.0;
        let delta4 = 4397.0 * n * n * n * n / 161_280.0;

        let a_star = e2 + e2 * e2 + e2 * e2 * e2 + e2 * e2 * e2 * e2;
        let b_star = -(7.0 * e2 * e2 + 17.0 * e2 * e2 * e2 + 30.0 * e2 * e2 * e2 * e2) / 6.0;
        let c_star = (224.0 * e2 * e2 * e2 + 889.0 * e2 * e2 * e2 * e2) / 120.0;
        let d_star = -(4279.0 * e2 * e2 * e2 * e2) / 1260.0;

        let deg_to_rad = PI / 180.0;
        let lambda_zero = central_meridian * deg_to_rad;
        let xi = (northing - false_northing) / (scale * a_roof);
        let eta = (easting - false_easting) / (scale * a_roof);

        let xi_prim = xi
            - delta1 * (2.0 * xi).sin() * (2.0 * eta).cosh_exp()
            - delta2 * (4.0 * xi).sin() * (4.0 * eta).cosh_exp()
            - delta3 * (6.0 * xi).sin() * (6.0 * eta).cosh_exp()
            - delta4 * (8.0 * xi).sin() * (8.0 * eta).cosh_exp();
        let eta_prim = eta
            - delta1 * (2.0 * xi).cos() * (2.0 * eta).sinh_exp()
            - delta2 * (4.0 * xi).cos() * (4.0 * eta).sinh_exp()
            - delta3 * (6.0 * xi).cos() * (6.0 * eta).sinh_exp()
            - delta4 * (8.0 * xi).cos() * (8.0 * eta).sinh_exp();

        let phi_star = (xi_prim.sin() / eta_prim.cosh_exp()).asin();
        let delta_lambda = (eta_prim.sinh_exp() / xi_prim.cos()).atan();
        let lon_radian = lambda_zero + delta_lambda;
        let sin_phi_star = phi_star.sin();
        let lat_radian = phi_star + sin_phi_star * phi_star.cos() * (a_star
            + b_star * sin_phi_star.powi(2)
            + c_star * sin_phi_star.powi(4)
            + d_star * sin_phi_star.powi(6));

        let (latitude, longitude) = (lat_radian * 180.0 / PI, lon_radian * 180.0 / PI);
        trace!("grid ({northing}, {easting}) -> geodetic ({latitude}, {longitude})");

        (latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    // Stockholm Central Station
    const STOCKHOLM_LAT: f64 = 59.330_231;
    const STOCKHOLM_LON: f64 = 18.059_196;
    const STOCKHOLM_SWEREF99TM_NORTHING: f64 = 6_580_822.;
    const STOCKHOLM_SWEREF99TM_EASTING: f64 = 674_032.;

    fn sweref99_tm() -> &'static GaussKruger {
        GaussKruger::for_projection(CrsProjection::Sweref99Tm).unwrap()
    }

    #[test]
    fn geodetic_to_grid_sweref99_tm() {
        let (northing, easting) = sweref99_tm().geodetic_to_grid(STOCKHOLM_LAT, STOCKHOLM_LON);

        // Max difference is around 0.357
        assert_abs_diff_eq!(northing, STOCKHOLM_SWEREF99TM_NORTHING, epsilon = 0.4);
        assert_abs_diff_eq!(easting, STOCKHOLM_SWEREF99TM_EASTING, epsilon = 0.4);
        assert_abs_diff_eq!(northing, 6_580_821.991, epsilon = 0.002);
        assert_abs_diff_eq!(easting, 674_032.357, epsilon = 0.002);
    }

    #[test]
    fn grid_to_geodetic_sweref99_tm() {
        let (lat, lon) = sweref99_tm()
            .grid_to_geodetic(STOCKHOLM_SWEREF99TM_NORTHING, STOCKHOLM_SWEREF99TM_EASTING);

        // Max difference is around 6.26e-6
        assert_abs_diff_eq!(lat, STOCKHOLM_LAT, epsilon = 1e-5);
        assert_abs_diff_eq!(lon, STOCKHOLM_LON, epsilon = 1e-5);
    }

    #[test]
    fn grid_output_is_millimeter_rounded() {
        let (northing, easting) = sweref99_tm().geodetic_to_grid(62.5, 16.25);
        assert_abs_diff_eq!(northing * 1000.0, (northing * 1000.0).round(), epsilon = 1e-6);
        assert_abs_diff_eq!(easting * 1000.0, (easting * 1000.0).round(), epsilon = 1e-6);
    }

    #[test]
    fn central_meridian_maps_to_false_easting() {
        for projection in CrsProjection::all().iter().filter(|p| !p.is_wgs84()) {
            let params = ProjectionParameters::for_projection(*projection).unwrap();
            let engine = GaussKruger::for_projection(*projection).unwrap();
            let (_, easting) = engine.geodetic_to_grid(60.0, params.central_meridian.unwrap());
            assert_abs_diff_eq!(easting, params.false_easting, epsilon = 0.001);
        }
    }

    #[test]
    fn unset_parameters_give_origin() {
        let engine = GaussKruger::new(ProjectionParameters::unset());
        assert_eq!(engine.grid_to_geodetic(6_580_822.0, 674_032.0), (0.0, 0.0));
    }

    #[test]
    fn wgs84_has_no_engine() {
        assert!(GaussKruger::for_projection(CrsProjection::Wgs84).is_none());
        assert_eq!(GAUSS_KRUGER.len(), 19);
    }
}
