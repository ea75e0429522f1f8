use crate::{
    constants::{
        GRS80_A, GRS80_F, SWEREF99_LOCAL_FALSE_EASTING, SWEREF99_LOCAL_K0,
        SWEREF99_TM_FALSE_EASTING, SWEREF99_TM_K0,
    },
    CrsProjection,
};

/// Ellipsoid and projection constants of one Swedish grid projection.
///
/// The RT90 constants are the Lantmäteriet set fitted to GRS 80, which
/// removes the Bessel/GRS 80 difference so WGS84 input can be projected
/// directly. Bessel-based RT90 (lat/lon read off old maps) is not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ProjectionParameters {
    /// Semi-major axis of the ellipsoid
    pub axis: f64,
    /// Flattening of the ellipsoid
    pub flattening: f64,
    /// Central meridian in degrees, `None` when unset
    pub central_meridian: Option<f64>,
    /// Scale on the central meridian
    pub scale: f64,
    pub false_northing: f64,
    pub false_easting: f64,
}

impl ProjectionParameters {
    /// GRS 80 ellipsoid with no projection chosen yet.
    pub(crate) fn unset() -> ProjectionParameters {
        Self {
            axis: GRS80_A,
            flattening: GRS80_F,
            central_meridian: None,
            scale: 1.,
            false_northing: 0.,
            false_easting: 0.,
        }
    }

    fn rt90(
        central_meridian: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> ProjectionParameters {
        Self {
            central_meridian: Some(central_meridian),
            scale,
            false_northing,
            false_easting,
            ..Self::unset()
        }
    }

    fn sweref99_local(central_meridian: f64) -> ProjectionParameters {
        Self {
            central_meridian: Some(central_meridian),
            scale: SWEREF99_LOCAL_K0,
            false_easting: SWEREF99_LOCAL_FALSE_EASTING,
            ..Self::unset()
        }
    }

    /// Parameters for a grid projection. WGS84 is geodetic and has none.
    #[allow(clippy::unreadable_literal)]
    pub(crate) fn for_projection(projection: CrsProjection) -> Option<ProjectionParameters> {
        let params = match projection {
            CrsProjection::Wgs84 => return None,

            CrsProjection::Rt90_7_5GonV => {
                Self::rt90(11. + 18.375 / 60., 1.000006000000, -667.282, 1500025.141)
            }
            CrsProjection::Rt90_5_0GonV => {
                Self::rt90(13. + 33.376 / 60., 1.000005800000, -667.130, 1500044.695)
            }
            CrsProjection::Rt90_2_5GonV => {
                let central_meridian = 15. + 48. / 60. + 22.624306 / 3600.;
                Self::rt90(central_meridian, 1.00000561024, -667.711, 1500064.274)
            }
            CrsProjection::Rt90_0_0GonV => {
                Self::rt90(18. + 3.378 / 60., 1.000005400000, -668.844, 1500083.521)
            }
            CrsProjection::Rt90_2_5GonO => {
                Self::rt90(20. + 18.379 / 60., 1.000005200000, -670.706, 1500102.765)
            }
            CrsProjection::Rt90_5_0GonO => {
                Self::rt90(22. + 33.380 / 60., 1.000004900000, -672.557, 1500121.846)
            }

            CrsProjection::Sweref99Tm => Self {
                central_meridian: Some(15.00),
                scale: SWEREF99_TM_K0,
                false_easting: SWEREF99_TM_FALSE_EASTING,
                ..Self::unset()
            },
            CrsProjection::Sweref99_12_00 => Self::sweref99_local(12.00),
            CrsProjection::Sweref99_13_30 => Self::sweref99_local(13.50),
            CrsProjection::Sweref99_15_00 => Self::sweref99_local(15.00),
            CrsProjection::Sweref99_16_30 => Self::sweref99_local(16.50),
            CrsProjection::Sweref99_18_00 => Self::sweref99_local(18.00),
            CrsProjection::Sweref99_14_15 => Self::sweref99_local(14.25),
            CrsProjection::Sweref99_15_45 => Self::sweref99_local(15.75),
            CrsProjection::Sweref99_17_15 => Self::sweref99_local(17.25),
            CrsProjection::Sweref99_18_45 => Self::sweref99_local(18.75),
            CrsProjection::Sweref99_20_15 => Self::sweref99_local(20.25),
            CrsProjection::Sweref99_21_45 => Self::sweref99_local(21.75),
            CrsProjection::Sweref99_23_15 => Self::sweref99_local(23.25),
        };

        Some(params)
    }
}
