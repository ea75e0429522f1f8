use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::{
    constants::EQUALITY_DECIMALS,
    format,
    transform,
    utility::rounded_key,
    CrsProjection,
    Error,
};

/// A location expressed in one of the supported coordinate reference
/// systems.
///
/// The two values are stored in a fixed order: first the latitude (WGS84)
/// or northing/Y (grid), then the longitude (WGS84) or easting/X (grid).
/// No range checks are made.
///
/// Two coordinates are equal when they share the projection and both values
/// agree after rounding to 14 decimal places. Hashing uses the same rounded
/// values. For a WGS84 value such as `59.330231` that means an offset of
/// `1e-15` still compares equal while `1e-14` does not.
///
/// The tolerance is effectively at the scale of a few ulps: it absorbs
/// representation noise in the last bits, not computational drift. Values
/// differing by `1e-13` compare unequal, as does a point pushed through a
/// round trip via a grid projection. Compare with an explicit distance
/// tolerance when that is what is needed. Grid values in meters are too
/// large for 14 decimals to matter, so for them equality is exact.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrsCoordinate {
    #[cfg_attr(feature = "serde", serde(alias = "crs", alias = "projection"))]
    crs_projection: CrsProjection,
    #[cfg_attr(feature = "serde", serde(alias = "latitude", alias = "y"))]
    y_latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "longitude", alias = "x"))]
    x_longitude: f64,
}

impl CrsCoordinate {
    /// Creates a coordinate in `crs_projection`.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs::{CrsCoordinate, CrsProjection};
    ///
    /// let coord = CrsCoordinate::create(CrsProjection::Sweref99Tm, 6_580_822.0, 674_032.0);
    ///
    /// assert_eq!(coord.crs_projection(), CrsProjection::Sweref99Tm);
    /// assert_eq!(coord.northing(), 6_580_822.0);
    /// assert_eq!(coord.easting(), 674_032.0);
    /// ```
    pub fn create(
        crs_projection: CrsProjection,
        y_latitude: f64,
        x_longitude: f64,
    ) -> CrsCoordinate {
        Self {
            crs_projection,
            y_latitude,
            x_longitude,
        }
    }

    /// Creates a coordinate in the projection with EPSG number `epsg`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsgNumber`] if `epsg` is not supported.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs::{CrsCoordinate, CrsProjection, Error};
    ///
    /// let coord = CrsCoordinate::create_by_epsg(3006, 60.0, 20.0).unwrap();
    /// assert_eq!(coord.crs_projection(), CrsProjection::Sweref99Tm);
    ///
    /// let invalid = CrsCoordinate::create_by_epsg(9999, 60.0, 20.0);
    /// assert_eq!(invalid, Err(Error::UnknownEpsgNumber(9999)));
    /// ```
    pub fn create_by_epsg(
        epsg: i32,
        y_latitude: f64,
        x_longitude: f64,
    ) -> Result<CrsCoordinate, Error> {
        let crs_projection = CrsProjection::from_epsg_number(epsg)?;
        Ok(Self::create(crs_projection, y_latitude, x_longitude))
    }

    /// The projection both values are expressed in.
    ///
    /// # Example
    /// ```
    /// use sweden_crs::{CrsCoordinate, CrsProjection};
    ///
    /// let coord = CrsCoordinate::create_by_epsg(3021, 6_580_994.0, 1_628_294.0).unwrap();
    /// assert_eq!(coord.crs_projection(), CrsProjection::Rt90_2_5GonV);
    /// assert!(coord.crs_projection().is_rt90());
    /// ```
    #[inline]
    pub fn crs_projection(&self) -> CrsProjection {
        self.crs_projection
    }

    /// Latitude (WGS84) or northing/Y (grid).
    #[inline]
    pub fn y_latitude(&self) -> f64 {
        self.y_latitude
    }

    /// Longitude (WGS84) or easting/X (grid).
    #[inline]
    pub fn x_longitude(&self) -> f64 {
        self.x_longitude
    }

    /// Same value as [`CrsCoordinate::y_latitude`].
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.y_latitude
    }

    /// Same value as [`CrsCoordinate::x_longitude`].
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.x_longitude
    }

    /// Same value as [`CrsCoordinate::y_latitude`].
    #[inline]
    pub fn northing(&self) -> f64 {
        self.y_latitude
    }

    /// Same value as [`CrsCoordinate::x_longitude`].
    #[inline]
    pub fn easting(&self) -> f64 {
        self.x_longitude
    }

    /// Transforms to `target`. See [`transform::transform`].
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs::{CrsCoordinate, CrsProjection};
    ///
    /// let rt90 = CrsCoordinate::create(CrsProjection::Rt90_2_5GonV, 6_580_994.0, 1_628_294.0);
    /// let wgs84 = rt90.transform(CrsProjection::Wgs84);
    ///
    /// assert!((wgs84.latitude() - 59.330231).abs() < 7e-6);
    /// assert!((wgs84.longitude() - 18.059196).abs() < 7e-6);
    /// ```
    pub fn transform(&self, target: CrsProjection) -> CrsCoordinate {
        transform::transform(self, target)
    }

    /// Transforms to the projection with EPSG number `target_epsg`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsgNumber`] if `target_epsg` is not supported.
    pub fn transform_by_epsg(&self, target_epsg: i32) -> Result<CrsCoordinate, Error> {
        transform::transform_by_epsg(self, target_epsg)
    }

    /// Renders with an explicit formatter, leaving the process-wide one alone.
    ///
    /// # Example
    /// ```
    /// use sweden_crs::{CrsCoordinate, CrsProjection};
    ///
    /// let coord = CrsCoordinate::create(CrsProjection::Sweref99Tm, 6_580_822.0, 674_032.0);
    /// let text = coord.format_with(|c| format!("{} {}", c.northing(), c.easting()));
    /// assert_eq!(text, "6580822 674032");
    /// ```
    pub fn format_with<F>(&self, formatter: F) -> String
    where
        F: Fn(&CrsCoordinate) -> String,
    {
        formatter(self)
    }

    fn equality_key(&self) -> (CrsProjection, u64, u64) {
        (
            self.crs_projection,
            rounded_key(self.y_latitude, EQUALITY_DECIMALS),
            rounded_key(self.x_longitude, EQUALITY_DECIMALS),
        )
    }
}

impl PartialEq for CrsCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.equality_key() == other.equality_key()
    }
}

impl Eq for CrsCoordinate {}

impl Hash for CrsCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality_key().hash(state);
    }
}

impl Display for CrsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format::render(self))
    }
}
