use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use log::debug;

use crate::{Error, ParseCoord};

const EPSG_WGS84: i32 = 4326;
const EPSG_SWEREF99_MIN: i32 = 3006;
const EPSG_SWEREF99_MAX: i32 = 3018;
const EPSG_RT90_MIN: i32 = 3019;
const EPSG_RT90_MAX: i32 = 3024;

/// The three families of coordinate reference systems in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrsCategory {
    /// Geodetic latitude/longitude
    Wgs84,
    /// The current Swedish grid: one national and twelve local zones
    Sweref99,
    /// The old Swedish grid: six local zones
    Rt90,
}

/// A supported coordinate reference system.
///
/// The set is closed: WGS84, the 13 SWEREF99 projections (EPSG 3006-3018)
/// and the 6 RT90 projections (EPSG 3019-3024). The declaration order below is
/// the enumeration order returned by [`CrsProjection::all`].
#[allow(non_camel_case_types, clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i32", try_from = "i32"))]
pub enum CrsProjection {
    /// EPSG 4326
    Wgs84,
    /// EPSG 3006, the national SWEREF99 projection
    Sweref99Tm,
    Sweref99_12_00,
    Sweref99_13_30,
    Sweref99_15_00,
    Sweref99_16_30,
    Sweref99_18_00,
    Sweref99_14_15,
    Sweref99_15_45,
    Sweref99_17_15,
    Sweref99_18_45,
    Sweref99_20_15,
    Sweref99_21_45,
    Sweref99_23_15,
    Rt90_7_5GonV,
    Rt90_5_0GonV,
    /// EPSG 3021, the RT90 zone most old Swedish maps were printed in
    Rt90_2_5GonV,
    Rt90_0_0GonV,
    Rt90_2_5GonO,
    Rt90_5_0GonO,
}

const ALL_PROJECTIONS: [CrsProjection; 20] = [
    CrsProjection::Wgs84,
    CrsProjection::Sweref99Tm,
    CrsProjection::Sweref99_12_00,
    CrsProjection::Sweref99_13_30,
    CrsProjection::Sweref99_15_00,
    CrsProjection::Sweref99_16_30,
    CrsProjection::Sweref99_18_00,
    CrsProjection::Sweref99_14_15,
    CrsProjection::Sweref99_15_45,
    CrsProjection::Sweref99_17_15,
    CrsProjection::Sweref99_18_45,
    CrsProjection::Sweref99_20_15,
    CrsProjection::Sweref99_21_45,
    CrsProjection::Sweref99_23_15,
    CrsProjection::Rt90_7_5GonV,
    CrsProjection::Rt90_5_0GonV,
    CrsProjection::Rt90_2_5GonV,
    CrsProjection::Rt90_0_0GonV,
    CrsProjection::Rt90_2_5GonO,
    CrsProjection::Rt90_5_0GonO,
];

lazy_static! {
    static ref BY_EPSG: HashMap<i32, CrsProjection> = ALL_PROJECTIONS
        .iter()
        .map(|projection| (projection.epsg_number(), *projection))
        .collect();
}

impl CrsProjection {
    /// Returns all projections, WGS84 first and then the rest ordered by
    /// EPSG number.
    ///
    /// # Example
    /// ```
    /// use sweden_crs::CrsProjection;
    ///
    /// let all = CrsProjection::all();
    /// assert_eq!(all.len(), 20);
    /// assert_eq!(all[0], CrsProjection::Wgs84);
    /// assert_eq!(all[1], CrsProjection::Sweref99Tm);
    /// assert_eq!(all[19], CrsProjection::Rt90_5_0GonO);
    /// ```
    pub fn all() -> &'static [CrsProjection] {
        &ALL_PROJECTIONS
    }

    /// Looks up the projection with the given EPSG number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsgNumber`] if no projection has that number.
    pub fn from_epsg_number(epsg: i32) -> Result<CrsProjection, Error> {
        BY_EPSG.get(&epsg).copied().ok_or_else(|| {
            debug!("no projection registered for EPSG {epsg}");
            Error::UnknownEpsgNumber(epsg)
        })
    }

    /// The EPSG number identifying this projection.
    ///
    /// # Example
    /// ```
    /// use sweden_crs::CrsProjection;
    ///
    /// assert_eq!(CrsProjection::Wgs84.epsg_number(), 4326);
    /// assert_eq!(CrsProjection::Sweref99Tm.epsg_number(), 3006);
    /// assert_eq!(CrsProjection::Rt90_2_5GonV.epsg_number(), 3021);
    /// ```
    pub fn epsg_number(&self) -> i32 {
        match self {
            CrsProjection::Wgs84 => EPSG_WGS84,
            CrsProjection::Sweref99Tm => 3006,
            CrsProjection::Sweref99_12_00 => 3007,
            CrsProjection::Sweref99_13_30 => 3008,
            CrsProjection::Sweref99_15_00 => 3009,
            CrsProjection::Sweref99_16_30 => 3010,
            CrsProjection::Sweref99_18_00 => 3011,
            CrsProjection::Sweref99_14_15 => 3012,
            CrsProjection::Sweref99_15_45 => 3013,
            CrsProjection::Sweref99_17_15 => 3014,
            CrsProjection::Sweref99_18_45 => 3015,
            CrsProjection::Sweref99_20_15 => 3016,
            CrsProjection::Sweref99_21_45 => 3017,
            CrsProjection::Sweref99_23_15 => 3018,
            CrsProjection::Rt90_7_5GonV => 3019,
            CrsProjection::Rt90_5_0GonV => 3020,
            CrsProjection::Rt90_2_5GonV => 3021,
            CrsProjection::Rt90_0_0GonV => 3022,
            CrsProjection::Rt90_2_5GonO => 3023,
            CrsProjection::Rt90_5_0GonO => 3024,
        }
    }

    /// Category derived from the EPSG number range.
    pub fn category(&self) -> CrsCategory {
        match self.epsg_number() {
            EPSG_SWEREF99_MIN..=EPSG_SWEREF99_MAX => CrsCategory::Sweref99,
            EPSG_RT90_MIN..=EPSG_RT90_MAX => CrsCategory::Rt90,
            _ => CrsCategory::Wgs84,
        }
    }

    /// `true` for the geodetic WGS84 system (EPSG 4326).
    ///
    /// # Example
    /// ```
    /// use sweden_crs::CrsProjection;
    ///
    /// assert!(CrsProjection::Wgs84.is_wgs84());
    /// assert!(!CrsProjection::Sweref99Tm.is_wgs84());
    /// ```
    pub fn is_wgs84(&self) -> bool {
        self.epsg_number() == EPSG_WGS84
    }

    /// `true` for SWEREF 99 TM and the twelve local SWEREF 99 zones (EPSG 3006-3018).
    ///
    /// # Example
    /// ```
    /// use sweden_crs::CrsProjection;
    ///
    /// assert!(CrsProjection::Sweref99Tm.is_sweref99());
    /// assert!(CrsProjection::Sweref99_23_15.is_sweref99());
    /// assert!(!CrsProjection::Rt90_7_5GonV.is_sweref99());
    /// ```
    pub fn is_sweref99(&self) -> bool {
        (EPSG_SWEREF99_MIN..=EPSG_SWEREF99_MAX).contains(&self.epsg_number())
    }

    /// `true` for the six RT90 projections (EPSG 3019-3024).
    ///
    /// # Example
    /// ```
    /// use sweden_crs::CrsProjection;
    ///
    /// assert!(CrsProjection::Rt90_2_5GonV.is_rt90());
    /// assert!(!CrsProjection::Wgs84.is_rt90());
    /// ```
    pub fn is_rt90(&self) -> bool {
        (EPSG_RT90_MIN..=EPSG_RT90_MAX).contains(&self.epsg_number())
    }

    /// Canonical uppercase name, e.g. `"SWEREF_99_TM"` or `"RT90_2_5_GON_V"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrsProjection::Wgs84 => "WGS84",
            CrsProjection::Sweref99Tm => "SWEREF_99_TM",
            CrsProjection::Sweref99_12_00 => "SWEREF_99_12_00",
            CrsProjection::Sweref99_13_30 => "SWEREF_99_13_30",
            CrsProjection::Sweref99_15_00 => "SWEREF_99_15_00",
            CrsProjection::Sweref99_16_30 => "SWEREF_99_16_30",
            CrsProjection::Sweref99_18_00 => "SWEREF_99_18_00",
            CrsProjection::Sweref99_14_15 => "SWEREF_99_14_15",
            CrsProjection::Sweref99_15_45 => "SWEREF_99_15_45",
            CrsProjection::Sweref99_17_15 => "SWEREF_99_17_15",
            CrsProjection::Sweref99_18_45 => "SWEREF_99_18_45",
            CrsProjection::Sweref99_20_15 => "SWEREF_99_20_15",
            CrsProjection::Sweref99_21_45 => "SWEREF_99_21_45",
            CrsProjection::Sweref99_23_15 => "SWEREF_99_23_15",
            CrsProjection::Rt90_7_5GonV => "RT90_7_5_GON_V",
            CrsProjection::Rt90_5_0GonV => "RT90_5_0_GON_V",
            CrsProjection::Rt90_2_5GonV => "RT90_2_5_GON_V",
            CrsProjection::Rt90_0_0GonV => "RT90_0_0_GON_V",
            CrsProjection::Rt90_2_5GonO => "RT90_2_5_GON_O",
            CrsProjection::Rt90_5_0GonO => "RT90_5_0_GON_O",
        }
    }
}

impl TryFrom<i32> for CrsProjection {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        CrsProjection::from_epsg_number(value)
    }
}

impl From<CrsProjection> for i32 {
    fn from(value: CrsProjection) -> Self {
        value.epsg_number()
    }
}

impl ParseCoord for CrsProjection {
    /// Parses either an EPSG code (`"3006"`, `"EPSG:3006"`) or a canonical
    /// name (`"SWEREF_99_TM"`, case-insensitive).
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let value = value.trim();
        let code = value
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("EPSG:"))
            .map_or(value, |_| &value[5..])
            .trim();

        if let Ok(epsg) = code.parse::<i32>() {
            return CrsProjection::from_epsg_number(epsg);
        }

        ALL_PROJECTIONS
            .iter()
            .find(|projection| projection.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| Error::UnknownProjectionName(value.to_string()))
    }
}

impl std::str::FromStr for CrsProjection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrsProjection::parse_coord(s)
    }
}

impl Display for CrsProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_epsg_ranges() {
        for projection in CrsProjection::all() {
            let flags = [projection.is_wgs84(), projection.is_sweref99(), projection.is_rt90()];
            assert_eq!(flags.iter().filter(|flag| **flag).count(), 1, "{projection}");

            let expected = match projection.epsg_number() {
                4326 => CrsCategory::Wgs84,
                3006..=3018 => CrsCategory::Sweref99,
                3019..=3024 => CrsCategory::Rt90,
                other => panic!("unexpected EPSG {other}"),
            };
            assert_eq!(projection.category(), expected);
        }
    }

    #[test]
    fn epsg_index_covers_catalog() {
        assert_eq!(BY_EPSG.len(), ALL_PROJECTIONS.len());
        for projection in CrsProjection::all() {
            assert_eq!(
                CrsProjection::from_epsg_number(projection.epsg_number()),
                Ok(*projection)
            );
        }
    }

    #[test]
    fn names_are_unique_and_uppercase() {
        let mut names = CrsProjection::all()
            .iter()
            .map(CrsProjection::as_str)
            .collect::<Vec<_>>();
        assert!(names.iter().all(|name| name.to_uppercase() == *name));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn parse_epsg_and_names() {
        assert_eq!("3006".parse::<CrsProjection>(), Ok(CrsProjection::Sweref99Tm));
        assert_eq!("EPSG:3021".parse::<CrsProjection>(), Ok(CrsProjection::Rt90_2_5GonV));
        assert_eq!("epsg: 4326".parse::<CrsProjection>(), Ok(CrsProjection::Wgs84));
        assert_eq!("sweref_99_18_00".parse::<CrsProjection>(), Ok(CrsProjection::Sweref99_18_00));
        assert_eq!(
            crate::from_str::<_, CrsProjection>("RT90_5_0_GON_O"),
            Ok(CrsProjection::Rt90_5_0GonO)
        );
        assert_eq!("9999".parse::<CrsProjection>(), Err(Error::UnknownEpsgNumber(9999)));
        assert_eq!(
            "UTM_33N".parse::<CrsProjection>(),
            Err(Error::UnknownProjectionName("UTM_33N".to_string()))
        );
    }
}
