#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Coordinate transformations between WGS84 and the Swedish grid systems
//! SWEREF99 (one national and twelve local projections) and RT90 (six local
//! projections).
//!
//! # Usage
//!
//! ```
//! use sweden_crs::{CrsCoordinate, CrsProjection};
//!
//! // Stockholm Central Station
//! let wgs84 = CrsCoordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
//! let sweref = wgs84.transform(CrsProjection::Sweref99Tm);
//!
//! assert!((sweref.northing() - 6_580_821.991).abs() < 0.4);
//! assert!((sweref.easting() - 674_032.357).abs() < 0.4);
//! ```

use thiserror::Error;

pub mod coordinate;
pub mod format;
pub mod projection;
pub mod transform;
pub(crate) mod utility;

pub use coordinate::CrsCoordinate;
pub use format::{reset_display_formatter, set_display_formatter};
pub use projection::{CrsCategory, CrsProjection};
pub use transform::{transform, transform_all, transform_by_epsg};

pub(crate) mod projections {
    pub mod gauss_kruger;
    pub mod parameters;
}

pub(crate) mod constants;

/// Errors returned by this crate.
///
/// Lookups, factories and transformations taking an EPSG number only ever
/// return [`Error::UnknownEpsgNumber`]. [`Error::UnknownProjectionName`] is
/// produced solely by text parsing through [`ParseCoord`], [`from_str`] or
/// [`str::parse`], and only for text that is not a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The EPSG number is not one of the supported projections.
    #[error("Could not find CrsProjection for EPSG {0}")]
    UnknownEpsgNumber(i32),
    /// The text is neither a number nor a known projection name.
    #[error("Could not find CrsProjection named {0:?}")]
    UnknownProjectionName(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Returns every supported projection: WGS84 first, then the SWEREF99
/// projections and finally the RT90 projections, each group ordered by
/// EPSG number.
pub fn list_projections() -> &'static [CrsProjection] {
    CrsProjection::all()
}

/// Looks up a projection by its EPSG number.
///
/// # Errors
///
/// Returns [`Error::UnknownEpsgNumber`] if `epsg` is not one of the
/// supported codes.
///
/// # Usage
///
/// ```
/// use sweden_crs::{projection_by_epsg, CrsProjection, Error};
///
/// assert_eq!(projection_by_epsg(3006), Ok(CrsProjection::Sweref99Tm));
/// assert_eq!(projection_by_epsg(9999), Err(Error::UnknownEpsgNumber(9999)));
/// ```
pub fn projection_by_epsg(epsg: i32) -> Result<CrsProjection, Error> {
    CrsProjection::from_epsg_number(epsg)
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
