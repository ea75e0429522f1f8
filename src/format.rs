//! Text rendering of [`CrsCoordinate`].
//!
//! [`CrsCoordinate`]'s `Display` implementation renders through a
//! process-wide formatter. Until [`set_display_formatter`] is called, and
//! again after [`reset_display_formatter`], that formatter is
//! [`default_format`]:
//!
//! ```text
//! Coordinate [ Latitude: 59.330231 , Longitude: 18.059196 , CRS: WGS84(EPSG:4326) ]
//! Coordinate [ Y: 6579457.649 , X: 153369.673 , CRS: SWEREF_99_18_00(EPSG:3011) ]
//! ```
//!
//! The setting is global for the whole process and lasts until it is
//! replaced. Concurrent installs are last-writer-wins. The lock below only
//! keeps the swap memory safe; the formatter never influences any
//! transformation. Code that needs a specific rendering without touching
//! global state should call [`CrsCoordinate::format_with`] instead.

use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;
use log::debug;

use crate::{CrsCoordinate, ThisOrThat};

type DisplayFormatter = Arc<dyn Fn(&CrsCoordinate) -> String + Send + Sync>;

lazy_static! {
    static ref FORMATTER: RwLock<Option<DisplayFormatter>> = RwLock::new(None);
}

/// Installs `formatter` as the process-wide rendering used by `Display`.
///
/// # Usage
///
/// ```
/// use sweden_crs::{reset_display_formatter, set_display_formatter, CrsCoordinate, CrsProjection};
///
/// set_display_formatter(|c: &CrsCoordinate| format!("{} , {}", c.x_longitude(), c.y_latitude()));
/// let coord = CrsCoordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
/// assert_eq!(coord.to_string(), "18.059196 , 59.330231");
///
/// reset_display_formatter();
/// assert!(coord.to_string().starts_with("Coordinate [ Latitude: 59.330231"));
/// ```
pub fn set_display_formatter<F>(formatter: F)
where
    F: Fn(&CrsCoordinate) -> String + Send + Sync + 'static,
{
    debug!("installing custom coordinate display formatter");
    *FORMATTER.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(formatter));
}

/// Restores [`default_format`] as the process-wide rendering.
pub fn reset_display_formatter() {
    debug!("restoring default coordinate display formatter");
    *FORMATTER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The built-in rendering.
pub fn default_format(coordinate: &CrsCoordinate) -> String {
    let projection = coordinate.crs_projection();
    let (y_label, x_label) = projection.is_wgs84().ternary(("Latitude", "Longitude"), ("Y", "X"));

    let mut buf = ryu::Buffer::new();
    let y = buf.format(coordinate.y_latitude()).to_string();
    let mut buf = ryu::Buffer::new();
    let x = buf.format(coordinate.x_longitude());

    format!(
        "Coordinate [ {y_label}: {y} , {x_label}: {x} , CRS: {}(EPSG:{}) ]",
        projection.as_str(),
        projection.epsg_number(),
    )
}

pub(crate) fn render(coordinate: &CrsCoordinate) -> String {
    // Clone out of the lock so a formatter can never deadlock against an install
    let installed = FORMATTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match installed {
        Some(formatter) => formatter(coordinate),
        None => default_format(coordinate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CrsProjection;

    #[test]
    fn default_format_grid() {
        let coord =
            CrsCoordinate::create(CrsProjection::Sweref99_18_00, 6_579_457.649, 153_369.673);
        assert_eq!(
            default_format(&coord),
            "Coordinate [ Y: 6579457.649 , X: 153369.673 , CRS: SWEREF_99_18_00(EPSG:3011) ]"
        );
    }

    #[test]
    fn default_format_wgs84() {
        let coord = CrsCoordinate::create(CrsProjection::Wgs84, 59.330_231, 18.059_196);
        assert_eq!(
            default_format(&coord),
            "Coordinate [ Latitude: 59.330231 , Longitude: 18.059196 , CRS: WGS84(EPSG:4326) ]"
        );
    }
}
