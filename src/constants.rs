// GRS 80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS 80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// SWEREF 99 TM central scale factor
pub(crate) const SWEREF99_TM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const SWEREF99_TM_FALSE_EASTING: f64 = 500_000.;
// SWEREF 99 local zones
pub(crate) const SWEREF99_LOCAL_K0: f64 = 1.;
pub(crate) const SWEREF99_LOCAL_FALSE_EASTING: f64 = 150_000.;

// Number of decimals kept in projected grid output (millimeters)
pub(crate) const GRID_DECIMALS: i32 = 3;
// Number of decimals compared by coordinate equality and hashing
pub(crate) const EQUALITY_DECIMALS: i32 = 14;
