//! The quantizer: maps a WGS-84 coordinate to a pair of grid indices with a
//! uniform metric cell size, and back.
//!
//! Earth is modeled as a sphere of radius [`EARTH_RADIUS_M`]. Rows are a
//! fixed-width latitude grid of [`LAT_BITS`] bits; columns are *not* a fixed
//! longitude grid, because a fixed `Δλ` oversamples heavily near the poles.
//! Instead, each row picks its own column count via [`columns_at_lat`], a
//! function of `cos(latitude)`, so that a column always spans roughly the
//! same east-west distance no matter how close the row is to a pole. This is
//! the "precision compensation" that makes the codec's error uniform
//! globally rather than growing without bound toward the poles.

/// Bits used to encode the row index.
pub(crate) const LAT_BITS: u32 = 22;
/// Bits used to encode the column index. This is also the maximum number of
/// columns any row can have; rows nearer the poles use fewer.
pub(crate) const LON_BITS: u32 = 23;

/// Number of latitude rows, `2^LAT_BITS`.
pub(crate) const N_LAT: u64 = 1 << LAT_BITS;
/// Maximum number of longitude columns (at the equator), `2^LON_BITS`.
pub(crate) const N_LON: u64 = 1 << LON_BITS;

/// Mean Earth radius in meters, as pinned by the codec's distance contract.
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A pair of grid indices: `row` in `[0, N_LAT)`, `col` in
/// `[0, columns_at_lat(row))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GridIndex {
    pub row: u32,
    pub col: u32,
}

/// Returns the latitude, in degrees, of the center of row `row`.
pub(crate) fn row_center_latitude(row: u32) -> f64 {
    (f64::from(row) + 0.5) * (180.0 / N_LAT as f64) - 90.0
}

/// Returns the number of longitude columns used by `row`: the column grid
/// shrinks by `cos(latitude)` so that each column keeps roughly the same
/// east-west metric width regardless of how close the row is to a pole.
///
/// Uses round-half-to-even, as required for cross-implementation parity
/// when a row center lands exactly between two integer column counts.
pub(crate) fn columns_at_lat(row: u32) -> u32 {
    let lat = row_center_latitude(row);
    let scaled = N_LON as f64 * lat.to_radians().cos();
    (scaled.round_ties_even() as u32).max(1)
}

/// Maps a validated `(latitude, longitude)` pair to grid indices.
///
/// `latitude` must be in `[-90, 90]` and `longitude` in `[-180, 180]`
/// (`180` is treated as `-180` by the caller before this is reached).
pub(crate) fn quantize(latitude: f64, longitude: f64) -> GridIndex {
    let row = ((latitude + 90.0) / 180.0 * N_LAT as f64).floor() as i64;
    let row = row.clamp(0, N_LAT as i64 - 1) as u32;

    let columns = columns_at_lat(row);
    // Column `k` spans the half-open range [k, k+1) and decodes to the
    // center k+0.5 (see dequantize), so assignment must floor the
    // continuous position, matching how `row` is floored above, not round
    // it to the nearest integer.
    let col = ((longitude + 180.0) / 360.0 * f64::from(columns)).floor() as i64;
    // Floating point fuzz at a row boundary (or longitude == 180, already
    // normalized away by callers) must wrap rather than overflow the
    // column count.
    let col = col.rem_euclid(i64::from(columns)) as u32;

    GridIndex { row, col }
}

/// Maps grid indices back to the coordinate at the center of their cell.
pub(crate) fn dequantize(index: GridIndex) -> (f64, f64) {
    let lat = row_center_latitude(index.row);

    let columns = columns_at_lat(index.row);
    let lon = (f64::from(index.col) + 0.5) / f64::from(columns) * 360.0 - 180.0;

    (lat, lon)
}
