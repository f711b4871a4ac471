//! The 8-neighborhood of a Grid9 code.

use crate::{
    code::Code,
    grid::{self, GridIndex, N_LAT},
    ParseCoord, Result,
};

/// Returns the (up to 8) codes adjacent to `code`: one step in row and/or
/// column in every direction, re-projecting the column index onto each
/// neighbor row's own column count (which may differ from `code`'s row,
/// since rows closer to a pole have fewer columns).
///
/// Rows off the top/bottom edge of the grid are skipped (no wraparound in
/// latitude). Columns wrap around in longitude. Near a pole, several
/// `(di, dj)` offsets can land on the same neighbor cell; duplicates are
/// removed. The result is in row-major order: top row west-to-east, then
/// the current row's west/east neighbors, then the bottom row.
///
/// # Errors
/// Returns [`crate::Error::InvalidCode`] if `code` is malformed.
///
/// # Example
/// ```
/// use grid9::{encode, neighbors};
///
/// let code = encode(40.7128, -74.0060, false).unwrap();
/// let n = neighbors(&code).unwrap();
/// assert!(n.len() <= 8);
/// assert!(!n.contains(&code));
/// ```
pub fn neighbors(code: &str) -> Result<Vec<String>> {
    let parsed = Code::parse_coord(code)?;
    let index = parsed.index();
    let columns_here = grid::columns_at_lat(index.row);

    let mut out = Vec::with_capacity(8);

    for di in [-1i64, 0, 1] {
        let row = i64::from(index.row) + di;
        if row < 0 || row >= N_LAT as i64 {
            continue;
        }
        let row = row as u32;
        let columns_there = grid::columns_at_lat(row);

        for dj in [-1i64, 0, 1] {
            if di == 0 && dj == 0 {
                continue;
            }

            let projected = f64::from(index.col) * f64::from(columns_there) / f64::from(columns_here);
            let col = (projected.round_ties_even() as i64 + dj).rem_euclid(i64::from(columns_there)) as u32;

            let neighbor = Code::from_index(GridIndex { row, col });
            let canonical = neighbor.canonical();
            if neighbor != parsed && !out.contains(&canonical) {
                out.push(canonical);
            }
        }
    }

    Ok(out)
}
