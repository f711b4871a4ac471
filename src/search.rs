//! Bounded-radius search: enumerate the Grid9 codes covering a disc.

use crate::{
    coordinate::Coordinate,
    grid::{self, GridIndex, EARTH_RADIUS_M, N_LAT},
    Code, Error, Result,
};

fn row_step_m() -> f64 {
    (180.0 / grid::N_LAT as f64).to_radians() * EARTH_RADIUS_M
}

fn col_metric_width_m(row: u32) -> f64 {
    let columns = grid::columns_at_lat(row);
    (360.0 / f64::from(columns)).to_radians()
        * EARTH_RADIUS_M
        * grid::row_center_latitude(row).to_radians().cos()
}

/// The column index of `longitude` within a row that has `columns` columns,
/// using the same floor-based assignment as [`grid::quantize`].
fn col_for_lon(longitude: f64, columns: u32) -> u32 {
    let col = ((longitude + 180.0) / 360.0 * f64::from(columns)).floor() as i64;
    col.rem_euclid(i64::from(columns)) as u32
}

/// Returns the Grid9 codes whose cell centers fall within `radius_m` meters
/// of `(latitude, longitude)`, scanning in row-major, west-to-east order and
/// stopping once `max_results` codes have been emitted (`None` means
/// unbounded).
///
/// # Errors
/// Returns [`Error::InvalidLatitude`]/[`Error::InvalidLongitude`] if the
/// center coordinate is out of range, or [`Error::InvalidArgument`] if
/// `radius_m` is negative or non-finite.
///
/// # Example
/// ```
/// use grid9::find_nearby;
///
/// let nearby = find_nearby(40.7128, -74.0060, 200.0, None).unwrap();
/// assert!(!nearby.is_empty());
/// for code in &nearby {
///     assert!(grid9::is_valid(code));
/// }
/// ```
pub fn find_nearby(
    latitude: f64,
    longitude: f64,
    radius_m: f64,
    max_results: Option<usize>,
) -> Result<Vec<String>> {
    let center = Coordinate::create(latitude, longitude)?;
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "radius_m {radius_m} must be a non-negative, finite number of meters"
        )));
    }

    let limit = max_results.unwrap_or(usize::MAX);
    if limit == 0 {
        return Ok(Vec::new());
    }

    let center_index = grid::quantize(center.latitude(), center.longitude());

    let delta_row = (radius_m / row_step_m()).ceil() as i64;
    let row_lo = (i64::from(center_index.row) - delta_row).max(0);
    let row_hi = (i64::from(center_index.row) + delta_row).min(N_LAT as i64 - 1);

    let mut results = Vec::new();

    for row in row_lo..=row_hi {
        let row = row as u32;
        let columns = grid::columns_at_lat(row);
        let width = col_metric_width_m(row);

        // A near-zero column width only happens this close to a pole where
        // a full sweep of that row's (few) columns is cheap anyway.
        let delta_col = if width > 0.0 {
            ((radius_m / width).ceil() as i64).min(i64::from(columns))
        } else {
            i64::from(columns)
        };

        let center_col = col_for_lon(center.longitude(), columns);

        for dj in -delta_col..=delta_col {
            let col = (i64::from(center_col) + dj).rem_euclid(i64::from(columns)) as u32;
            let candidate = Code::from_index(GridIndex { row, col });
            let (lat, lon) = grid::dequantize(candidate.index());
            let point = Coordinate::new_unchecked(lat, lon);

            if center.haversine(&point) <= radius_m {
                results.push(candidate.canonical());
                if results.len() >= limit {
                    return Ok(results);
                }
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_returns_only_the_center_cell() {
        let found = find_nearby(40.7128, -74.0060, 0.0, None).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn small_radius_stays_small() {
        let found = find_nearby(40.7128, -74.0060, 50.0, None).unwrap();
        assert!(!found.is_empty());
        assert!(found.len() < 500);
    }

    #[test]
    fn max_results_caps_output() {
        let found = find_nearby(40.7128, -74.0060, 5_000.0, Some(3)).unwrap();
        assert!(found.len() <= 3);
    }

    #[test]
    fn all_results_are_within_radius() {
        let radius = 300.0;
        let found = find_nearby(51.5074, -0.1278, radius, None).unwrap();
        for code in &found {
            let d = crate::distance(
                &Code::from_coordinate(Coordinate::create(51.5074, -0.1278).unwrap()).canonical(),
                code,
            )
            .unwrap();
            assert!(d <= radius + 1e-6);
        }
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(find_nearby(0.0, 0.0, -1.0, None).is_err());
    }

    #[test]
    fn non_finite_radius_is_rejected() {
        assert!(find_nearby(0.0, 0.0, f64::NAN, None).is_err());
        assert!(find_nearby(0.0, 0.0, f64::INFINITY, None).is_err());
    }

    #[test]
    fn zero_max_results_returns_empty() {
        let found = find_nearby(0.0, 0.0, 1000.0, Some(0)).unwrap();
        assert!(found.is_empty());
    }
}
