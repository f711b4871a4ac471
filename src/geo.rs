//! Geometric operations defined directly over codes and coordinates:
//! great-circle distance and per-location precision estimation.

use crate::{
    coordinate::Coordinate,
    grid::{self, N_LAT},
    Code, ParseCoord, Result,
};

/// The half-cell error bounds at a given location, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionEstimate {
    /// Half the east-west cell width at this latitude, in meters.
    pub x_error_m: f64,
    /// Half the north-south cell height (constant everywhere), in meters.
    pub y_error_m: f64,
    /// The diagonal of the error rectangle: `sqrt(x^2 + y^2)`.
    pub total_error_m: f64,
}

/// The great-circle distance between the cell centers of two Grid9 codes,
/// in meters, via the haversine formula.
///
/// This is the distance between the decoded cell centers, not between
/// whatever original coordinates (if any) produced the two codes.
///
/// # Errors
/// Returns [`crate::Error::InvalidCode`] if either code is malformed.
///
/// # Example
/// ```
/// use grid9::{encode, distance};
///
/// let nyc = encode(40.7128, -74.0060, false).unwrap();
/// let london = encode(51.5074, -0.1278, false).unwrap();
/// let d = distance(&nyc, &london).unwrap();
/// assert!(d > 5_500_000.0 && d < 5_600_000.0);
///
/// assert_eq!(distance(&nyc, &nyc).unwrap(), 0.0);
/// ```
pub fn distance(code1: &str, code2: &str) -> Result<f64> {
    let a: Code = Code::parse_coord(code1)?;
    let b: Code = Code::parse_coord(code2)?;

    Ok(a.to_coordinate().haversine(&b.to_coordinate()))
}

/// Estimates the positional error at `(latitude, longitude)`: how far the
/// cell center can be from any point actually inside that cell.
///
/// # Errors
/// Returns [`crate::Error::InvalidLatitude`]/[`crate::Error::InvalidLongitude`]
/// if the coordinate is out of range.
///
/// # Example
/// ```
/// use grid9::precision;
///
/// let p = precision(40.7128, -74.0060).unwrap();
/// assert!(p.total_error_m > 0.0 && p.total_error_m < 3.5);
/// ```
pub fn precision(latitude: f64, longitude: f64) -> Result<PrecisionEstimate> {
    let coord = Coordinate::create(latitude, longitude)?;
    let index = grid::quantize(coord.latitude(), coord.longitude());
    let columns = grid::columns_at_lat(index.row);

    let y_error_m = (180.0 / N_LAT as f64).to_radians() * grid::EARTH_RADIUS_M / 2.0;
    let x_error_m = (360.0 / f64::from(columns)).to_radians()
        * grid::EARTH_RADIUS_M
        * coord.latitude().to_radians().cos()
        / 2.0;
    let total_error_m = (x_error_m * x_error_m + y_error_m * y_error_m).sqrt();

    Ok(PrecisionEstimate {
        x_error_m,
        y_error_m,
        total_error_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_zero_for_identical_code() {
        let code = Code::from_coordinate(Coordinate::create(12.3, 45.6).unwrap()).canonical();
        assert_eq!(distance(&code, &code).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Code::from_coordinate(Coordinate::create(10.0, 20.0).unwrap()).canonical();
        let b = Code::from_coordinate(Coordinate::create(-5.0, 100.0).unwrap()).canonical();
        assert!((distance(&a, &b).unwrap() - distance(&b, &a).unwrap()).abs() < 1e-6);
    }

    #[test]
    fn precision_bounded_everywhere() {
        for lat in [-89.9, -45.0, 0.0, 45.0, 89.9] {
            let p = precision(lat, 0.0).unwrap();
            assert!(p.total_error_m <= 3.5, "lat {lat}: {}", p.total_error_m);
        }
    }

    #[test]
    fn invalid_inputs_error() {
        assert!(distance("NOTACODE!", "Q7KH2BBYF").is_err());
        assert!(precision(91.0, 0.0).is_err());
    }
}
