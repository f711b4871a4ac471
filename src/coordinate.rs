//! The `(latitude, longitude)` value type Grid9 operates on.

use std::fmt::Display;

use crate::{grid::EARTH_RADIUS_M, Error};

/// A validated WGS-84 latitude/longitude pair, in degrees.
///
/// Values returned by [`crate::decode`] are the center of the decoded
/// Grid9 cell, not necessarily the original pre-encoded input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    longitude: f64,
}

impl Coordinate {
    /// Internal-only constructor that skips range validation; callers must
    /// already know `lat`/`lon` are in range (e.g. values just produced by
    /// the quantizer).
    pub(crate) fn new_unchecked(lat: f64, lon: f64) -> Coordinate {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Validates and constructs a coordinate.
    ///
    /// * Latitude must be finite and in `[-90, 90]`.
    /// * Longitude must be finite and in `[-180, 180]`; `180` is normalized
    ///   to `-180`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`] if
    /// either value is out of range, `NaN`, or infinite.
    ///
    /// # Example
    /// ```
    /// use grid9::Coordinate;
    ///
    /// let coord = Coordinate::create(40.7128, -74.0060).unwrap();
    /// assert_eq!(coord.latitude(), 40.7128);
    ///
    /// assert!(Coordinate::create(100.0, 0.0).is_err());
    /// assert!(Coordinate::create(0.0, f64::NAN).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<Coordinate, Error> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidLongitude(lon));
        }

        // +180 and -180 name the same meridian; canonicalize to -180.
        let lon = if lon == 180.0 { -180.0 } else { lon };

        Ok(Coordinate::new_unchecked(lat, lon))
    }

    /// The latitude, in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude, in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether this coordinate is in the northern hemisphere (or exactly on
    /// the equator).
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// The great-circle distance to `other`, in meters, via the haversine
    /// formula on a sphere of radius 6,371,000 m.
    ///
    /// # Example
    /// ```
    /// use grid9::Coordinate;
    ///
    /// let a = Coordinate::create(0.0, 0.0).unwrap();
    /// let b = Coordinate::create(0.0, 0.0).unwrap();
    /// assert_eq!(a.haversine(&b), 0.0);
    /// ```
    pub fn haversine(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(f, "{lat} {lon}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::create(90.1, 0.0).is_err());
        assert!(Coordinate::create(-90.1, 0.0).is_err());
        assert!(Coordinate::create(0.0, 180.1).is_err());
        assert!(Coordinate::create(0.0, -180.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::create(f64::NAN, 0.0).is_err());
        assert!(Coordinate::create(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn normalizes_positive_180_to_negative_180() {
        let coord = Coordinate::create(0.0, 180.0).unwrap();
        assert_eq!(coord.longitude(), -180.0);
    }

    #[test]
    fn haversine_is_symmetric_and_zero_for_self() {
        let nyc = Coordinate::create(40.7128, -74.0060).unwrap();
        let london = Coordinate::create(51.5074, -0.1278).unwrap();

        assert_eq!(nyc.haversine(&nyc), 0.0);
        assert!((nyc.haversine(&london) - london.haversine(&nyc)).abs() < 1e-6);
    }
}
