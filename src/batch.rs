//! Bulk encode/decode helpers over slices of coordinates or codes.
//!
//! These are thin wrappers around [`crate::encode`]/[`crate::decode`]; they
//! exist so callers processing many points at once get a single `Result`
//! (the index of the first failure is still recoverable from the error, by
//! re-running that one input) instead of hand-rolling the loop.

use crate::{Coordinate, Result};

/// Encodes every `(latitude, longitude)` pair in `coordinates`, in order.
///
/// # Errors
/// Returns the first [`crate::Error`] produced by [`crate::encode`], if any.
///
/// # Example
/// ```
/// use grid9::batch_encode;
///
/// let codes = batch_encode(&[(40.7128, -74.0060), (51.5074, -0.1278)], false).unwrap();
/// assert_eq!(codes.len(), 2);
/// ```
pub fn batch_encode(coordinates: &[(f64, f64)], human_readable: bool) -> Result<Vec<String>> {
    coordinates
        .iter()
        .map(|&(lat, lon)| crate::encode(lat, lon, human_readable))
        .collect()
}

/// Decodes every code in `codes`, in order.
///
/// # Errors
/// Returns the first [`crate::Error`] produced by [`crate::decode`], if any.
///
/// # Example
/// ```
/// use grid9::{batch_encode, batch_decode};
///
/// let codes = batch_encode(&[(40.7128, -74.0060), (51.5074, -0.1278)], false).unwrap();
/// let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
/// let coords = batch_decode(&refs).unwrap();
/// assert_eq!(coords.len(), 2);
/// ```
pub fn batch_decode(codes: &[&str]) -> Result<Vec<Coordinate>> {
    codes.iter().map(|code| crate::decode(code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_encode_matches_single_encode() {
        let points = [(40.7128, -74.0060), (51.5074, -0.1278), (-33.8688, 151.2093)];
        let batched = batch_encode(&points, false).unwrap();
        for (code, &(lat, lon)) in batched.iter().zip(points.iter()) {
            assert_eq!(code, &crate::encode(lat, lon, false).unwrap());
        }
    }

    #[test]
    fn batch_decode_matches_single_decode() {
        let points = [(40.7128, -74.0060), (51.5074, -0.1278)];
        let codes = batch_encode(&points, false).unwrap();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let decoded = batch_decode(&refs).unwrap();
        for (coord, &(lat, lon)) in decoded.iter().zip(points.iter()) {
            assert!((coord.latitude() - lat).abs() < 0.001);
            assert!((coord.longitude() - lon).abs() < 0.001);
        }
    }

    #[test]
    fn batch_encode_fails_fast_on_invalid_input() {
        let points = [(40.7128, -74.0060), (200.0, 0.0)];
        assert!(batch_encode(&points, false).is_err());
    }

    #[test]
    fn batch_decode_fails_fast_on_invalid_input() {
        assert!(batch_decode(&["Q7KH2BBYF", "NOTVALID!"]).is_err());
    }

    #[test]
    fn empty_batches_are_empty() {
        assert!(batch_encode(&[], false).unwrap().is_empty());
        assert!(batch_decode(&[]).unwrap().is_empty());
    }
}
