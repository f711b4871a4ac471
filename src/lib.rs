#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

//! # Grid9 — uniform-precision coordinate compression
//!
//! Grid9 packs a WGS-84 `(latitude, longitude)` pair into a 9-character
//! base-32 code with globally uniform positional error below roughly 3.5
//! meters, including at the poles, and recovers a coordinate (the center of
//! the encoded cell) from that code.
//!
//! ```
//! use grid9::{encode, decode};
//!
//! let code = encode(40.7128, -74.0060, false).unwrap(); // NYC
//! assert_eq!(code.len(), 9);
//!
//! let coord = decode(&code).unwrap();
//! assert!((coord.latitude() - 40.7128).abs() < 0.001);
//! ```
//!
//! The codec is pure and stateless: every operation is a deterministic
//! function of its inputs, safe to call concurrently from any number of
//! threads, with no I/O and no shared mutable state beyond the immutable
//! base-32 alphabet and its reverse lookup table.

use thiserror::Error;

use utility::ThisOrThat;

mod alphabet;
pub mod batch;
pub mod code;
pub mod coordinate;
pub mod geo;
mod grid;
pub mod neighbors;
pub mod search;
mod utility;

pub use batch::{batch_decode, batch_encode};
pub use code::Code;
pub use coordinate::Coordinate;
pub use geo::{distance, precision, PrecisionEstimate};
pub use neighbors::neighbors;
pub use search::find_nearby;

/// Errors produced by the Grid9 codec.
///
/// Every variant names the offending input, per the codec's error-handling
/// contract: failures are synchronous, deterministic, and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude outside `[-90, 90]`, or NaN/infinite.
    #[error("latitude {0} outside of valid range [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside `[-180, 180]`, or NaN/infinite.
    #[error("longitude {0} outside of valid range [-180, 180]")]
    InvalidLongitude(f64),
    /// Malformed Grid9 code: wrong length, bad character, or misplaced dash.
    #[error("invalid Grid9 code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },
    /// Malformed argument to an operation other than coordinates/codes,
    /// e.g. a negative or non-finite search radius.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for Grid9 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Implemented by value types that can be parsed from their canonical
/// string form, mirroring how [`Code`] parses a 9- or 11-character string.
pub trait ParseCoord {
    /// # Errors
    /// Returns [`Error`] if `value` is not a valid encoding of `Self`.
    fn parse_coord(value: &str) -> Result<Self>
    where
        Self: Sized;
}

/// Generic entry point for [`ParseCoord`] implementors, e.g.
/// `grid9::from_str::<_, Code>("Q7KH2BBYF")`.
///
/// # Errors
/// Returns [`Error`] if `value` is not a valid encoding of `T`.
pub fn from_str<S, T>(value: S) -> Result<T>
where
    S: AsRef<str>,
    T: ParseCoord,
{
    T::parse_coord(value.as_ref())
}

/// Encodes a coordinate to a Grid9 code.
///
/// Set `human_readable` to emit the 11-character `XXX-XXX-XXX` form instead
/// of the 9-character canonical form.
///
/// # Errors
/// Returns [`Error::InvalidLatitude`]/[`Error::InvalidLongitude`] if the
/// coordinate is out of range.
///
/// # Example
/// ```
/// use grid9::encode;
///
/// let code = encode(40.7128, -74.0060, false).unwrap();
/// assert_eq!(code.len(), 9);
///
/// let readable = encode(40.7128, -74.0060, true).unwrap();
/// assert_eq!(readable.len(), 11);
/// ```
pub fn encode(latitude: f64, longitude: f64, human_readable: bool) -> Result<String> {
    let coord = Coordinate::create(latitude, longitude)?;
    let code = Code::from_coordinate(coord);
    Ok(human_readable.ternary(code.formatted(), code.to_string()))
}

/// Decodes a Grid9 code (9- or 11-character form) back to its cell-center
/// coordinate.
///
/// # Errors
/// Returns [`Error::InvalidCode`] if `code` is not a valid Grid9 encoding.
///
/// # Example
/// ```
/// use grid9::{encode, decode};
///
/// let code = encode(51.5074, -0.1278, false).unwrap();
/// let coord = decode(&code).unwrap();
/// assert!((coord.longitude() - (-0.1278)).abs() < 0.001);
/// ```
pub fn decode(code: &str) -> Result<Coordinate> {
    let parsed: Code = from_str(code)?;
    Ok(parsed.to_coordinate())
}

/// Returns `true` if `code` is a valid Grid9 code, with or without dashes.
///
/// # Example
/// ```
/// use grid9::is_valid;
///
/// assert!(is_valid("Q7KH2BBYF"));
/// assert!(is_valid("Q7K-H2B-BYF"));
/// assert!(!is_valid("Q7KH2BBYI")); // contains I
/// assert!(!is_valid("Q7KH-2BBYF")); // misplaced dash
/// ```
pub fn is_valid(code: &str) -> bool {
    Code::parse_coord(code).is_ok()
}

/// Formats a 9-character Grid9 code with dashes: `XXX-XXX-XXX`.
///
/// # Errors
/// Returns [`Error::InvalidCode`] if `code` is not a valid 9- or
/// 11-character Grid9 code.
pub fn format(code: &str) -> Result<String> {
    let parsed: Code = from_str(code)?;
    Ok(parsed.formatted())
}

/// Strips the dashes from a formatted Grid9 code, returning the canonical
/// 9-character form.
///
/// # Errors
/// Returns [`Error::InvalidCode`] if `code` is not a valid 9- or
/// 11-character Grid9 code.
pub fn unformat(code: &str) -> Result<String> {
    let parsed: Code = from_str(code)?;
    Ok(parsed.to_string())
}
