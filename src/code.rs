//! `Code`: a parsed, validated Grid9 code.
//!
//! Mirrors the role the underlying coordinate-conversion lineage gave its
//! own formatted coordinate type: a small value built by parsing a string
//! or by packing grid indices, displayed back out in canonical form.

use std::fmt::Display;

use crate::{
    alphabet::{decode_digit, ALPHABET},
    coordinate::Coordinate,
    grid::{self, GridIndex, LON_BITS, N_LAT},
    Error, ParseCoord, Result,
};

const CODE_LEN: usize = 9;
const FORMATTED_LEN: usize = 11;
const DASH_POSITIONS: [usize; 2] = [3, 7];

/// A parsed Grid9 code: 9 base-32 characters packing a 45-bit grid-index
/// payload (22 bits of row, 23 bits of column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Code {
    index: GridIndex,
}

impl Code {
    pub(crate) fn from_index(index: GridIndex) -> Code {
        Code { index }
    }

    pub(crate) fn index(&self) -> GridIndex {
        self.index
    }

    /// Encodes a coordinate directly to a `Code`.
    pub fn from_coordinate(coord: Coordinate) -> Code {
        Code::from_index(grid::quantize(coord.latitude(), coord.longitude()))
    }

    /// Decodes this code to the coordinate at the center of its cell.
    pub fn to_coordinate(&self) -> Coordinate {
        let (lat, lon) = grid::dequantize(self.index());
        Coordinate::new_unchecked(lat, lon)
    }

    fn packed(&self) -> u64 {
        (u64::from(self.index.row) << LON_BITS) | u64::from(self.index.col)
    }

    fn digits(&self) -> [u8; CODE_LEN] {
        let packed = self.packed();
        let mut out = [0u8; CODE_LEN];
        for (k, slot) in out.iter_mut().enumerate() {
            let shift = 5 * (CODE_LEN - 1 - k);
            let digit = ((packed >> shift) & 0x1F) as usize;
            *slot = ALPHABET[digit];
        }
        out
    }

    /// The canonical 9-character form.
    pub fn canonical(&self) -> String {
        String::from_utf8(self.digits().to_vec()).expect("alphabet is ASCII")
    }

    /// The human-readable `XXX-XXX-XXX` form.
    pub fn formatted(&self) -> String {
        insert_dashes(&self.canonical())
    }

    /// `true` if `value` is an 11-character string with dashes at exactly
    /// positions 3 and 7 (it is not otherwise validated as a code).
    pub fn is_formatted(value: &str) -> bool {
        has_dashes_at(value, &DASH_POSITIONS) && value.len() == FORMATTED_LEN
    }
}

fn has_dashes_at(value: &str, positions: &[usize]) -> bool {
    let bytes = value.as_bytes();
    positions.iter().all(|&p| bytes.get(p) == Some(&b'-'))
}

fn insert_dashes(code: &str) -> String {
    format!("{}-{}-{}", &code[0..3], &code[3..6], &code[6..9])
}

impl ParseCoord for Code {
    fn parse_coord(value: &str) -> Result<Code> {
        let canonical = match value.len() {
            CODE_LEN => {
                if value.contains('-') {
                    return Err(Error::InvalidCode {
                        code: value.to_string(),
                        reason: "unexpected dash in 9-character code".to_string(),
                    });
                }
                value.to_string()
            }
            FORMATTED_LEN => {
                if !has_dashes_at(value, &DASH_POSITIONS) {
                    return Err(Error::InvalidCode {
                        code: value.to_string(),
                        reason: "dashes must be at positions 3 and 7".to_string(),
                    });
                }
                value.chars().filter(|&c| c != '-').collect()
            }
            len => {
                return Err(Error::InvalidCode {
                    code: value.to_string(),
                    reason: format!("length {len} is not 9 (or 11 with dashes)"),
                })
            }
        };

        let mut packed: u64 = 0;
        for ch in canonical.chars() {
            let digit = decode_digit(ch as u8).ok_or_else(|| Error::InvalidCode {
                code: value.to_string(),
                reason: format!("character {ch:?} is not in the Grid9 alphabet"),
            })?;
            packed = (packed << 5) | u64::from(digit);
        }

        let row = (packed >> LON_BITS) as u32;
        let col = (packed & ((1u64 << LON_BITS) - 1)) as u32;

        if u64::from(row) >= N_LAT {
            return Err(Error::InvalidCode {
                code: value.to_string(),
                reason: format!("row index {row} out of range"),
            });
        }
        if col >= grid::columns_at_lat(row) {
            return Err(Error::InvalidCode {
                code: value.to_string(),
                reason: format!("column index {col} out of range for row {row}"),
            });
        }

        Ok(Code::from_index(GridIndex { row, col }))
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl std::str::FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Code> {
        Code::parse_coord(s)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(value: String) -> Result<Code> {
        Code::parse_coord(&value)
    }
}

#[cfg(feature = "serde")]
impl From<Code> for String {
    fn from(value: Code) -> String {
        value.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string() {
        let coord = Coordinate::create(40.7128, -74.0060).unwrap();
        let code = Code::from_coordinate(coord);
        let canonical = code.canonical();

        assert_eq!(canonical.len(), CODE_LEN);

        let parsed = Code::parse_coord(&canonical).unwrap();
        assert_eq!(parsed, code);
        assert_eq!(parsed.canonical(), canonical);
    }

    #[test]
    fn accepts_formatted_and_unformatted() {
        let coord = Coordinate::create(35.6762, 139.6503).unwrap();
        let code = Code::from_coordinate(coord);

        let formatted = code.formatted();
        assert!(Code::is_formatted(&formatted));

        let from_formatted = Code::parse_coord(&formatted).unwrap();
        assert_eq!(from_formatted, code);
    }

    #[test]
    fn rejects_excluded_letters() {
        assert!(Code::parse_coord("ABCDEFGHI").is_err()); // contains I
        assert!(Code::parse_coord("ABCDEFGHL").is_err()); // contains L
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Code::parse_coord("TOOLONGCODE").is_err());
        assert!(Code::parse_coord("SHORT").is_err());
        assert!(Code::parse_coord("").is_err());
    }

    #[test]
    fn rejects_misplaced_dash() {
        assert!(Code::parse_coord("Q7KH-2BBYF").is_err());
    }

    #[test]
    fn is_case_insensitive() {
        let code = Code::from_coordinate(Coordinate::create(10.0, 10.0).unwrap());
        let lower = code.canonical().to_lowercase();
        let parsed = Code::parse_coord(&lower).unwrap();
        assert_eq!(parsed, code);
        // Canonical output is always uppercase.
        assert_eq!(parsed.canonical(), parsed.canonical().to_uppercase());
    }
}
