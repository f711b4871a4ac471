//! The Crockford-style base-32 alphabet and its reverse lookup table.
//!
//! The alphabet omits `I`, `L`, `O`, and `U` to avoid confusion with `1`,
//! `1`, `0`, and `V`. It is immutable, process-wide data: the forward table
//! is a `const` array, and the reverse table is built once via
//! [`lazy_static`] the first time it's needed, exactly as the crate this
//! codec grew out of built its one runtime-computed constant.

use lazy_static::lazy_static;

pub(crate) const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

lazy_static! {
    /// Maps an ASCII byte (uppercased) to its base-32 digit value, or `-1`
    /// if the byte is not in [`ALPHABET`].
    static ref DECODE_TABLE: [i8; 256] = {
        let mut table = [-1i8; 256];
        for (value, &byte) in ALPHABET.iter().enumerate() {
            table[byte as usize] = value as i8;
        }
        table
    };
}

/// Looks up the base-32 digit value of `byte`, case-insensitively.
///
/// Returns `None` for any byte outside the alphabet, including the
/// deliberately excluded `I`, `L`, `O`, `U` (upper or lower case).
pub(crate) fn decode_digit(byte: u8) -> Option<u8> {
    let upper = byte.to_ascii_uppercase();
    match DECODE_TABLE[upper as usize] {
        -1 => None,
        digit => Some(digit as u8),
    }
}
