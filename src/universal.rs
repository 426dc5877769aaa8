//! Common interface for universal integer codes.
//!
//! A universal code maps positive integers to self-delimiting bit
//! strings, shorter for smaller values. The codes here all share the
//! crate's plain-text bit representation and a domain of `value >= 1`.

use crate::bitstream::BitReader;
use crate::error::Result;

/// A self-delimiting code over positive integers.
pub trait UniversalCode {
    /// Append the codeword for `value` to `out`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::ValueOutOfRange`] for `value == 0`.
    fn encode_into(&self, value: u64, out: &mut String) -> Result<()>;

    /// Decode the next value from the stream. `Ok(None)` signals a clean
    /// end of stream; whether a trailing zero run counts as clean
    /// padding is code-specific.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UnexpectedEof`] if the stream ends inside a
    /// codeword and [`crate::error::Error::InvalidBit`] on a non-bit character.
    fn decode_next(&self, reader: &mut BitReader<'_>) -> Result<Option<u64>>;

    /// Encode a single value into a fresh string.
    ///
    /// # Errors
    /// As [`UniversalCode::encode_into`].
    fn encode(&self, value: u64) -> Result<String> {
        let mut out = String::new();
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    /// Decode every value in the stream.
    ///
    /// # Errors
    /// As [`UniversalCode::decode_next`].
    fn decode_all(&self, bits: &str) -> Result<Vec<u64>> {
        let mut reader = BitReader::new(bits);
        let mut out = Vec::new();
        while let Some(value) = self.decode_next(&mut reader)? {
            out.push(value);
        }
        Ok(out)
    }
}

/// Fold a signed value into the positive domain: n > 0 maps to 2n,
/// n <= 0 maps to 2|n| + 1.
///
/// The domain is `value > i64::MIN`; `i64::MIN` would map to 2^64 + 1,
/// which does not fit in a `u64`. `i64::MIN + 1` maps to exactly
/// `u64::MAX`.
pub fn to_unsigned(value: i64) -> u64 {
    debug_assert!(value > i64::MIN);
    if value > 0 {
        2 * value as u64
    } else {
        2 * value.unsigned_abs() + 1
    }
}

/// Inverse of [`to_unsigned`].
pub fn from_unsigned(value: u64) -> i64 {
    if value % 2 == 0 {
        (value / 2) as i64
    } else {
        -((value / 2) as i64)
    }
}
