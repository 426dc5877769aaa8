//! Plain-text bit streams.
//!
//! Every coder in this crate speaks sequences of literal `'0'`/`'1'`
//! characters rather than packed binary. That representation is the
//! external contract between encode and decode paths; packing into real
//! bytes is a separate framing step provided by [`pack`] and [`unpack`].

use crate::error::{Error, Result};

/// Expand bytes into their `'0'`/`'1'` text form, most significant bit
/// first.
pub fn to_bitstring(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8);
    for &byte in data {
        push_bits(&mut out, byte as u64, 8);
    }
    out
}

/// Append `width` bits of `value` to `out`, most significant bit first.
pub fn push_bits(out: &mut String, value: u64, width: u32) {
    for i in (0..width).rev() {
        out.push(if (value >> i) & 1 == 1 { '1' } else { '0' });
    }
}

/// Pack bit text into bytes, zero-padding the tail on the right to a
/// byte boundary.
///
/// # Errors
/// Returns [`Error::InvalidBit`] if `bits` contains a character other
/// than `'0'` or `'1'`.
pub fn pack(bits: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bits.len().div_ceil(8));
    let mut acc = 0u8;
    let mut filled = 0u32;
    for c in bits.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => return Err(Error::InvalidBit(other)),
        };
        acc = (acc << 1) | bit;
        filled += 1;
        if filled == 8 {
            out.push(acc);
            acc = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        out.push(acc << (8 - filled));
    }
    Ok(out)
}

/// Expand packed bytes back into bit text. Padding bits appended by
/// [`pack`] come back as trailing zeros; stripping them is the caller's
/// (or the inner code's) concern.
pub fn unpack(data: &[u8]) -> String {
    to_bitstring(data)
}

/// Cursor over a `'0'`/`'1'` text stream.
pub struct BitReader<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the given bit text.
    pub fn new(bits: &'a str) -> Self {
        Self {
            chars: bits.chars(),
        }
    }

    /// Whether the stream is exhausted.
    pub fn is_empty(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Read the next bit. `Ok(None)` signals a clean end of stream.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBit`] on a non-bit character.
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        match self.chars.next() {
            Some('0') => Ok(Some(false)),
            Some('1') => Ok(Some(true)),
            Some(other) => Err(Error::InvalidBit(other)),
            None => Ok(None),
        }
    }

    /// Read the next bit, treating end of stream as an error.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] at end of stream and
    /// [`Error::InvalidBit`] on a non-bit character.
    pub fn expect_bit(&mut self) -> Result<bool> {
        self.read_bit()?.ok_or(Error::UnexpectedEof)
    }

    /// Read an 8-bit literal, most significant bit first.
    ///
    /// # Errors
    /// Fails like [`BitReader::expect_bit`] if fewer than 8 bits remain.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.expect_bit()? as u8;
        }
        Ok(value)
    }
}
