//! Elias universal codes (gamma, delta, omega).
//!
//! Three self-delimiting codes for positive integers, in increasing
//! order of asymptotic efficiency. Gamma spends roughly `2 log n` bits,
//! delta `log n + 2 log log n`, omega approaches `log n` plus an
//! iterated-logarithm overhead.

use crate::bitstream::{push_bits, BitReader};
use crate::error::{Error, Result};
use crate::universal::UniversalCode;

fn bit_width(value: u64) -> u32 {
    64 - value.leading_zeros()
}

/// Elias gamma: `N - 1` zeros followed by the N-bit binary form of the
/// value.
pub struct EliasGamma;

impl UniversalCode for EliasGamma {
    fn encode_into(&self, value: u64, out: &mut String) -> Result<()> {
        if value == 0 {
            return Err(Error::ValueOutOfRange(value));
        }
        let width = bit_width(value);
        for _ in 1..width {
            out.push('0');
        }
        push_bits(out, value, width);
        Ok(())
    }

    fn decode_next(&self, reader: &mut BitReader<'_>) -> Result<Option<u64>> {
        let mut zeros = 0u32;
        loop {
            match reader.read_bit()? {
                // A zero run hitting end of stream is byte-boundary
                // padding, not a truncated codeword.
                None => return Ok(None),
                Some(false) => zeros += 1,
                Some(true) => break,
            }
        }
        if zeros >= 64 {
            // No 64-bit value has such a codeword; the stream is corrupt.
            return Err(Error::ValueOutOfRange(zeros as u64));
        }
        let mut value = 1u64;
        for _ in 0..zeros {
            value = (value << 1) | reader.expect_bit()? as u64;
        }
        Ok(Some(value))
    }
}

/// Elias delta: the gamma-coded bit length followed by the value with
/// its leading one removed.
pub struct EliasDelta;

impl UniversalCode for EliasDelta {
    fn encode_into(&self, value: u64, out: &mut String) -> Result<()> {
        if value == 0 {
            return Err(Error::ValueOutOfRange(value));
        }
        let width = bit_width(value);
        EliasGamma.encode_into(width as u64, out)?;
        if width > 1 {
            push_bits(out, value & !(1u64 << (width - 1)), width - 1);
        }
        Ok(())
    }

    fn decode_next(&self, reader: &mut BitReader<'_>) -> Result<Option<u64>> {
        let width = match EliasGamma.decode_next(reader)? {
            Some(width) => width,
            None => return Ok(None),
        };
        if width > 64 {
            return Err(Error::ValueOutOfRange(width));
        }
        let mut value = 1u64;
        for _ in 1..width {
            value = (value << 1) | reader.expect_bit()? as u64;
        }
        Ok(Some(value))
    }
}

/// Elias omega: recursively length-prefixed groups, terminated by a
/// single `'0'`. The value 1 is the bare `'0'`, so omega streams cannot
/// tolerate zero padding; feed them unpadded bit text.
pub struct EliasOmega;

impl UniversalCode for EliasOmega {
    fn encode_into(&self, value: u64, out: &mut String) -> Result<()> {
        if value == 0 {
            return Err(Error::ValueOutOfRange(value));
        }
        let mut groups = Vec::new();
        let mut k = value;
        while k > 1 {
            let width = bit_width(k);
            let mut group = String::new();
            push_bits(&mut group, k, width);
            groups.push(group);
            k = (width - 1) as u64;
        }
        for group in groups.iter().rev() {
            out.push_str(group);
        }
        out.push('0');
        Ok(())
    }

    fn decode_next(&self, reader: &mut BitReader<'_>) -> Result<Option<u64>> {
        let mut value = 1u64;
        loop {
            match reader.read_bit()? {
                None => {
                    // End of stream before any group: clean end. After a
                    // group has been read the terminating '0' is
                    // mandatory.
                    return if value == 1 {
                        Ok(None)
                    } else {
                        Err(Error::UnexpectedEof)
                    };
                }
                Some(false) => return Ok(Some(value)),
                Some(true) => {
                    if value > 63 {
                        return Err(Error::ValueOutOfRange(value));
                    }
                    let mut next = 1u64;
                    for _ in 0..value {
                        next = (next << 1) | reader.expect_bit()? as u64;
                    }
                    value = next;
                }
            }
        }
    }
}
