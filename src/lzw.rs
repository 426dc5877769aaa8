//! LZW dictionary compression.
//!
//! Classic byte-oriented LZW with the dictionary seeded by the 256
//! single-byte strings and new entries assigned from code 256 upward.
//! [`Lzw`] composes the code stream with any [`UniversalCode`] to get a
//! self-delimiting bit-text representation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::universal::UniversalCode;

/// Compress bytes into a sequence of dictionary codes.
pub fn compress(data: &[u8]) -> Vec<u32> {
    let Some((&first, rest)) = data.split_first() else {
        return Vec::new();
    };
    // Phrases are tracked as (prefix code, extension byte) pairs, so no
    // phrase bytes are ever materialized.
    let mut table: HashMap<(u32, u8), u32> = HashMap::new();
    let mut next = 256u32;
    let mut out = Vec::new();
    let mut cur = first as u32;
    for &byte in rest {
        match table.get(&(cur, byte)) {
            Some(&code) => cur = code,
            None => {
                out.push(cur);
                table.insert((cur, byte), next);
                next += 1;
                cur = byte as u32;
            }
        }
    }
    out.push(cur);
    out
}

/// Expand a code sequence back into bytes.
///
/// # Errors
/// Returns [`Error::InvalidCode`] for any code the encoder cannot have
/// produced at that point (the one-past-the-end code is valid: that is
/// the KwKwK case).
pub fn decompress(codes: &[u32]) -> Result<Vec<u8>> {
    let Some((&first, rest)) = codes.split_first() else {
        return Ok(Vec::new());
    };
    if first >= 256 {
        return Err(Error::InvalidCode(first as u64));
    }
    let mut table: Vec<Vec<u8>> = (0..=255u8).map(|b| vec![b]).collect();
    let mut out = vec![first as u8];
    let mut old = first as usize;
    let mut head = first as u8;
    for &code in rest {
        let entry = if (code as usize) < table.len() {
            table[code as usize].clone()
        } else if code as usize == table.len() {
            // KwKwK: the phrase being defined right now.
            let mut entry = table[old].clone();
            entry.push(head);
            entry
        } else {
            return Err(Error::InvalidCode(code as u64));
        };
        out.extend_from_slice(&entry);
        head = entry[0];
        let mut grown = table[old].clone();
        grown.push(head);
        table.push(grown);
        old = code as usize;
    }
    Ok(out)
}

/// LZW composed with a universal integer code over bit text.
///
/// Dictionary codes are shifted by one on the wire (the universal codes
/// start at 1, while LZW emits code 0 for a NUL byte).
pub struct Lzw<C> {
    code: C,
}

impl<C: UniversalCode> Lzw<C> {
    /// Wrap a universal code.
    pub fn new(code: C) -> Self {
        Self { code }
    }

    /// Compress bytes into bit text.
    ///
    /// # Errors
    /// Propagates errors from the inner code.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let mut out = String::new();
        for code in compress(data) {
            self.code.encode_into(code as u64 + 1, &mut out)?;
        }
        Ok(out)
    }

    /// Expand bit text back into bytes.
    ///
    /// # Errors
    /// Propagates bit-stream errors from the inner code, plus
    /// [`Error::InvalidCode`] for impossible dictionary codes.
    pub fn decode(&self, bits: &str) -> Result<Vec<u8>> {
        let values = self.code.decode_all(bits)?;
        let mut codes = Vec::with_capacity(values.len());
        for value in values {
            let code = value
                .checked_sub(1)
                .and_then(|c| u32::try_from(c).ok())
                .ok_or(Error::InvalidCode(value))?;
            codes.push(code);
        }
        decompress(&codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elias::{EliasDelta, EliasGamma, EliasOmega};
    use crate::fibonacci::Fibonacci;
    use proptest::prelude::*;

    #[test]
    fn test_codes_for_repetitive_input() {
        // "abababab": ab -> 256, ba -> 257, aba -> 258 ...
        assert_eq!(compress(b"abababab"), vec![97, 98, 256, 258, 98]);
    }

    #[test]
    fn test_roundtrip_basic() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        assert_eq!(decompress(&compress(data)).unwrap(), data);
    }

    #[test]
    fn test_kwkwk_immediate() {
        // "aaa" compresses to [97, 256] where 256 is defined by its own
        // first use.
        let codes = compress(b"aaa");
        assert_eq!(codes, vec![97, 256]);
        assert_eq!(decompress(&codes).unwrap(), b"aaa");
    }

    #[test]
    fn test_empty() {
        assert_eq!(compress(b""), Vec::<u32>::new());
        assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_invalid_codes_rejected() {
        assert!(matches!(
            decompress(&[300]),
            Err(Error::InvalidCode(300))
        ));
        assert!(matches!(
            decompress(&[97, 258]),
            Err(Error::InvalidCode(258))
        ));
    }

    #[test]
    fn test_nul_bytes_survive_composition() {
        let data = b"\x00\x00a\x00";
        let coder = Lzw::new(EliasGamma);
        let bits = coder.encode(data).unwrap();
        assert_eq!(coder.decode(&bits).unwrap(), data);
    }

    proptest! {
        #[test]
        fn prop_codes_roundtrip(data in prop::collection::vec(any::<u8>(), 0..400)) {
            prop_assert_eq!(decompress(&compress(&data)).unwrap(), data);
        }

        #[test]
        fn prop_gamma_composition(data in prop::collection::vec(any::<u8>(), 1..200)) {
            let coder = Lzw::new(EliasGamma);
            let bits = coder.encode(&data).unwrap();
            prop_assert_eq!(coder.decode(&bits).unwrap(), data);
        }

        #[test]
        fn prop_delta_composition(data in prop::collection::vec(any::<u8>(), 1..200)) {
            let coder = Lzw::new(EliasDelta);
            let bits = coder.encode(&data).unwrap();
            prop_assert_eq!(coder.decode(&bits).unwrap(), data);
        }

        #[test]
        fn prop_omega_composition(data in prop::collection::vec(any::<u8>(), 1..200)) {
            let coder = Lzw::new(EliasOmega);
            let bits = coder.encode(&data).unwrap();
            prop_assert_eq!(coder.decode(&bits).unwrap(), data);
        }

        #[test]
        fn prop_fibonacci_composition(data in prop::collection::vec(any::<u8>(), 1..200)) {
            let coder = Lzw::new(Fibonacci);
            let bits = coder.encode(&data).unwrap();
            prop_assert_eq!(coder.decode(&bits).unwrap(), data);
        }
    }
}
