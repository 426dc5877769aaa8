//! Fibonacci universal code.
//!
//! Encodes a positive integer through its Zeckendorf representation:
//! one bit per Fibonacci number starting at F(2) = 1, least significant
//! first, with an extra `'1'` appended so every codeword ends in the
//! unique marker `"11"`.

use crate::bitstream::BitReader;
use crate::error::{Error, Result};
use crate::universal::UniversalCode;

// F(2)..: the largest run that fits in u64.
fn fib_table() -> Vec<u64> {
    let mut fibs = vec![1u64, 2];
    loop {
        let next = match fibs[fibs.len() - 1].checked_add(fibs[fibs.len() - 2]) {
            Some(next) => next,
            None => break,
        };
        fibs.push(next);
    }
    fibs
}

/// Fibonacci code over positive integers.
pub struct Fibonacci;

impl UniversalCode for Fibonacci {
    fn encode_into(&self, value: u64, out: &mut String) -> Result<()> {
        if value == 0 {
            return Err(Error::ValueOutOfRange(value));
        }
        let fibs = fib_table();
        let highest = match fibs.iter().rposition(|&f| f <= value) {
            Some(highest) => highest,
            None => unreachable!("fib table starts at 1"),
        };
        let mut bits = vec![false; highest + 1];
        let mut rest = value;
        for i in (0..=highest).rev() {
            if fibs[i] <= rest {
                bits[i] = true;
                rest -= fibs[i];
            }
        }
        for bit in bits {
            out.push(if bit { '1' } else { '0' });
        }
        out.push('1');
        Ok(())
    }

    fn decode_next(&self, reader: &mut BitReader<'_>) -> Result<Option<u64>> {
        let fibs = fib_table();
        let mut value = 0u64;
        let mut index = 0usize;
        let mut prev_one = false;
        loop {
            match reader.read_bit()? {
                None => {
                    // An all-zero tail is byte padding; anything else is
                    // a codeword cut short.
                    return if value == 0 {
                        Ok(None)
                    } else {
                        Err(Error::UnexpectedEof)
                    };
                }
                Some(true) if prev_one => return Ok(Some(value)),
                Some(bit) => {
                    if bit {
                        let fib = fibs.get(index).ok_or(Error::ValueOutOfRange(value))?;
                        value = value.checked_add(*fib).ok_or(Error::ValueOutOfRange(value))?;
                    }
                    prev_one = bit;
                    index += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_codewords() {
        assert_eq!(Fibonacci.encode(1).unwrap(), "11");
        assert_eq!(Fibonacci.encode(2).unwrap(), "011");
        assert_eq!(Fibonacci.encode(3).unwrap(), "0011");
        assert_eq!(Fibonacci.encode(4).unwrap(), "1011");
        assert_eq!(Fibonacci.encode(11).unwrap(), "001011");
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(
            Fibonacci.encode(0),
            Err(Error::ValueOutOfRange(0))
        ));
    }

    #[test]
    fn test_padding_tolerated() {
        let mut bits = Fibonacci.encode(7).unwrap();
        bits.push_str("0000");
        assert_eq!(Fibonacci.decode_all(&bits).unwrap(), vec![7]);
    }

    #[test]
    fn test_partial_codeword_fails() {
        assert!(matches!(
            Fibonacci.decode_all("010"),
            Err(Error::UnexpectedEof)
        ));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(values in prop::collection::vec(1u64..1_000_000, 1..40)) {
            let mut bits = String::new();
            for &v in &values {
                Fibonacci.encode_into(v, &mut bits).unwrap();
            }
            prop_assert_eq!(Fibonacci.decode_all(&bits).unwrap(), values);
        }
    }
}
