//! Hamming(8,4) single-error-correcting, double-error-detecting code.
//!
//! Each nibble becomes one code byte laid out as `p1 p2 d0 p3 d1 d2 d3 p`
//! where p1/p2/p3 cover the usual Hamming positions and p is the overall
//! parity bit that upgrades the code to SECDED. Any single flipped bit
//! per code byte is corrected; two flips are detected and replaced by a
//! zero nibble.

use crate::error::{Error, Result};

fn codeword(nibble: u8) -> u8 {
    let d0 = (nibble >> 3) & 1;
    let d1 = (nibble >> 2) & 1;
    let d2 = (nibble >> 1) & 1;
    let d3 = nibble & 1;
    let p1 = d0 ^ d1 ^ d3;
    let p2 = d0 ^ d2 ^ d3;
    let p3 = d1 ^ d2 ^ d3;
    let word = (p1 << 7) | (p2 << 6) | (d0 << 5) | (p3 << 4) | (d1 << 3) | (d2 << 2) | (d3 << 1);
    word | (word.count_ones() as u8 & 1)
}

/// Encode bytes; each byte yields two code bytes, high nibble first.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    for &byte in data {
        out.push(codeword(byte >> 4));
        out.push(codeword(byte & 0x0F));
    }
    out
}

/// Decode one code byte by nearest codeword, returning the nibble and
/// whether a double error was detected (the nibble is then 0).
fn decode_block(block: u8) -> (u8, bool) {
    for nibble in 0..16u8 {
        let distance = (block ^ codeword(nibble)).count_ones();
        if distance <= 1 {
            return (nibble, false);
        }
        if distance == 2 {
            return (0, true);
        }
    }
    (0, false)
}

/// Decode a code-byte stream back into bytes, correcting single-bit
/// errors. Returns the decoded bytes and the number of detected
/// double-bit errors (those blocks decode as zero nibbles).
///
/// # Errors
/// Returns [`Error::OddLength`] unless the input is a whole number of
/// nibble pairs.
pub fn decode(data: &[u8]) -> Result<(Vec<u8>, usize)> {
    if data.len() % 2 != 0 {
        return Err(Error::OddLength(data.len()));
    }
    let mut out = Vec::with_capacity(data.len() / 2);
    let mut double_errors = 0usize;
    for pair in data.chunks_exact(2) {
        let (high, bad_high) = decode_block(pair[0]);
        let (low, bad_low) = decode_block(pair[1]);
        double_errors += bad_high as usize + bad_low as usize;
        out.push((high << 4) | low);
    }
    Ok((out, double_errors))
}
