//! Entropy and compression statistics.

/// Order-0 Shannon entropy of a byte sequence, in bits per symbol.
/// Returns 0 for empty input.
pub fn shannon(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    let total = data.len() as f64;
    // log2(N) - sum(c * log2 c) / N, the factored form of -sum(p log2 p).
    let weighted: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| c as f64 * (c as f64).log2())
        .sum();
    total.log2() - weighted / total
}

/// Order-1 conditional entropy H(X | previous X), in bits per symbol.
/// The first byte has no predecessor and only seeds the context.
pub fn conditional(data: &[u8]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let mut context_counts = [0u64; 256];
    let mut pair_counts = vec![0u64; 256 * 256];
    for pair in data.windows(2) {
        context_counts[pair[0] as usize] += 1;
        pair_counts[pair[0] as usize * 256 + pair[1] as usize] += 1;
    }
    let total = (data.len() - 1) as f64;
    let mut result = 0.0;
    for context in 0..256 {
        let count = context_counts[context];
        if count == 0 {
            continue;
        }
        let weighted: f64 = pair_counts[context * 256..(context + 1) * 256]
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as f64 * (c as f64).log2())
            .sum();
        let inner = (count as f64).log2() - weighted / count as f64;
        result += count as f64 / total * inner;
    }
    result
}

/// Mean emitted code length in bits per input symbol.
pub fn mean_code_length(input_len: usize, bit_len: usize) -> f64 {
    if input_len == 0 {
        return 0.0;
    }
    bit_len as f64 / input_len as f64
}

/// Ratio of raw input bits to emitted bits.
pub fn compression_ratio(input_len: usize, bit_len: usize) -> f64 {
    if bit_len == 0 {
        return 0.0;
    }
    input_len as f64 * 8.0 / bit_len as f64
}
