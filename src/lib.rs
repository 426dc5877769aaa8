//! # Adaptive Huffman Coding (FGK)
//!
//! *One-pass entropy coding with no transmitted model.*
//!
//! ## Intuition First
//!
//! Classic Huffman coding needs two passes: count all symbol
//! frequencies, build the optimal prefix tree, then encode. The tree (or
//! the frequency table) must also travel with the data, or the decoder
//! cannot rebuild it.
//!
//! Adaptive Huffman coding removes both costs. Encoder and decoder start
//! from the same trivial tree and apply the same deterministic update
//! after every symbol, so their trees stay bit-for-bit identical without
//! a single byte of side information. The code adapts as the statistics
//! drift: a symbol that becomes frequent bubbles toward the root and its
//! code shortens, all while the stream is being produced.
//!
//! ## The Problem
//!
//! Before adaptive coding, we had a trade-off:
//! - **Static Huffman**: optimal per block, but two passes plus a
//!   transmitted model.
//! - **Fixed canonical codes**: one pass, but mismatched to the actual
//!   data.
//!
//! ## Historical Context
//!
//! ```text
//! 1952  Huffman     Optimal prefix codes from known frequencies
//! 1973  Faller      First incremental (adaptive) variant
//! 1978  Gallager    Sibling property; adaptive update formalized
//! 1985  Knuth       Efficient implementation (the "FGK" algorithm)
//! 1987  Vitter      Algorithm V: tighter bound on code length
//! ```
//!
//! The key invariant is Gallager's *sibling property*: every internal
//! node's weight equals the sum of its children's weights, and all nodes
//! can be listed in a single weight-non-decreasing order. A tree has the
//! sibling property if and only if it is a Huffman tree for its leaf
//! weights, so maintaining the property incrementally keeps the code
//! optimal for the counts seen so far.
//!
//! ## Mathematical Formulation
//!
//! After processing a prefix with symbol counts $c_s$ over $n$ symbols,
//! the leaf for $s$ has weight $c_s$ and the mean code length stays
//! within one bit per symbol of the empirical entropy
//!
//! ```text
//! H = -\sum_s (c_s / n) \log_2 (c_s / n)
//! ```
//!
//! plus the escape cost of first occurrences (8 raw bits each behind the
//! NYT path).
//!
//! ## Complexity Analysis
//!
//! - **Time**: tree work proportional to the code length per symbol;
//!   the leader scan is linear in the node count, bounded by 511 nodes
//!   for a byte alphabet.
//! - **Space**: one arena node per distinct symbol seen, at most 511
//!   nodes plus the 256-slot symbol index.
//!
//! ## Failure Modes
//!
//! 1. **Desynchronization**: a single corrupted bit makes the decoder's
//!    tree diverge from the encoder's; everything after is undefined and
//!    unrecoverable (no resynchronization markers exist in the format).
//! 2. **Text-bit expansion**: the `'0'`/`'1'` character representation
//!    costs 8x the packed size; [`bitstream::pack`] exists for storage,
//!    but the textual form is the compatibility contract.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **adaptive**: the FGK coder, the main event.
//! - **elias** / **fibonacci**: universal integer codes behind the
//!   [`universal::UniversalCode`] trait.
//! - **lzw**: dictionary compression, composable with any universal
//!   code.
//! - **hamming**: a Hamming(8,4) SECDED channel code.
//! - **predict** / **vq**: spatial prediction and LBG vector
//!   quantization for image pipelines.
//! - **bitstream** / **entropy**: the text-bit boundary helpers and rate
//!   statistics.
//!
//! ## References
//!
//! - Gallager, R. (1978). "Variations on a Theme by Huffman."
//! - Knuth, D. (1985). "Dynamic Huffman Coding."
//! - Vitter, J. (1987). "Design and Analysis of Dynamic Huffman Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adaptive;
pub mod bitstream;
pub mod elias;
pub mod entropy;
pub mod error;
pub mod fibonacci;
pub mod hamming;
pub mod lzw;
pub mod predict;
pub mod universal;
pub mod vq;

pub use adaptive::{AdaptiveDecoder, AdaptiveEncoder};
pub use elias::{EliasDelta, EliasGamma, EliasOmega};
pub use error::Error;
pub use fibonacci::Fibonacci;
pub use lzw::Lzw;
pub use universal::UniversalCode;
