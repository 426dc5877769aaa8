//! Error types shared by all coders in the crate.

use thiserror::Error;

/// Error variants for encoding and decoding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The bit stream ended in the middle of a codeword or literal.
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// The bit stream contains a character other than '0' or '1'.
    #[error("invalid bit character {0:?} in stream")]
    InvalidBit(char),

    /// The value cannot be represented by the chosen code (e.g. 0 for a
    /// universal code whose domain starts at 1).
    #[error("value {0} is not representable by this code")]
    ValueOutOfRange(u64),

    /// A dictionary code the decoder cannot have assigned yet.
    #[error("invalid dictionary code {0}")]
    InvalidCode(u64),

    /// A block stream whose length is not a whole number of blocks.
    #[error("stream length {0} is not a whole number of blocks")]
    OddLength(usize),

    /// An operation that needs at least one input element got none.
    #[error("input is empty")]
    EmptyInput,

    /// An I/O error occurred while reading or writing a stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;
