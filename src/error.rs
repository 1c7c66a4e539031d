//! Error types for Huffman coding.

use thiserror::Error;

/// Why a bit stream could not be decoded against a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamFault {
    /// The stream ended part way down a root-to-leaf path.
    #[error("stream ends mid-code")]
    Truncated,

    /// A step tried to descend below a leaf.
    #[error("step past a leaf")]
    PastLeaf,

    /// Bits were supplied without a tree to decode them against.
    #[error("non-empty stream with no tree")]
    MissingTree,
}

/// Error variants for Huffman operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input cannot form a tree or a frequency table (e.g. no symbols).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A symbol being encoded has no code in the table.
    #[error("symbol at position {position} has no code")]
    MissingSymbol {
        /// Index of the offending symbol in the input sequence.
        position: usize,
    },

    /// The bit stream does not match the tree it is decoded against.
    #[error("malformed stream at bit {position}: {fault}")]
    MalformedStream {
        /// Bit index where decoding failed (stream length for truncation).
        position: usize,
        /// What went wrong.
        fault: StreamFault,
    },

    /// A textual bit string contained something other than '0' or '1'.
    #[error("invalid bit character: {0:?}")]
    InvalidBit(char),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
