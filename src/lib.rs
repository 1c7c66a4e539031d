//! # Huffman Coding
//!
//! *Optimal prefix-free codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letters the shortest signals. Huffman
//! coding does the same thing, but picks the lengths so that no other
//! assignment of bit strings could do better for the given counts. Because
//! no code is a prefix of another, the bits can be concatenated without
//! separators and still be split back apart unambiguously.
//!
//! ## The Problem
//!
//! Given symbol counts $f_s$, find bit strings $c_s$ such that no $c_s$ is a
//! prefix of another and the total length $\sum_s f_s \cdot |c_s|$ is
//! minimal.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splits, not always optimal
//! 1952  Huffman     Bottom-up greedy merge, provably optimal prefix code
//! 1989  Deflate     Huffman-coded LZ77 output (zip, gzip, png)
//! ```
//!
//! ## Algorithm
//!
//! 1. Count each distinct symbol ([`count_frequencies`]).
//! 2. Put one leaf per symbol in a min-priority queue keyed by count and
//!    repeatedly merge the two lightest nodes ([`build_tree`]).
//! 3. Read codes off the root-to-leaf paths, `0` left and `1` right
//!    ([`build_code_table`]).
//! 4. Concatenate codes ([`encode`]); walk the tree bit by bit to get the
//!    symbols back ([`decode`]).
//!
//! ```rust
//! use huffman::{huffman_decoding, huffman_encoding};
//!
//! let text: Vec<char> = "aabbbcc".chars().collect();
//! let (bits, tree) = huffman_encoding(&text)?;
//! assert_eq!(bits.len(), 11);
//! assert_eq!(huffman_decoding(&bits, tree.as_ref())?, text);
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n + k \log k)$ for $n$ symbols with $k$ distinct values.
//! - **Encode**: $O(n)$ table lookups.
//! - **Decode**: $O(m)$ tree steps for an $m$-bit stream.
//!
//! ## Failure Modes
//!
//! 1. **Single symbol**: the tree is one leaf with no path. The symbol is
//!    given the one-bit code `0` so occurrences can still be counted.
//! 2. **Mismatched tree**: decoding with a tree from a different input, or a
//!    truncated stream, yields [`Error::MalformedStream`].
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod tree;

pub use bits::BitString;
pub use code_table::{build_code_table, CodeTable};
pub use codec::{
    decode, encode, huffman_decoding, huffman_encoding, HuffmanDecoder, HuffmanEncoder,
};
pub use error::{Error, Result, StreamFault};
pub use frequency::{count_frequencies, FrequencyTable};
pub use tree::{build_tree, Node};
