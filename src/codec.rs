//! Encoding symbols to bits and decoding them back.
//!
//! The free functions `encode` and `decode` are the individual pipeline
//! stages. `huffman_encoding` / `huffman_decoding` run a whole session,
//! and `HuffmanEncoder` / `HuffmanDecoder` keep a built model around for
//! repeated use on inputs with the same distribution.

use std::hash::Hash;

use tracing::debug;

use crate::bits::BitString;
use crate::code_table::{build_code_table, CodeTable};
use crate::error::{Error, Result, StreamFault};
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::tree::{build_tree, Node};

/// Concatenate the code of every symbol in `symbols`.
///
/// # Errors
/// Returns `Error::MissingSymbol` if a symbol has no code in `table`.
pub fn encode<S: Eq + Hash + Clone>(symbols: &[S], table: &CodeTable<S>) -> Result<BitString> {
    let mut bits = BitString::with_capacity(symbols.len());
    for (position, symbol) in symbols.iter().enumerate() {
        let code = table.get(symbol).ok_or(Error::MissingSymbol { position })?;
        bits.extend_from(code);
    }
    debug!(symbols = symbols.len(), bits = bits.len(), "encoded");
    Ok(bits)
}

/// Walk `bits` through the tree, emitting a symbol at every leaf.
///
/// A lone leaf root decodes each `0` bit to its symbol. With no tree only
/// the empty stream is valid.
///
/// # Errors
/// Returns `Error::MalformedStream` if the stream ends mid-code, steps past
/// a leaf, or is non-empty without a tree.
pub fn decode<S: Clone>(bits: &BitString, root: Option<&Node<S>>) -> Result<Vec<S>> {
    let Some(root) = root else {
        if bits.is_empty() {
            return Ok(Vec::new());
        }
        return Err(Error::MalformedStream {
            position: 0,
            fault: StreamFault::MissingTree,
        });
    };

    let out = match root {
        Node::Leaf { symbol, .. } => decode_single(bits, symbol)?,
        Node::Internal { .. } => decode_walk(bits, root)?,
    };
    debug!(bits = bits.len(), symbols = out.len(), "decoded");
    Ok(out)
}

fn decode_single<S: Clone>(bits: &BitString, symbol: &S) -> Result<Vec<S>> {
    bits.iter()
        .enumerate()
        .map(|(position, bit)| {
            if bit {
                Err(Error::MalformedStream {
                    position,
                    fault: StreamFault::PastLeaf,
                })
            } else {
                Ok(symbol.clone())
            }
        })
        .collect()
}

fn decode_walk<S: Clone>(bits: &BitString, root: &Node<S>) -> Result<Vec<S>> {
    let mut out = Vec::new();
    let mut node = root;
    let mut depth = 0;

    for (position, bit) in bits.iter().enumerate() {
        node = match node {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            Node::Leaf { .. } => {
                return Err(Error::MalformedStream {
                    position,
                    fault: StreamFault::PastLeaf,
                })
            }
        };
        depth += 1;

        if let Node::Leaf { symbol, .. } = node {
            out.push(symbol.clone());
            node = root;
            depth = 0;
        }
    }

    if depth != 0 {
        return Err(Error::MalformedStream {
            position: bits.len(),
            fault: StreamFault::Truncated,
        });
    }
    Ok(out)
}

/// Encode a whole input, returning the bits and the tree needed to decode
/// them.
///
/// Empty input short-circuits to an empty stream and no tree.
pub fn huffman_encoding<S: Eq + Hash + Clone>(
    symbols: &[S],
) -> Result<(BitString, Option<Node<S>>)> {
    if symbols.is_empty() {
        return Ok((BitString::new(), None));
    }
    let encoder = HuffmanEncoder::new(symbols)?;
    let bits = encoder.encode(symbols)?;
    Ok((bits, encoder.into_tree()))
}

/// Decode a stream produced by [`huffman_encoding`] with its tree.
pub fn huffman_decoding<S: Clone>(bits: &BitString, root: Option<&Node<S>>) -> Result<Vec<S>> {
    decode(bits, root)
}

/// Huffman encoder: a frequency table, its tree and its code table.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S> {
    freq: FrequencyTable<S>,
    root: Option<Node<S>>,
    table: CodeTable<S>,
}

impl<S: Eq + Hash + Clone> HuffmanEncoder<S> {
    /// Build the model from the symbols it will encode.
    pub fn new(symbols: &[S]) -> Result<Self> {
        Self::from_frequencies(count_frequencies(symbols))
    }

    /// Build the model from precomputed frequencies.
    ///
    /// An empty table gives an encoder that only accepts empty input.
    pub fn from_frequencies(freq: FrequencyTable<S>) -> Result<Self> {
        let root = if freq.is_empty() {
            None
        } else {
            Some(build_tree(&freq)?)
        };
        let table = build_code_table(root.as_ref());
        Ok(Self { freq, root, table })
    }

    /// Encode a symbol sequence into a bit stream.
    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        encode(symbols, &self.table)
    }

    /// A decoder sharing this encoder's tree.
    pub fn decoder(&self) -> HuffmanDecoder<S> {
        HuffmanDecoder {
            root: self.root.clone(),
        }
    }
}

impl<S> HuffmanEncoder<S> {
    /// The frequencies the model was built from.
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.freq
    }

    /// The Huffman tree, `None` for an empty model.
    pub fn tree(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// The derived code table.
    pub fn code_table(&self) -> &CodeTable<S> {
        &self.table
    }

    /// Give up the model, keeping only the tree.
    pub fn into_tree(self) -> Option<Node<S>> {
        self.root
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder<S> {
    root: Option<Node<S>>,
}

impl<S: Clone> HuffmanDecoder<S> {
    /// Create a decoder for streams encoded against `root`.
    pub fn new(root: Option<Node<S>>) -> Self {
        Self { root }
    }

    /// Create a decoder from the same frequencies the encoder used.
    pub fn from_frequencies(freq: &FrequencyTable<S>) -> Result<Self> {
        if freq.is_empty() {
            return Ok(Self { root: None });
        }
        Ok(Self {
            root: Some(build_tree(freq)?),
        })
    }

    /// Decode a bit stream into a symbol sequence.
    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        decode(bits, self.root.as_ref())
    }
}
