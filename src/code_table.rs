//! Prefix-free code table derivation.
//!
//! Codes are read off the tree depth first: `0` for a left step, `1` for a
//! right step. Every symbol sits at its own leaf, so no code can be a
//! prefix of another.
//!
//! When the tree is a single leaf there is no path to read. That symbol
//! gets the one-bit code `0`, so each occurrence still costs one bit and
//! the decoder can count occurrences back out.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::bits::BitString;
use crate::frequency::FrequencyTable;
use crate::tree::Node;

/// Symbol to code mapping, iterated in left-to-right leaf order.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    entries: Vec<(S, BitString)>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, symbol: S, code: BitString) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Code for `symbol`, if it is in the table.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    /// Bits needed to encode the input `freq` was counted from, or `None`
    /// if some counted symbol has no code or the total overflows.
    pub fn encoded_len(&self, freq: &FrequencyTable<S>) -> Option<usize> {
        freq.iter().try_fold(0usize, |bits, (symbol, count)| {
            let code = self.get(symbol)?;
            bits.checked_add(code.len().checked_mul(count)?)
        })
    }
}

impl<S> CodeTable<S> {
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no codes (empty input).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(symbol, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.entries.iter().map(|(symbol, code)| (symbol, code))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, (_, a))| {
            self.entries
                .iter()
                .enumerate()
                .all(|(j, (_, b))| i == j || !b.starts_with(a))
        })
    }
}

/// Derive the code table for a tree.
///
/// `None` (empty input) yields an empty table. Every call builds a fresh
/// table; nothing is shared between calls.
pub fn build_code_table<S: Eq + Hash + Clone>(root: Option<&Node<S>>) -> CodeTable<S> {
    let mut table = CodeTable::new();
    match root {
        None => {}
        Some(Node::Leaf { symbol, .. }) => {
            table.insert(symbol.clone(), BitString::from(vec![false]));
        }
        Some(node) => {
            let mut prefix = BitString::new();
            collect_codes(node, &mut prefix, &mut table);
        }
    }

    debug!(symbols = table.len(), max_code_len = table.max_code_len(), "built code table");
    table
}

fn collect_codes<S: Eq + Hash + Clone>(
    node: &Node<S>,
    prefix: &mut BitString,
    table: &mut CodeTable<S>,
) {
    match node {
        Node::Leaf { symbol, .. } => table.insert(symbol.clone(), prefix.clone()),
        Node::Internal { left, right, .. } => {
            prefix.push(false);
            collect_codes(left, prefix, table);
            prefix.pop();

            prefix.push(true);
            collect_codes(right, prefix, table);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;

    fn table_for(text: &str) -> (FrequencyTable<char>, CodeTable<char>) {
        let data: Vec<char> = text.chars().collect();
        let freq = count_frequencies(&data);
        let root = build_tree(&freq).unwrap();
        let table = build_code_table(Some(&root));
        (freq, table)
    }

    fn code(table: &CodeTable<char>, symbol: char) -> String {
        table.get(&symbol).unwrap().to_string()
    }

    #[test]
    fn test_known_codes() {
        let (freq, table) = table_for("aabbbcc");
        assert_eq!(code(&table, 'b'), "0");
        assert_eq!(code(&table, 'a'), "10");
        assert_eq!(code(&table, 'c'), "11");
        assert_eq!(table.encoded_len(&freq), Some(11));
        assert_eq!(table.max_code_len(), 2);
        assert!(table.is_prefix_free());

        let order: Vec<char> = table.iter().map(|(&s, _)| s).collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let (freq, table) = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code(&table, 'a'), "0");
        assert_eq!(table.encoded_len(&freq), Some(4));
    }

    #[test]
    fn test_no_tree_gives_empty_table() {
        let table = build_code_table::<char>(None);
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_calls_do_not_share_state() {
        let (_, first) = table_for("xxyz");
        let (_, second) = table_for("pq");
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert!(second.get(&'x').is_none());
    }

    #[test]
    fn test_missing_symbol_in_encoded_len() {
        let (_, table) = table_for("ab");
        let other = count_frequencies(&['a', 'z']);
        assert_eq!(table.encoded_len(&other), None);
    }

    #[test]
    fn test_encoded_len_overflow() {
        let freq =
            FrequencyTable::from_counts([('a', usize::MAX - 2), ('b', 1), ('c', 1)]).unwrap();
        let root = build_tree(&freq).unwrap();
        let table = build_code_table(Some(&root));
        assert_eq!(table.len(), 3);
        assert_eq!(table.encoded_len(&freq), None);
    }

    #[test]
    fn test_prefix_free_on_larger_alphabet() {
        let (freq, table) = table_for("the quick brown fox jumps over the lazy dog");
        assert_eq!(table.len(), freq.len());
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_detects_prefix_violation() {
        let mut table = CodeTable::new();
        table.insert('a', "0".parse().unwrap());
        table.insert('b', "01".parse().unwrap());
        assert!(!table.is_prefix_free());
    }
}
