//! Symbol frequency analysis.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};

/// Occurrence counts per distinct symbol.
///
/// Entries are kept in first-appearance order, so iterating a table built
/// from the same input always yields the same sequence. The tree builder
/// relies on this for its tie-break.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    // symbol -> position in `entries`
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// The counts must sum to at most `usize::MAX`, so that every merged
    /// node's frequency fits.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if a count is zero, a symbol repeats,
    /// or the counts overflow.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let mut table = Self::new();
        let mut total = 0usize;
        for (symbol, count) in counts {
            if count == 0 {
                return Err(Error::InvalidInput("zero frequency"));
            }
            if table.index.contains_key(&symbol) {
                return Err(Error::InvalidInput("duplicate symbol"));
            }
            total = total
                .checked_add(count)
                .ok_or(Error::InvalidInput("frequency overflow"))?;
            table.index.insert(symbol.clone(), table.entries.len());
            table.entries.push((symbol, count));
        }
        Ok(table)
    }

    /// Count one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for `symbol`, if it occurred.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(symbol, count)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl<S: PartialEq> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Eq> Eq for FrequencyTable<S> {}

impl<S: Eq + Hash + Clone> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.record(symbol);
        }
        table
    }
}

/// Count how often each distinct symbol occurs in `symbols`.
///
/// An empty input yields an empty table.
pub fn count_frequencies<S: Eq + Hash + Clone>(symbols: &[S]) -> FrequencyTable<S> {
    let table: FrequencyTable<S> = symbols.iter().cloned().collect();
    debug!(symbols = symbols.len(), distinct = table.len(), "counted frequencies");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let text: Vec<char> = "aabbbcc".chars().collect();
        let freq = count_frequencies(&text);

        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 7);
        assert_eq!(freq.get(&'a'), Some(2));
        assert_eq!(freq.get(&'b'), Some(3));
        assert_eq!(freq.get(&'c'), Some(2));
        assert_eq!(freq.get(&'z'), None);

        let order: Vec<char> = freq.iter().map(|(&s, _)| s).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_first_appearance_order() {
        let freq = count_frequencies(b"zzyx");
        let order: Vec<u8> = freq.iter().map(|(&s, _)| s).collect();
        assert_eq!(order, b"zyx".to_vec());
    }

    #[test]
    fn test_empty() {
        let freq = count_frequencies::<u8>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn test_from_counts_rejects_bad_entries() {
        assert_eq!(
            FrequencyTable::from_counts([('a', 1), ('b', 0)]),
            Err(Error::InvalidInput("zero frequency"))
        );
        assert_eq!(
            FrequencyTable::from_counts([('a', 1), ('a', 2)]),
            Err(Error::InvalidInput("duplicate symbol"))
        );

        let freq = FrequencyTable::from_counts([('x', 5), ('y', 1)]).unwrap();
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn test_from_counts_rejects_overflowing_total() {
        assert_eq!(
            FrequencyTable::from_counts([('a', usize::MAX), ('b', 1)]),
            Err(Error::InvalidInput("frequency overflow"))
        );

        let freq = FrequencyTable::from_counts([('a', usize::MAX - 1), ('b', 1)]).unwrap();
        assert_eq!(freq.total(), usize::MAX);
    }
}
