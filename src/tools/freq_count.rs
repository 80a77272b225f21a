use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Occurrence counts of each symbol in a lowercased input, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    symbols: Vec<char>,
    counts: Vec<u64>,
    total: u64,
}

impl Distribution {
    /// Count the symbols of `text` after lowercasing it. Empty text is rejected.
    pub fn from_text(text: &str) -> Result<Distribution> {
        if text.is_empty() {
            return Err(Error::InvalidInput("the source sequence is empty".to_string()));
        }

        let mut symbols = Vec::new();
        let mut counts: Vec<u64> = Vec::new();
        // Index of each symbol in `symbols`, so counting stays linear.
        let mut index: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0_u64;

        for sym in text.chars().flat_map(char::to_lowercase) {
            match index.get(&sym) {
                Some(&i) => counts[i] += 1,
                None => {
                    index.insert(sym, symbols.len());
                    symbols.push(sym);
                    counts.push(1);
                }
            }
            total += 1;
        }

        debug!(
            "Counted {} symbols, {} distinct",
            total,
            symbols.len()
        );
        Ok(Distribution {
            symbols,
            counts,
            total,
        })
    }

    /// Number of distinct symbols. Never zero.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a distribution is only built from non-empty text.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total number of (lowercased) characters counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct symbols in first-occurrence order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Raw counts, parallel to `symbols()`.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn count(&self, sym: char) -> Option<u64> {
        self.position(sym).map(|i| self.counts[i])
    }

    pub fn probability(&self, sym: char) -> Option<f64> {
        self.count(sym).map(|c| c as f64 / self.total as f64)
    }

    /// Iterate `(symbol, probability)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        let total = self.total as f64;
        self.symbols
            .iter()
            .zip(&self.counts)
            .map(move |(&s, &c)| (s, c as f64 / total))
    }

    fn position(&self, sym: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == sym)
    }
}

#[cfg(test)]
mod test {
    use super::Distribution;
    use crate::error::Error;

    #[test]
    fn hello_test() {
        let dist = Distribution::from_text("Hello!").unwrap();
        assert_eq!(dist.symbols(), &['h', 'e', 'l', 'o', '!']);
        assert_eq!(dist.counts(), &[1, 1, 2, 1, 1]);
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.probability('l'), Some(2.0 / 6.0));
        assert_eq!(dist.probability('H'), None);
    }

    #[test]
    fn case_folding_test() {
        let dist = Distribution::from_text("AaBb").unwrap();
        assert_eq!(dist.symbols(), &['a', 'b']);
        assert_eq!(dist.counts(), &[2, 2]);
    }

    #[test]
    fn probabilities_sum_to_one_test() {
        let dist = Distribution::from_text("the quick brown fox jumps over the lazy dog").unwrap();
        let sum: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(
            Distribution::from_text(""),
            Err(Error::InvalidInput(_))
        ));
    }
}
