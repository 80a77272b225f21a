use std::fmt::{self, Display, Formatter};

use log::debug;

use super::code_assign::{assign_codes, CodeTree, CodewordTable};
use super::huffman::{build_merge_tree, MergeTree};
use super::metrics;
use crate::error::Result;
use crate::tools::freq_count::Distribution;

/// Text coded by `HuffmanCoding::with_default_sample`.
pub const DEFAULT_SAMPLE: &str = "Hello!";

/// A Huffman code for one input string, with its tree and metrics.
/// Everything is computed once in `new` and is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCoding {
    distribution: Distribution,
    merge_tree: MergeTree,
    table: CodewordTable,
    tree: CodeTree,
    /// Probabilities in codeword table order.
    prob_array: Vec<f64>,
    lengths: Vec<usize>,
    average_length: f64,
    entropy: f64,
}

impl HuffmanCoding {
    /// Code `text` (case-insensitive). Fails with `InvalidInput` on empty text.
    pub fn new(text: &str) -> Result<HuffmanCoding> {
        let distribution = Distribution::from_text(text)?;
        let merge_tree = build_merge_tree(&distribution);
        let (tree, table) = assign_codes(&merge_tree);

        let prob_array: Vec<f64> = table
            .symbols()
            .into_iter()
            .filter_map(|sym| distribution.probability(sym))
            .collect();
        let (average_length, lengths) =
            metrics::average_code_length(&prob_array, &table.lengths());
        let entropy = metrics::entropy(&prob_array);

        debug!(
            "Coded {} symbols: average length {:.4}, entropy {:.4}",
            table.len(),
            average_length,
            entropy
        );
        Ok(HuffmanCoding {
            distribution,
            merge_tree,
            table,
            tree,
            prob_array,
            lengths,
            average_length,
            entropy,
        })
    }

    /// Code the canned `DEFAULT_SAMPLE` string.
    pub fn with_default_sample() -> HuffmanCoding {
        match HuffmanCoding::new(DEFAULT_SAMPLE) {
            Ok(coding) => coding,
            Err(_) => unreachable!("the default sample is not empty"),
        }
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn merge_tree(&self) -> &MergeTree {
        &self.merge_tree
    }

    pub fn codewords(&self) -> &CodewordTable {
        &self.table
    }

    pub fn codeword(&self, sym: char) -> Option<&str> {
        self.table.get(sym)
    }

    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    /// Probabilities, parallel to the codeword table.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob_array
    }

    /// Codeword lengths, parallel to the codeword table.
    pub fn code_lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn average_code_length(&self) -> f64 {
        self.average_length
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn kraft_sum(&self) -> f64 {
        metrics::kraft_sum(&self.lengths)
    }

    pub fn redundancy(&self) -> f64 {
        metrics::redundancy(self.average_length, self.entropy)
    }

    pub fn efficiency(&self) -> f64 {
        metrics::efficiency(self.average_length, self.entropy)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.table.is_prefix_free()
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols, average length {:.4} bits, entropy {:.4} bits, efficiency {:.2}%",
            self.table.len(),
            self.average_length,
            self.entropy,
            self.efficiency() * 100.0
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    const EPS: f64 = 1e-9;

    #[test]
    fn hello_test() {
        let coding = HuffmanCoding::new("Hello!").unwrap();
        assert_eq!(coding.codewords().len(), 5);
        let l = coding.codeword('l').unwrap().len();
        for sym in ['h', 'e', 'o', '!'] {
            assert!(l <= coding.codeword(sym).unwrap().len());
        }
        assert!((coding.average_code_length() - 14.0 / 6.0).abs() < EPS);
        assert!(coding.average_code_length() >= coding.entropy() - EPS);
        assert!(coding.is_prefix_free());
    }

    #[test]
    fn single_symbol_test() {
        let coding = HuffmanCoding::new("aaaa").unwrap();
        assert_eq!(coding.codeword('a'), Some(""));
        assert_eq!(coding.probabilities(), &[1.0]);
        assert_eq!(coding.code_lengths(), &[0]);
        assert_eq!(coding.average_code_length(), 0.0);
        assert_eq!(coding.entropy(), 0.0);
        assert_eq!(coding.efficiency(), 1.0);
    }

    #[test]
    fn uniform_test() {
        let coding = HuffmanCoding::new("abcd").unwrap();
        assert_eq!(coding.entropy(), 2.0);
        assert_eq!(coding.average_code_length(), 2.0);
        assert_eq!(coding.kraft_sum(), 1.0);
        assert_eq!(coding.redundancy(), 0.0);
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(HuffmanCoding::new(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn default_sample_test() {
        assert_eq!(
            HuffmanCoding::with_default_sample(),
            HuffmanCoding::new("Hello!").unwrap()
        );
    }

    #[test]
    fn parallel_arrays_test() {
        let coding = HuffmanCoding::new("Hello!").unwrap();
        // Table order is o ! l h e.
        let expected = [1.0, 1.0, 2.0, 1.0, 1.0].map(|c| c / 6.0);
        assert_eq!(coding.probabilities(), &expected);
        assert_eq!(coding.code_lengths(), &[2, 2, 2, 3, 3]);
    }

    #[test]
    fn display_test() {
        let coding = HuffmanCoding::new("abcd").unwrap();
        assert_eq!(
            coding.to_string(),
            "4 symbols, average length 2.0000 bits, entropy 2.0000 bits, efficiency 100.00%"
        );
    }
}
