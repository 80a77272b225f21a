//! Huffman prefix codes for short texts.
//!
//! Computes the Huffman code for the characters of an input string (case-insensitive),
//! the binary code tree, and the expected codeword length and entropy of the code.
//!
//! Basic usage:
//!
//! ```
//! let coding = huffcode::HuffmanCoding::new("Hello!").unwrap();
//! assert_eq!(coding.codewords().len(), 5);
//! assert!(coding.average_code_length() >= coding.entropy());
//! ```
//!
//! From the command line:
//!
//! `$> huffcode -t "Hello!"`
//!
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{Error, Result};
pub use huffman_coding::code_assign::{CodeTree, CodewordTable};
pub use huffman_coding::coding::{HuffmanCoding, DEFAULT_SAMPLE};
pub use tools::freq_count::Distribution;
