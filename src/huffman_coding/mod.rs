//! The huffman_coding module builds a Huffman code from a symbol distribution.
//!
//! Building happens in three sequential stages:
//! - huffman: repeatedly merge the two lightest nodes until a single root remains. Ties go to the
//!   node registered first, so the same input always yields the same code.
//! - code_assign: walk the merge structure from the root, giving the '0' child and the '1' child
//!   one more bit each, and produce the codeword table and the code tree.
//! - metrics: average codeword length, entropy and related figures.
//!
//! The coding module runs the stages once and holds the results.
//!

pub mod code_assign;
pub mod coding;
pub mod huffman;
pub mod metrics;
