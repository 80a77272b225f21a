//! The tools module provides the helper functions around the Huffman coder.
//!
//! The tools are:
//! - cli: Command line interface for huffcode.
//! - freq_count: Symbol frequency count and probabilities of the input text.
//! - report: Text rendering of a coding for the terminal.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
