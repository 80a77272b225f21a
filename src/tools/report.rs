use std::fmt::Write;

use crate::huffman_coding::coding::HuffmanCoding;

use super::cli::HuffOpts;

/// Render the coding as requested by the options: the codeword table and metrics,
/// optionally followed by the code tree. Quiet mode gives only the summary line.
pub fn report(coding: &HuffmanCoding, opts: &HuffOpts) -> String {
    if opts.quiet {
        return format!("{}\n", coding);
    }

    let dist = coding.distribution();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:<8} {:>8} {:>12}  {:<16} {:>6}",
        "symbol", "count", "probability", "codeword", "length"
    );
    for ((sym, code), p) in coding.codewords().iter().zip(coding.probabilities()) {
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>12.6}  {:<16} {:>6}",
            format!("{:?}", sym),
            dist.count(sym).unwrap_or(0),
            p,
            code,
            code.len()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "symbols:        {}", dist.total());
    let _ = writeln!(out, "distinct:       {}", coding.codewords().len());
    let _ = writeln!(out, "average length: {:.6} bits", coding.average_code_length());
    let _ = writeln!(out, "entropy:        {:.6} bits", coding.entropy());
    let _ = writeln!(out, "redundancy:     {:.6} bits", coding.redundancy());
    let _ = writeln!(out, "efficiency:     {:.2}%", coding.efficiency() * 100.0);
    let _ = writeln!(out, "kraft sum:      {:.6}", coding.kraft_sum());

    if opts.show_tree {
        let _ = writeln!(out);
        let _ = write!(out, "{}", coding.tree());
    }
    out
}
