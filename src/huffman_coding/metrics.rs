//! Information-theoretic figures for a code. All functions take parallel slices of
//! probabilities and codeword lengths, in the same symbol order.

/// Expected codeword length, Σ p·len. Also returns the lengths it was computed from.
pub fn average_code_length(probs: &[f64], lengths: &[usize]) -> (f64, Vec<usize>) {
    let average = probs
        .iter()
        .zip(lengths)
        .map(|(p, &len)| p * len as f64)
        .sum();
    (average, lengths.to_vec())
}

/// Shannon entropy in bits, -Σ p·log2(p). Probabilities must be positive.
pub fn entropy(probs: &[f64]) -> f64 {
    // Accumulate p·log2(1/p) so a certain symbol contributes +0.0 rather than -0.0.
    probs.iter().map(|&p| p * (1.0 / p).log2()).sum()
}

/// Σ 2^-len. At most 1 for any prefix code, exactly 1 for a complete one.
pub fn kraft_sum(lengths: &[usize]) -> f64 {
    lengths.iter().map(|&len| 0.5_f64.powi(len as i32)).sum()
}

/// Bits per symbol spent above the entropy.
pub fn redundancy(average: f64, entropy: f64) -> f64 {
    average - entropy
}

/// Entropy over average length. A zero-length code (one symbol) counts as fully efficient.
pub fn efficiency(average: f64, entropy: f64) -> f64 {
    if average == 0.0 {
        1.0
    } else {
        entropy / average
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn average_test() {
        let (avg, lengths) = average_code_length(&[0.5, 0.25, 0.25], &[1, 2, 2]);
        assert_eq!(avg, 1.5);
        assert_eq!(lengths, vec![1, 2, 2]);
    }

    #[test]
    fn entropy_test() {
        assert_eq!(entropy(&[0.25; 4]), 2.0);
        assert_eq!(entropy(&[1.0]), 0.0);
        assert_eq!(entropy(&[0.5, 0.25, 0.25]), 1.5);
    }

    #[test]
    fn kraft_test() {
        assert_eq!(kraft_sum(&[1, 2, 2]), 1.0);
        assert_eq!(kraft_sum(&[0]), 1.0);
        assert_eq!(kraft_sum(&[2, 2, 2]), 0.75);
    }

    #[test]
    fn efficiency_test() {
        assert_eq!(efficiency(0.0, 0.0), 1.0);
        assert_eq!(efficiency(2.0, 1.5), 0.75);
        assert_eq!(redundancy(2.0, 1.5), 0.5);
    }
}
