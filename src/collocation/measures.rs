//! Bigram association measures
//!
//! Scores are computed from the 2x2 contingency table of a bigram
//! `(w1, w2)` over a corpus of `n_xx` tokens:
//!
//! |            | w2     | not w2 |
//! |------------|--------|--------|
//! | **w1**     | n_ii   | n_io   |
//! | **not w1** | n_oi   | n_oo   |

/// Keeps logarithms finite for empty cells
const SMALL: f64 = 1e-20;

/// Raw counts describing one bigram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marginals {
    /// Occurrences of the bigram
    pub n_ii: f64,
    /// Occurrences of the first word
    pub n_ix: f64,
    /// Occurrences of the second word
    pub n_xi: f64,
    /// Total number of tokens
    pub n_xx: f64,
}

impl Marginals {
    pub fn new(n_ii: u64, n_ix: u64, n_xi: u64, n_xx: u64) -> Self {
        Self {
            n_ii: n_ii as f64,
            n_ix: n_ix as f64,
            n_xi: n_xi as f64,
            n_xx: n_xx as f64,
        }
    }

    /// Contingency cells in the order `[n_ii, n_oi, n_io, n_oo]`
    ///
    /// Cells are floored at zero. A self-pair `(w, w)` counts overlapping
    /// runs in both marginals, which can push `n_oo` below zero.
    pub fn contingency(&self) -> [f64; 4] {
        let n_oi = (self.n_xi - self.n_ii).max(0.0);
        let n_io = (self.n_ix - self.n_ii).max(0.0);
        let n_oo = (self.n_xx - self.n_ii - n_oi - n_io).max(0.0);
        [self.n_ii, n_oi, n_io, n_oo]
    }
}

/// Expected cell counts under independence
///
/// Cell `i` shares a row with `i ^ 1` and a column with `i ^ 2`.
pub fn expected_values(cont: &[f64; 4]) -> [f64; 4] {
    let n: f64 = cont.iter().sum();
    let mut expected = [0.0; 4];
    for (i, slot) in expected.iter_mut().enumerate() {
        *slot = (cont[i] + cont[i ^ 1]) * (cont[i] + cont[i ^ 2]) / n;
    }
    expected
}

/// Dunning's log-likelihood ratio (G²)
///
/// Higher means the pair co-occurs further from chance.
pub fn likelihood_ratio(marginals: Marginals) -> f64 {
    let cont = marginals.contingency();
    let expected = expected_values(&cont);
    2.0 * cont
        .iter()
        .zip(expected.iter())
        .map(|(&obs, &exp)| obs * (obs / (exp + SMALL) + SMALL).ln())
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_contingency_table() {
        let m = Marginals::new(1, 3, 2, 10);
        assert_eq!(m.contingency(), [1.0, 1.0, 2.0, 6.0]);
    }

    #[test]
    fn test_self_pair_cells_stay_non_negative() {
        // "c a c c": c=3, (c, c)=1, N=4
        let m = Marginals::new(1, 3, 3, 4);
        assert_eq!(m.contingency(), [1.0, 2.0, 2.0, 0.0]);
        assert!(likelihood_ratio(m).is_finite());
    }

    #[test]
    fn test_expected_values_sum_to_total() {
        let cont = Marginals::new(2, 5, 4, 20).contingency();
        let expected = expected_values(&cont);
        assert!(close(expected.iter().sum::<f64>(), 20.0));
    }

    #[test]
    fn test_likelihood_ratio_values() {
        assert!(close(likelihood_ratio(Marginals::new(2, 2, 2, 10)), 10.008048470763757));
        assert!(close(likelihood_ratio(Marginals::new(1, 3, 2, 10)), 0.4473350049571543));
        assert!(close(likelihood_ratio(Marginals::new(1, 1, 1, 2)), 4.0 * 2f64.ln()));
    }

    #[test]
    fn test_exclusive_pair_outscores_scattered_pair() {
        let exclusive = likelihood_ratio(Marginals::new(5, 5, 5, 100));
        let scattered = likelihood_ratio(Marginals::new(1, 20, 20, 100));
        assert!(exclusive > scattered);
    }
}
