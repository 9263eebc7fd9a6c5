//! Bigram frequency counting

use rustc_hash::FxHashMap;

use super::measures::Marginals;

/// An adjacent word pair with its association score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBigram {
    pub bigram: (String, String),
    pub score: f64,
}

/// Word and adjacent-pair frequencies over one token sequence
#[derive(Debug, Clone, Default)]
pub struct BigramFinder {
    word_fd: FxHashMap<String, u64>,
    bigram_fd: FxHashMap<(String, String), u64>,
    n_words: u64,
}

impl BigramFinder {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut finder = Self {
            n_words: words.len() as u64,
            ..Self::default()
        };

        for word in words {
            *finder.word_fd.entry(word.as_ref().to_string()).or_insert(0) += 1;
        }
        for pair in words.windows(2) {
            let key = (pair[0].as_ref().to_string(), pair[1].as_ref().to_string());
            *finder.bigram_fd.entry(key).or_insert(0) += 1;
        }

        finder
    }

    /// Total tokens counted
    pub fn n_words(&self) -> u64 {
        self.n_words
    }

    /// Number of distinct bigram types
    pub fn num_bigrams(&self) -> usize {
        self.bigram_fd.len()
    }

    pub fn word_count(&self, word: &str) -> u64 {
        self.word_fd.get(word).copied().unwrap_or(0)
    }

    pub fn bigram_count(&self, first: &str, second: &str) -> u64 {
        self.bigram_fd
            .get(&(first.to_string(), second.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Score every distinct bigram and sort by descending score
    ///
    /// Ties are broken by the bigram itself in ascending lexicographic order,
    /// so the ranking is deterministic.
    pub fn score_bigrams(&self, measure: impl Fn(Marginals) -> f64) -> Vec<ScoredBigram> {
        let mut scored: Vec<ScoredBigram> = self
            .bigram_fd
            .iter()
            .map(|((first, second), &count)| {
                let marginals = Marginals::new(
                    count,
                    self.word_count(first),
                    self.word_count(second),
                    self.n_words,
                );
                ScoredBigram {
                    bigram: (first.clone(), second.clone()),
                    score: measure(marginals),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.bigram.cmp(&b.bigram))
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collocation::measures::likelihood_ratio;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_counts() {
        let finder = BigramFinder::from_words(&words("a b a b c"));
        assert_eq!(finder.n_words(), 5);
        assert_eq!(finder.word_count("a"), 2);
        assert_eq!(finder.bigram_count("a", "b"), 2);
        assert_eq!(finder.bigram_count("b", "a"), 1);
        assert_eq!(finder.bigram_count("c", "a"), 0);
        assert_eq!(finder.num_bigrams(), 3);
    }

    #[test]
    fn test_empty_and_single_word() {
        assert_eq!(BigramFinder::from_words::<&str>(&[]).num_bigrams(), 0);
        assert_eq!(BigramFinder::from_words(&["alone"]).num_bigrams(), 0);
    }

    #[test]
    fn test_ranking_with_ties() {
        let finder = BigramFinder::from_words(&words(
            "new york is big and new york is old but old york is small",
        ));
        let scored = finder.score_bigrams(likelihood_ratio);
        let order: Vec<(&str, &str)> = scored
            .iter()
            .map(|s| (s.bigram.0.as_str(), s.bigram.1.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("york", "is"),
                ("new", "york"),
                ("big", "and"),
                ("and", "new"),
                ("but", "old"),
                ("old", "but"),
                ("is", "big"),
                ("is", "small"),
                ("is", "old"),
                ("old", "york"),
            ]
        );
        assert!((scored[0].score - 14.548235495654431).abs() < 1e-9);
    }
}
