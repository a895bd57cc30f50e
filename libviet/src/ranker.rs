//! Edit-distance candidate generation with frequency priors.
use std::cmp::Ordering;

use libviet_core::distance::{edit_distance, length_gap};
use libviet_core::Vocabulary;

/// A vocabulary word within the distance bound of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub word: String,
    pub distance: usize,
    pub frequency: u64,
    pub score: f64,
}

/// Ranks vocabulary words by `(max_distance - d + 1) * ln(freq + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRanker {
    max_distance: usize,
    top_k: usize,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

impl CandidateRanker {
    pub fn new(max_distance: usize, top_k: usize) -> Self {
        Self {
            max_distance,
            top_k,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Best `top_k` words of `vocab` for `word`.
    pub fn rank(&self, word: &str, vocab: &Vocabulary) -> Vec<String> {
        self.rank_entries(word, vocab.iter())
            .into_iter()
            .map(|c| c.word)
            .collect()
    }

    /// Rank an arbitrary `(word, frequency)` stream, e.g. a filtered view of
    /// a vocabulary.
    ///
    /// Ties on score go to the smaller distance, then the higher frequency,
    /// then the lexicographically smaller word.
    pub fn rank_entries<'a, I>(&self, word: &str, entries: I) -> Vec<RankedCandidate>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let maxd = self.max_distance;
        let mut out: Vec<RankedCandidate> = entries
            .into_iter()
            .filter(|(v, _)| length_gap(v, word) <= maxd)
            .filter_map(|(v, freq)| {
                let d = edit_distance(word, v);
                (d <= maxd).then(|| RankedCandidate {
                    word: v.to_string(),
                    distance: d,
                    frequency: freq,
                    score: (maxd - d + 1) as f64 * (freq as f64).ln_1p(),
                })
            })
            .collect();

        out.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.distance.cmp(&b.distance))
                .then(b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });
        out.truncate(self.top_k);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        [
            ("trời", 500u64),
            ("trôi", 40),
            ("tròn", 60),
            ("trường", 300),
            ("nhà", 100),
            ("nha", 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn respects_distance_bound() {
        let ranker = CandidateRanker::new(1, 10);
        for c in ranker.rank_entries("troi", vocab().iter()) {
            assert!(c.distance <= 1, "{c:?}");
        }
        let words = ranker.rank("troi", &vocab());
        assert!(words.contains(&"trời".to_string()));
        assert!(!words.contains(&"trường".to_string()));
    }

    #[test]
    fn frequency_breaks_equal_distance() {
        let ranker = CandidateRanker::new(2, 3);
        let ranked = ranker.rank("troi", &vocab());
        assert_eq!(ranked[0], "trời");
    }

    #[test]
    fn closer_word_beats_slightly_more_frequent() {
        // 3*ln4 ~ 4.16 against 2*ln6 ~ 3.58.
        let entries = [("abc", 3u64), ("abd", 5)];
        let ranked = CandidateRanker::new(2, 2).rank_entries("abc", entries);
        assert_eq!(ranked[0].word, "abc");
        assert_eq!(ranked[0].distance, 0);
    }

    #[test]
    fn ties_are_deterministic() {
        let entries = [("bac", 7u64), ("abd", 7), ("abe", 7)];
        let ranked = CandidateRanker::new(2, 3).rank_entries("abc", entries);
        // abd and abe are both distance 1; bac is distance 2.
        let words: Vec<_> = ranked.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, ["abd", "abe", "bac"]);
    }

    #[test]
    fn saturated_frequency_scores_finitely() {
        let entries = [("abc", u64::MAX), ("abd", 1)];
        let ranked = CandidateRanker::new(2, 2).rank_entries("abc", entries);
        assert_eq!(ranked[0].word, "abc");
        assert!(ranked[0].score.is_finite() && ranked[0].score > ranked[1].score);
    }

    #[test]
    fn nothing_in_range() {
        let ranker = CandidateRanker::new(1, 5);
        assert!(ranker.rank("xxxxxxxx", &vocab()).is_empty());
    }
}
